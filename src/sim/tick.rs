//! Fixed timestep simulation tick
//!
//! The orchestrator: resolves input, advances kinematics, runs the spawner,
//! and applies the collision rules, in that order, once per frame.

use log::{debug, info};

use super::entity::Kinematic;
use super::spawner::AsteroidField;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input state for a single tick.
///
/// Rotation and thrust are "is held" flags; holding both directions of a
/// pair cancels it out. `fire` may be held, the player's cooldown rate-limits
/// actual shots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
}

impl TickInput {
    /// Net turn direction: -1, 0 or +1. Opposite inputs cancel.
    fn turn(&self) -> f32 {
        (self.rotate_right as i8 - self.rotate_left as i8) as f32
    }

    /// Net thrust direction: -1, 0 or +1. Opposite inputs cancel.
    fn thrust(&self) -> f32 {
        (self.thrust_forward as i8 - self.thrust_backward as i8) as f32
    }
}

/// Advance the session by one tick.
///
/// `dt` is the wall-clock seconds elapsed since the previous tick; negative
/// values are clamped to zero rather than applied. Once the phase is
/// `GameOver` the call is a no-op.
///
/// Collision checks are discrete overlap tests against the post-move
/// positions. A very large `dt` can let a fast shot step over a thin
/// asteroid without touching it (no continuous sweep); frame drivers are
/// expected to cap their timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    let dt = dt.max(0.0);

    state.tick_count += 1;
    state.elapsed += dt;

    // Input resolution. Velocity does not persist across frames: thrust sets
    // it, an idle frame clears it.
    let turn = input.turn();
    if turn != 0.0 {
        state.player.rotate(dt, turn);
    }
    let thrust = input.thrust();
    if thrust != 0.0 {
        state.player.thrust(thrust);
    } else {
        state.player.halt();
    }
    // Check the cooldown before allocating an id so held-fire frames under
    // cooldown do not burn entity ids
    if input.fire && state.player.can_shoot() {
        let id = state.next_entity_id();
        if let Some(shot) = state.player.shoot(id) {
            debug!("shot {} fired at ({:.1}, {:.1})", id, shot.pos.x, shot.pos.y);
            state.shots.push(shot);
        }
    }

    // Kinematics
    state.player.update(dt);
    for shot in &mut state.shots {
        shot.update(dt);
    }
    for rock in &mut state.asteroids {
        rock.update(dt);
    }

    // Edge spawner. The timer always advances; the cap only suppresses the
    // actual spawn.
    if state.field.advance(dt) && state.asteroids.len() < ASTEROID_CAP {
        let id = state.next_entity_id();
        let rock = AsteroidField::spawn_edge(&mut state.rng, id);
        debug!(
            "asteroid {} spawned at ({:.0}, {:.0}) vel ({:.0}, {:.0})",
            id, rock.pos.x, rock.pos.y, rock.vel.x, rock.vel.y
        );
        state.asteroids.push(rock);
    }

    state.shots.retain(|shot| !shot.expired());

    // Player vs asteroid: the first contact ends the session
    for rock in &state.asteroids {
        if rock.collides(&state.player) {
            info!(
                "player struck by asteroid {} after {:.2}s ({} ticks)",
                rock.id, state.elapsed, state.tick_count
            );
            state.phase = GamePhase::GameOver;
            return;
        }
    }

    // Shot vs asteroid. Fragments are collected and appended after the scan
    // so a removed entity is never re-tested within this tick.
    let mut fragments = Vec::new();
    let mut rock_idx = 0;
    while rock_idx < state.asteroids.len() {
        let mut destroyed = false;
        let mut shot_idx = 0;
        while shot_idx < state.shots.len() {
            if state.asteroids[rock_idx].collides(&state.shots[shot_idx]) {
                state.shots.swap_remove(shot_idx);
                let parent = state.asteroids.swap_remove(rock_idx);
                if parent.tier.smaller().is_some() {
                    let ids = (state.next_entity_id(), state.next_entity_id());
                    if let Some(children) = parent.split(&mut state.rng, ids) {
                        debug!("asteroid {} split into {} and {}", parent.id, ids.0, ids.1);
                        fragments.extend(children);
                    }
                } else {
                    debug!("asteroid {} destroyed", parent.id);
                }
                destroyed = true;
                break;
            }
            shot_idx += 1;
        }
        if !destroyed {
            rock_idx += 1;
        }
    }
    state.asteroids.extend(fragments);
}
