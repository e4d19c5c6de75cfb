//! Game state and entity ownership
//!
//! Everything the simulation mutates lives here: the single player ship, the
//! shot and asteroid collections, the edge spawner and the seeded RNG. The
//! orchestrator in `tick` owns the state exclusively for the duration of a
//! tick; nothing else mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::player::Player;
use super::shot::Shot;
use super::spawner::AsteroidField;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// The player was struck by an asteroid. Terminal: ticks become no-ops.
    GameOver,
}

/// Entity kind tag on a drawable snapshot entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawableKind {
    Player,
    Shot,
    Asteroid,
}

/// Renderer-facing view of one live entity: enough to draw a circle or an
/// oriented polygon, nothing more
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub pos: Vec2,
    /// Facing in degrees; only the player has an orientation
    pub rotation: Option<f32>,
    pub radius: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Injected RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Ticks processed so far
    pub tick_count: u64,
    /// Simulated seconds elapsed
    pub elapsed: f32,
    pub player: Player,
    pub shots: Vec<Shot>,
    pub asteroids: Vec<Asteroid>,
    pub field: AsteroidField,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh session: player at the field center, empty field, timer at zero
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            tick_count: 0,
            elapsed: 0.0,
            player: Player::new(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)),
            shots: Vec::new(),
            asteroids: Vec::new(),
            field: AsteroidField::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Snapshot of everything currently live, for the external renderer
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::with_capacity(1 + self.shots.len() + self.asteroids.len());
        out.push(Drawable {
            kind: DrawableKind::Player,
            pos: self.player.pos,
            rotation: Some(self.player.rotation),
            radius: PLAYER_RADIUS,
        });
        for shot in &self.shots {
            out.push(Drawable {
                kind: DrawableKind::Shot,
                pos: shot.pos,
                rotation: None,
                radius: SHOT_RADIUS,
            });
        }
        for rock in &self.asteroids {
            out.push(Drawable {
                kind: DrawableKind::Asteroid,
                pos: rock.pos,
                rotation: None,
                radius: rock.tier.radius(),
            });
        }
        out
    }
}
