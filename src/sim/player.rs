//! The player ship and its controller operations
//!
//! Rotation is held in degrees and wrapped into [0, 360). Velocity is not
//! persistent: thrust sets it along the current facing and it is cleared at
//! the start of any frame with no movement input. That is a deliberate
//! no-inertia simplification, not physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Kinematic;
use super::shot::Shot;
use crate::consts::*;
use crate::{vec_from_degrees, wrap_degrees};

/// The player's ship. Exactly one lives per session, created at the field
/// center; the session ends on its first contact with an asteroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing in degrees, wrapped into [0, 360)
    pub rotation: f32,
    pub vel: Vec2,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            vel: Vec2::ZERO,
            cooldown: 0.0,
        }
    }

    /// Unit vector along the current facing
    #[inline]
    pub fn facing(&self) -> Vec2 {
        vec_from_degrees(self.rotation)
    }

    /// Turn at the fixed rate; `direction` is +1 (counterclockwise) or -1.
    /// The wrap into [0, 360) is continuous modular arithmetic, never a jump.
    pub fn rotate(&mut self, dt: f32, direction: f32) {
        self.rotation = wrap_degrees(self.rotation + PLAYER_TURN_SPEED * dt * direction);
    }

    /// Set velocity along the facing; `direction` is +1 forward or -1 back
    pub fn thrust(&mut self, direction: f32) {
        self.vel = self.facing() * PLAYER_MOVE_SPEED * direction;
    }

    /// Clear velocity for a frame with no movement input
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
    }

    /// True once the fire cooldown from the previous shot has elapsed
    pub fn can_shoot(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Fire a shot from the ship's nose along the current facing and restart
    /// the cooldown. Silently returns `None` while the cooldown from the
    /// previous shot is still running.
    pub fn shoot(&mut self, id: u32) -> Option<Shot> {
        if !self.can_shoot() {
            return None;
        }
        self.cooldown = SHOT_COOLDOWN;
        let facing = self.facing();
        Some(Shot::new(
            id,
            self.pos + facing * PLAYER_RADIUS,
            facing * SHOT_SPEED,
        ))
    }
}

impl Kinematic for Player {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }
}
