//! Shot projectiles
//!
//! A shot has no operations beyond kinematics: it flies in a straight line
//! at a fixed speed and signals its own removal once its lifetime elapses or
//! it drifts far outside the field, so missed shots never accumulate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Kinematic;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds this shot has been alive
    pub age: f32,
}

impl Shot {
    pub fn new(id: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            age: 0.0,
        }
    }

    /// True once the shot should be removed: past its lifetime, or outside
    /// the field by more than the cull margin
    pub fn expired(&self) -> bool {
        self.age >= SHOT_LIFETIME
            || self.pos.x < -SHOT_CULL_MARGIN
            || self.pos.x > FIELD_WIDTH + SHOT_CULL_MARGIN
            || self.pos.y < -SHOT_CULL_MARGIN
            || self.pos.y > FIELD_HEIGHT + SHOT_CULL_MARGIN
    }
}

impl Kinematic for Shot {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        SHOT_RADIUS
    }
}
