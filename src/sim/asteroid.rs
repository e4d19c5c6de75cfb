//! Asteroids and the splitting rule
//!
//! An asteroid drifts in a straight line at the velocity it was spawned
//! with; there is no acceleration. Its radius follows a discrete size tier.
//! When shot, a non-smallest asteroid breaks into exactly two fragments one
//! tier down; a smallest one simply vanishes.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Kinematic;
use crate::consts::*;
use crate::rotate_degrees;

/// Discrete size class; radius and split behavior follow the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    pub fn radius(self) -> f32 {
        match self {
            AsteroidTier::Large => ASTEROID_RADIUS_LARGE,
            AsteroidTier::Medium => ASTEROID_RADIUS_MEDIUM,
            AsteroidTier::Small => ASTEROID_RADIUS_SMALL,
        }
    }

    /// The next tier down, or `None` for the smallest
    pub fn smaller(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub tier: AsteroidTier,
}

impl Asteroid {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, tier: AsteroidTier) -> Self {
        Self { id, pos, vel, tier }
    }

    /// Break apart after a shot impact.
    ///
    /// Smallest-tier asteroids leave nothing. Larger tiers yield exactly two
    /// fragments of the next tier down, both at the parent's position, with
    /// headings rotated +/- a random 20-50 degree angle off the parent's and
    /// sped up by the split factor. A parent at rest has no heading, so the
    /// fragments fall back to the +X axis at the minimum spawn speed; they
    /// are never degenerate.
    pub fn split(&self, rng: &mut Pcg32, ids: (u32, u32)) -> Option<[Asteroid; 2]> {
        let tier = self.tier.smaller()?;

        let (heading, speed) = if self.vel.length_squared() > f32::EPSILON {
            (self.vel.normalize(), self.vel.length())
        } else {
            (Vec2::X, SPAWN_SPEED_MIN)
        };

        let angle = rng.random_range(SPLIT_ANGLE_MIN..SPLIT_ANGLE_MAX);
        let speed = speed * SPLIT_SPEED_FACTOR;

        Some([
            Asteroid::new(ids.0, self.pos, rotate_degrees(heading, angle) * speed, tier),
            Asteroid::new(ids.1, self.pos, rotate_degrees(heading, -angle) * speed, tier),
        ])
    }
}

impl Kinematic for Asteroid {
    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.tier.radius()
    }
}
