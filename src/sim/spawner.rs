//! Timer-driven asteroid field spawner
//!
//! One spawner lives per session. It accumulates delta time and, each time
//! the spawn interval elapses, emits a single largest-tier asteroid just
//! outside a random field edge with a velocity pointing generally inward.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, AsteroidTier};
use crate::consts::*;
use crate::rotate_degrees;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidField {
    /// Seconds accumulated since the last spawn
    timer: f32,
    /// Seconds between spawns
    pub interval: f32,
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self {
            timer: 0.0,
            interval: SPAWN_INTERVAL,
        }
    }
}

impl AsteroidField {
    /// Spawner with a non-default interval (tests use `f32::INFINITY` to
    /// hold spawning off entirely)
    pub fn with_interval(interval: f32) -> Self {
        Self {
            timer: 0.0,
            interval,
        }
    }

    /// Advance the spawn timer; true when a spawn is due this tick.
    ///
    /// At most one spawn fires per tick: a `dt` large enough to span several
    /// intervals still yields a single spawn and resets the timer to zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer < self.interval {
            return false;
        }
        self.timer = 0.0;
        true
    }

    /// Create one largest-tier asteroid at a uniformly random point along a
    /// random field edge, offset outward by its radius, heading inward along
    /// the edge normal deflected by a random angle, at a random speed.
    pub fn spawn_edge(rng: &mut Pcg32, id: u32) -> Asteroid {
        let tier = AsteroidTier::Large;
        let r = tier.radius();

        let t = rng.random_range(0.0..1.0);
        let (pos, inward) = match rng.random_range(0..4u8) {
            0 => (Vec2::new(t * FIELD_WIDTH, -r), Vec2::Y),
            1 => (Vec2::new(t * FIELD_WIDTH, FIELD_HEIGHT + r), -Vec2::Y),
            2 => (Vec2::new(-r, t * FIELD_HEIGHT), Vec2::X),
            _ => (Vec2::new(FIELD_WIDTH + r, t * FIELD_HEIGHT), -Vec2::X),
        };

        let deflection = rng.random_range(-SPAWN_DEFLECTION_MAX..SPAWN_DEFLECTION_MAX);
        let speed = rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX);

        Asteroid::new(id, pos, rotate_degrees(inward, deflection) * speed, tier)
    }
}
