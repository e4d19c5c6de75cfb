//! Shared kinematic capability
//!
//! Every live entity is a moving circle: it advances its own state by the
//! tick's delta time and exposes a position and bounding radius for the
//! collision tests and the renderer snapshot.

use glam::Vec2;

use super::collision::circles_overlap;

/// Capability set shared by the player, shots and asteroids
pub trait Kinematic {
    /// Advance position (and rotation where applicable) by `dt` seconds.
    /// Mutates only the entity's own state; `dt = 0` leaves it unchanged.
    fn update(&mut self, dt: f32);

    /// Center of the bounding circle
    fn position(&self) -> Vec2;

    /// Bounding radius, always positive
    fn radius(&self) -> f32;

    /// Strict circle-overlap test against another entity. Symmetric; never
    /// call with `other = self`.
    fn collides(&self, other: &impl Kinematic) -> bool
    where
        Self: Sized,
    {
        circles_overlap(self.position(), self.radius(), other.position(), other.radius())
    }
}
