//! Vector Rocks - a headless Asteroids-style arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//!
//! Windowing, rendering and audio are external collaborators: the embedding
//! frame driver calls `sim::tick` once per frame with the elapsed delta time
//! and the current input state, then reads back `GameState::drawables()` and
//! the game phase.

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playable field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player ship collision radius
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Turn rate (degrees per second)
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Thrust speed (pixels per second)
    pub const PLAYER_MOVE_SPEED: f32 = 200.0;

    /// Shot defaults
    pub const SHOT_RADIUS: f32 = 5.0;
    pub const SHOT_SPEED: f32 = 500.0;
    /// Minimum time between consecutive shots (seconds)
    pub const SHOT_COOLDOWN: f32 = 0.3;
    /// Shots self-expire after this long (seconds)
    pub const SHOT_LIFETIME: f32 = 2.0;
    /// Shots this far outside the field are culled (pixels)
    pub const SHOT_CULL_MARGIN: f32 = 50.0;

    /// Asteroid tier radii (pixels)
    pub const ASTEROID_RADIUS_LARGE: f32 = 40.0;
    pub const ASTEROID_RADIUS_MEDIUM: f32 = 20.0;
    pub const ASTEROID_RADIUS_SMALL: f32 = 10.0;

    /// Seconds between automatic edge spawns
    pub const SPAWN_INTERVAL: f32 = 0.8;
    /// Spawn speed range (pixels per second)
    pub const SPAWN_SPEED_MIN: f32 = 40.0;
    pub const SPAWN_SPEED_MAX: f32 = 100.0;
    /// Maximum deflection of a spawn heading off the edge normal (degrees)
    pub const SPAWN_DEFLECTION_MAX: f32 = 30.0;

    /// Split heading deflection range (degrees)
    pub const SPLIT_ANGLE_MIN: f32 = 20.0;
    pub const SPLIT_ANGLE_MAX: f32 = 50.0;
    /// Fragments fly this much faster than their parent
    pub const SPLIT_SPEED_FACTOR: f32 = 1.2;

    /// Live asteroids are capped to bound memory
    pub const ASTEROID_CAP: usize = 64;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Unit vector along a heading given in degrees (0 = +X, counterclockwise)
#[inline]
pub fn vec_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Rotate a vector counterclockwise by an angle in degrees
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
