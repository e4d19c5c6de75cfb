//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the per-tick delta time the frame driver supplies
//! - Seeded RNG only, injected into spawn and split logic
//! - Single-threaded; every entity is owned by `GameState` and mutated in
//!   exactly one place per tick
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod player;
pub mod shot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidTier};
pub use collision::circles_overlap;
pub use entity::Kinematic;
pub use player::Player;
pub use shot::Shot;
pub use spawner::AsteroidField;
pub use state::{Drawable, DrawableKind, GamePhase, GameState};
pub use tick::{TickInput, tick};
