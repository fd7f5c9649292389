//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (paddles, then balls by slot)
//! - No rendering or platform dependencies beyond the viewport value

pub mod ai;
pub mod ball;
pub mod collision;
pub mod entity;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ai::{AiController, nearest_ball, track};
pub use ball::{Ball, BallEvent, serve_angle};
pub use collision::{goal_line_crossing, paddle_contact, wall_contact};
pub use entity::{BallHandle, Bounds, Entity, EntityView, Side};
pub use paddle::{Controller, Paddle};
pub use state::{GameState, Goal};
pub use tick::tick;
