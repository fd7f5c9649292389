//! Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, balls, collisions, scoring, AI)
//! - `input`: Held-key tracking and the shared paddle direction
//! - `renderer`: Viewport mapping and the drawing surface abstraction
//! - `app`: Loading → Menu → Playing flow
//! - `game_loop`: Fixed-rate driver thread with pause/resume/stop
//! - `settings`: Operator configuration

pub mod app;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppCommand, Key, Scene};
pub use game_loop::{GameLoop, LoopConfig, LoopError, LoopHandle, Tickable};
pub use input::{Direction, DirectionKeys, SharedDirection};
pub use settings::{ControllerKind, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TARGET_TPS: u32 = 60;

    /// Logical court dimensions (game-space units, independent of window size)
    pub const GAME_WIDTH: f64 = 1080.0;
    pub const GAME_HEIGHT: f64 = 520.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 32.0;
    pub const PADDLE_HEIGHT: f64 = 128.0;
    pub const PADDLE_ACCELERATION: f64 = 0.75;
    /// Per-tick speed multiplier while no direction is held
    pub const PADDLE_DECELERATION: f64 = 0.95;
    /// Speed kept (and reversed) when a paddle hits the top or bottom wall
    pub const PADDLE_BOUNCE_DAMPING: f64 = 0.9;
    /// Below this a coasting paddle snaps to rest
    pub const PADDLE_MIN_SPEED: f64 = 0.001;
    pub const PADDLE_MAX_SPEED: f64 = 7.5;
    /// Degrees of slice added to the ball per unit of paddle speed
    pub const SLICE_MULTIPLIER: f64 = 3.0;

    /// Ball defaults
    pub const BALL_WIDTH: f64 = 32.0;
    pub const BALL_HEIGHT: f64 = 32.0;
    pub const BALL_INITIAL_SPEED: f64 = 5.5;
    pub const BALL_MAX_SPEED: f64 = 20.0;
    /// Speed boost on every wall or paddle bounce (multiplicative)
    pub const BALL_BOUNCE_BOOST: f64 = 1.1;

    /// Screen layout around the court (pixels)
    pub const BORDER_TOP: i32 = 150;
    pub const BORDER_BOTTOM: i32 = 50;
    pub const BORDER_LEFT: i32 = 100;
    pub const BORDER_RIGHT: i32 = 100;
    pub const SCORE_Y: i32 = 50;
    pub const SCORE_SIZE: i32 = 12;

    /// Default window size
    pub const SCREEN_WIDTH: u32 = 1280;
    pub const SCREEN_HEIGHT: u32 = 720;
}
