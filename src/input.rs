//! Paddle input
//!
//! Key events arrive on whatever thread owns the keyboard; the simulation
//! reads the resulting direction once per paddle per tick. The hand-off is a
//! single atomic byte, so a tick never sees a torn value.

use std::sync::atomic::{AtomicI8, Ordering};

/// Vertical intent of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    None,
    Down,
}

impl Direction {
    /// Signed unit: -1 up, 0 none, +1 down (screen y grows downward)
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Direction::Up => -1.0,
            Direction::None => 0.0,
            Direction::Down => 1.0,
        }
    }

    fn to_raw(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::None => 0,
            Direction::Down => 1,
        }
    }

    fn from_raw(raw: i8) -> Self {
        match raw {
            r if r < 0 => Direction::Up,
            0 => Direction::None,
            _ => Direction::Down,
        }
    }
}

/// Direction written by the input thread, read by the simulation thread
#[derive(Debug, Default)]
pub struct SharedDirection(AtomicI8);

impl SharedDirection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, dir: Direction) {
        self.0.store(dir.to_raw(), Ordering::Relaxed);
    }

    pub fn get(&self) -> Direction {
        Direction::from_raw(self.0.load(Ordering::Relaxed))
    }
}

/// Tracks the Up/Down keys so releasing one of two held keys falls back to
/// the other instead of stopping the paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionKeys {
    up_held: bool,
    down_held: bool,
    current: Direction,
}

impl DirectionKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction (last key pressed wins)
    pub fn direction(&self) -> Direction {
        self.current
    }

    pub fn press(&mut self, dir: Direction) -> Direction {
        match dir {
            Direction::Up => self.up_held = true,
            Direction::Down => self.down_held = true,
            Direction::None => return self.current,
        }
        self.current = dir;
        self.current
    }

    pub fn release(&mut self, dir: Direction) -> Direction {
        match dir {
            Direction::Up => {
                self.up_held = false;
                self.current = if self.down_held {
                    Direction::Down
                } else {
                    Direction::None
                };
            }
            Direction::Down => {
                self.down_held = false;
                self.current = if self.up_held {
                    Direction::Up
                } else {
                    Direction::None
                };
            }
            Direction::None => {}
        }
        self.current
    }
}
