//! Paddle physics
//!
//! A paddle only moves vertically. Holding a direction accelerates it up to
//! a cap, letting go makes it coast to a stop, and hitting the top or bottom
//! wall bounces it back with some speed lost.

use std::sync::Arc;

use glam::DVec2;

use super::ai::AiController;
use super::ball::Ball;
use super::entity::{Bounds, Entity, Side};
use crate::consts::*;
use crate::input::{Direction, SharedDirection};

/// What decides a paddle's direction each tick
#[derive(Debug, Clone)]
pub enum Controller {
    /// Direction is written directly by the owner of the paddle
    Manual,
    /// Direction is read from a shared input cell at the start of every tick
    Human(Arc<SharedDirection>),
    /// Direction is chosen by the nearest-ball heuristic after every tick
    Ai(AiController),
}

impl Controller {
    pub fn is_ai(&self) -> bool {
        matches!(self, Controller::Ai(_))
    }
}

/// A player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    bounds: Bounds,
    /// Intent applied on the next tick
    pub direction: Direction,
    /// Signed speed; negative moves up
    pub vertical_speed: f64,
    score: u32,
    controller: Controller,
}

impl Paddle {
    /// Paddle at its side's edge, vertically centered, at rest
    pub fn new(side: Side, controller: Controller) -> Self {
        let x1 = side.index() as f64 * (GAME_WIDTH - PADDLE_WIDTH);
        let y1 = GAME_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            side,
            bounds: Bounds::new(x1, y1, PADDLE_WIDTH, PADDLE_HEIGHT),
            direction: Direction::None,
            vertical_speed: 0.0,
            score: 0,
            controller,
        }
    }

    pub fn manual(side: Side) -> Self {
        Self::new(side, Controller::Manual)
    }

    pub fn human(side: Side, input: Arc<SharedDirection>) -> Self {
        Self::new(side, Controller::Human(input))
    }

    pub fn ai(side: Side) -> Self {
        Self::new(side, Controller::Ai(AiController::default()))
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credit one point. The only way a score ever changes.
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Move vertically to `y1`, keeping the paddle's fixed x position.
    /// The position is clamped into the court.
    pub fn place(&mut self, y1: f64) {
        self.bounds.set_y1(y1);
        self.bounds.clamp_vertical(GAME_HEIGHT);
    }

    /// Advance one tick.
    ///
    /// A human paddle samples its input cell first; an AI paddle moves with
    /// the direction it chose last tick and then picks the next one.
    pub fn tick(&mut self, balls: &[Ball]) {
        if let Controller::Human(input) = &self.controller {
            self.direction = input.get();
        }

        self.integrate();

        if let Controller::Ai(ai) = &mut self.controller {
            self.direction = ai.steer(&self.bounds, balls);
        }
    }

    /// Speed then position for the current direction
    fn integrate(&mut self) {
        self.vertical_speed += PADDLE_ACCELERATION * self.direction.signum();
        self.vertical_speed = self
            .vertical_speed
            .clamp(-PADDLE_MAX_SPEED, PADDLE_MAX_SPEED);

        if self.direction == Direction::None {
            self.vertical_speed *= PADDLE_DECELERATION;
            if self.vertical_speed.abs() < PADDLE_MIN_SPEED {
                self.vertical_speed = 0.0;
            }
        }

        self.bounds.translate(DVec2::new(0.0, self.vertical_speed));

        if self.bounds.clamp_vertical(GAME_HEIGHT) {
            self.vertical_speed = -self.vertical_speed * PADDLE_BOUNCE_DAMPING;
        }
    }
}

impl Entity for Paddle {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
