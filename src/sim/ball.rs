//! Ball motion and bounce response

use glam::DVec2;
use rand::Rng;

use super::collision::{goal_line_crossing, paddle_contact, wall_contact};
use super::entity::{Bounds, Entity, Side};
use super::paddle::Paddle;
use crate::consts::*;

/// What happened to a ball during its tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Still in play
    Moved,
    /// Crossed a goal line; the named side earns the point
    Scored(Side),
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    bounds: Bounds,
    /// Heading in degrees; 0 is right, 90 is down. Any real value.
    pub angle_degrees: f64,
    /// Units per tick, kept within `[0, BALL_MAX_SPEED]`
    pub speed: f64,
}

impl Ball {
    /// Fresh ball at the center of the court heading toward a random paddle
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_motion(serve_angle(rng), BALL_INITIAL_SPEED)
    }

    /// Ball at the center of the court with a given heading and speed
    pub fn with_motion(angle_degrees: f64, speed: f64) -> Self {
        let center = DVec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0);
        Self {
            bounds: Bounds::centered(center, BALL_WIDTH, BALL_HEIGHT),
            angle_degrees,
            speed: speed.clamp(0.0, BALL_MAX_SPEED),
        }
    }

    /// Move the top-left corner
    pub fn place(&mut self, x1: f64, y1: f64) {
        self.bounds.set_pos(x1, y1);
    }

    /// Per-tick displacement for the current heading and speed
    pub fn velocity(&self) -> DVec2 {
        let rad = self.angle_degrees.to_radians();
        DVec2::new(rad.cos(), rad.sin()) * self.speed
    }

    /// Advance one tick and resolve collisions.
    ///
    /// A ball that crossed a goal line is still clamped between the walls,
    /// but skips the paddle test since it is about to be replaced.
    pub fn tick(&mut self, paddles: &[Paddle; 2]) -> BallEvent {
        self.bounds.translate(self.velocity());

        let goal = goal_line_crossing(&mut self.bounds, GAME_WIDTH);

        if wall_contact(&mut self.bounds, GAME_HEIGHT) {
            self.bounce_off_wall();
        }

        if let Some(side) = goal {
            return BallEvent::Scored(side);
        }

        if let Some(side) = paddle_contact(&self.bounds, paddles) {
            let paddle = &paddles[side.index()];
            let x1 = match side {
                Side::Left => paddle.bounds().x2(),
                Side::Right => paddle.bounds().x1() - BALL_WIDTH - 1.0,
            };
            self.bounds.set_x1(x1);
            self.bounce_off_paddle(paddle.vertical_speed);
        }

        BallEvent::Moved
    }

    /// Mirror the heading across the horizontal axis and speed up
    pub fn bounce_off_wall(&mut self) {
        self.angle_degrees = -self.angle_degrees;
        self.accelerate();
    }

    /// Mirror the heading across the vertical axis, add slice from the
    /// paddle's motion, and speed up
    pub fn bounce_off_paddle(&mut self, paddle_speed: f64) {
        self.angle_degrees = 180.0 - self.angle_degrees;
        self.angle_degrees += SLICE_MULTIPLIER * paddle_speed;
        self.accelerate();
    }

    fn accelerate(&mut self) {
        if self.speed < BALL_MAX_SPEED {
            self.speed = (self.speed * BALL_BOUNCE_BOOST).min(BALL_MAX_SPEED);
        }
    }
}

impl Entity for Ball {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

/// Random serve heading that always points at one of the paddles.
///
/// Draws from `[-45, 135)` and moves the `(45, 135)` band round to
/// `(135, 225)`, so the ball leaves within 45 degrees of horizontal.
pub fn serve_angle<R: Rng>(rng: &mut R) -> f64 {
    let angle = rng.random_range(-45.0..135.0);
    if angle > 45.0 { angle + 90.0 } else { angle }
}
