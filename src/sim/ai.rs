//! Computer opponent
//!
//! Reactive, not predictive: after each tick the paddle looks at the ball
//! nearest to its center and steers toward it on the following tick.

use glam::DVec2;

use super::ball::Ball;
use super::entity::{BallHandle, Bounds, Entity};
use crate::input::Direction;

/// Nearest-ball steering strategy attached to a paddle
#[derive(Debug, Clone, Default)]
pub struct AiController {
    target: Option<BallHandle>,
}

impl AiController {
    /// Ball chosen on the most recent decision
    pub fn target(&self) -> Option<BallHandle> {
        self.target
    }

    /// Pick the direction for the next tick.
    ///
    /// # Panics
    ///
    /// Panics if `balls` is empty. A running simulation always holds at
    /// least one ball, so an empty slice means the paddle was wired to the
    /// wrong collection.
    pub fn steer(&mut self, paddle: &Bounds, balls: &[Ball]) -> Direction {
        let handle = nearest_ball(paddle.center(), balls)
            .expect("AI paddle has no ball to track (ball count must be at least 1)");

        if self.target != Some(handle) {
            log::trace!("AI retargets to ball {}", handle.index());
            self.target = Some(handle);
        }

        track(paddle, balls[handle.index()].bounds())
    }
}

/// Ball whose center is closest to `from`. Earlier slots win ties.
pub fn nearest_ball(from: DVec2, balls: &[Ball]) -> Option<BallHandle> {
    let mut best: Option<(BallHandle, f64)> = None;

    for (i, ball) in balls.iter().enumerate() {
        let dist = from.distance_squared(ball.bounds().center());
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((BallHandle(i), dist)),
        }
    }

    best.map(|(handle, _)| handle)
}

/// Move toward the ball unless it already lies within the paddle's span
pub fn track(paddle: &Bounds, ball: &Bounds) -> Direction {
    if ball.y1() < paddle.y1() {
        Direction::Up
    } else if ball.y2() > paddle.y2() {
        Direction::Down
    } else {
        Direction::None
    }
}
