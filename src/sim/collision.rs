//! Collision tests for axis-aligned court geometry
//!
//! The ball resolves its collisions in a fixed order: goal lines, then the
//! top and bottom walls, then the paddles. Clamping one axis can change the
//! outcome of the next test, so callers must keep that order.

use super::entity::{Bounds, Entity, Side};
use super::paddle::Paddle;

/// Clamp a ball that crossed a goal line back onto the court.
///
/// Returns the side credited with the point: crossing the left line scores
/// for the right paddle and vice versa.
pub fn goal_line_crossing(ball: &mut Bounds, court_width: f64) -> Option<Side> {
    if ball.x1() < 0.0 {
        ball.set_x1(0.0);
        Some(Side::Right)
    } else if ball.x2() > court_width {
        ball.set_x1(court_width - ball.width());
        Some(Side::Left)
    } else {
        None
    }
}

/// Clamp a ball that crossed the top or bottom wall.
///
/// Returns `true` when the ball must bounce.
#[inline]
pub fn wall_contact(ball: &mut Bounds, court_height: f64) -> bool {
    ball.clamp_vertical(court_height)
}

/// Which paddle, if any, the ball is touching.
///
/// Only the paddle on the side the ball has reached is tested: the left one
/// while the ball's left edge is inside the left paddle's column, otherwise
/// the right one while the ball's right edge is inside the right paddle's
/// column. This assumes the ball cannot travel far enough in one tick to
/// skip a paddle column, which holds for the current speed cap.
pub fn paddle_contact(ball: &Bounds, paddles: &[Paddle; 2]) -> Option<Side> {
    let [left, right] = paddles;

    if ball.x1() < left.bounds().x2() {
        left.bounds()
            .overlaps_vertically(ball)
            .then_some(Side::Left)
    } else if ball.x2() > right.bounds().x1() {
        right
            .bounds()
            .overlaps_vertically(ball)
            .then_some(Side::Right)
    } else {
        None
    }
}
