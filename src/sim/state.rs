//! Game state and scoring
//!
//! The state owns both paddles and an arena of balls. Balls live in stable
//! slots: scoring overwrites a slot with a fresh ball, so handles stay valid
//! and the draw order never changes.

use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::entity::{BallHandle, EntityView, Side};
use super::paddle::{Controller, Paddle};
use crate::consts::*;
use crate::renderer::Viewport;

/// A point scored during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    /// Side credited with the point
    pub side: Side,
    /// Slot of the ball that crossed the line (now holding its replacement)
    pub ball: BallHandle,
}

/// Complete in-play simulation
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    /// Left then right
    pub(super) paddles: [Paddle; 2],
    /// Ball arena (slot order is draw and tick order)
    pub(super) balls: Vec<Ball>,
    /// Screen mapping, replaced whole on every resize
    viewport: Viewport,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a match with `ball_count` balls served from the center
    pub fn new(ball_count: NonZeroUsize, left: Controller, right: Controller, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..ball_count.get()).map(|_| Ball::new(&mut rng)).collect();

        log::info!(
            "New match: {} ball(s), seed {}, left {}, right {}",
            ball_count,
            seed,
            if left.is_ai() { "AI" } else { "player" },
            if right.is_ai() { "AI" } else { "player" },
        );

        Self {
            seed,
            rng,
            paddles: [Paddle::new(Side::Left, left), Paddle::new(Side::Right, right)],
            balls,
            viewport: Viewport::fit(SCREEN_WIDTH, SCREEN_HEIGHT),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, handle: BallHandle) -> Option<&Ball> {
        self.balls.get(handle.index())
    }

    pub fn ball_mut(&mut self, handle: BallHandle) -> Option<&mut Ball> {
        self.balls.get_mut(handle.index())
    }

    /// `(left, right)` scores
    pub fn scores(&self) -> (u32, u32) {
        (self.paddles[0].score(), self.paddles[1].score())
    }

    /// Number of entities on the court (two paddles plus every ball)
    pub fn entity_count(&self) -> usize {
        self.paddles.len() + self.balls.len()
    }

    /// All entities in draw order: paddles first, then balls by slot
    pub fn entities(&self) -> impl Iterator<Item = EntityView<'_>> {
        self.paddles
            .iter()
            .map(EntityView::Paddle)
            .chain(self.balls.iter().map(EntityView::Ball))
    }

    /// Credit `side` with a point and serve a new ball in the scoring slot.
    ///
    /// # Panics
    ///
    /// Panics if `ball` does not name a slot of this state.
    pub fn point_scored(&mut self, side: Side, ball: BallHandle) {
        assert!(
            ball.index() < self.balls.len(),
            "ball handle {} out of range ({} balls)",
            ball.index(),
            self.balls.len()
        );

        self.paddles[side.index()].add_point();
        self.balls[ball.index()] = Ball::new(&mut self.rng);

        let (left, right) = self.scores();
        log::debug!("{side:?} scores with ball {}: {left} - {right}", ball.index());
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Recompute the game-to-screen mapping for a new drawing surface size
    pub fn size_changed(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::fit(width, height);
        log::debug!(
            "Viewport resized to {}x{} ({:.3} x {:.3} units/px)",
            width,
            height,
            self.viewport.units_per_pixel_x,
            self.viewport.units_per_pixel_y
        );
    }
}
