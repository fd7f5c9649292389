//! Fixed timestep simulation tick
//!
//! Advances the whole court by one step. Paddles move before balls so a
//! ball that meets a paddle this tick picks up slice from the paddle's
//! settled speed.

use super::ball::BallEvent;
use super::entity::BallHandle;
use super::state::{GameState, Goal};

/// Advance the game state by one tick, returning the points scored
pub fn tick(state: &mut GameState) -> Vec<Goal> {
    state.time_ticks += 1;

    let GameState { paddles, balls, .. } = state;

    for paddle in paddles.iter_mut() {
        paddle.tick(balls.as_slice());
    }

    let mut goals = Vec::new();
    for (i, ball) in balls.iter_mut().enumerate() {
        if let BallEvent::Scored(side) = ball.tick(paddles) {
            goals.push(Goal {
                side,
                ball: BallHandle(i),
            });
        }
    }

    // Replace after the sweep so every ball ticks exactly once
    for goal in &goals {
        state.point_scored(goal.side, goal.ball);
    }

    goals
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::consts::*;
    use crate::input::Direction;
    use crate::sim::entity::{Entity, Side};
    use crate::sim::paddle::Controller;
    use glam::DVec2;

    fn manual_state(balls: usize) -> GameState {
        GameState::new(
            NonZeroUsize::new(balls).unwrap(),
            Controller::Manual,
            Controller::Manual,
            2024,
        )
    }

    #[test]
    fn test_tick_counts() {
        let mut state = manual_state(1);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_scoring_replaces_ball() {
        let mut state = manual_state(2);
        {
            let ball = state.ball_mut(BallHandle(1)).unwrap();
            ball.angle_degrees = 180.0;
            ball.speed = 5.5;
            ball.place(0.0, 250.0);
        }

        let goals = tick(&mut state);

        assert_eq!(
            goals,
            vec![Goal {
                side: Side::Right,
                ball: BallHandle(1)
            }]
        );
        assert_eq!(state.scores(), (0, 1));
        assert_eq!(state.entity_count(), 4);
        let replaced = state.ball(BallHandle(1)).unwrap();
        assert_eq!(replaced.bounds().center(), DVec2::new(540.0, 260.0));
        assert_eq!(replaced.speed, BALL_INITIAL_SPEED);
    }

    #[test]
    fn test_paddles_move_before_balls() {
        let mut state = manual_state(1);
        {
            let paddle = state.paddle_mut(Side::Left);
            paddle.vertical_speed = 3.25;
            paddle.direction = Direction::Down;
        }
        {
            let ball = state.ball_mut(BallHandle(0)).unwrap();
            ball.angle_degrees = 180.0;
            ball.speed = 10.0;
            ball.place(PADDLE_WIDTH + 2.0, 250.0);
        }

        tick(&mut state);

        // Paddle accelerated to 4.0 before the ball read its speed
        assert_eq!(state.paddle(Side::Left).vertical_speed, 4.0);
        let ball = state.ball(BallHandle(0)).unwrap();
        assert!((ball.angle_degrees - (0.0 + SLICE_MULTIPLIER * 4.0)).abs() < 1e-9);
        assert_eq!(ball.bounds().x1(), PADDLE_WIDTH);
    }

    #[test]
    fn test_ai_vs_ai_is_deterministic() {
        let run = || {
            let mut state = GameState::new(
                NonZeroUsize::new(3).unwrap(),
                Controller::Ai(Default::default()),
                Controller::Ai(Default::default()),
                99999,
            );
            for _ in 0..2000 {
                tick(&mut state);
            }
            state
        };

        let a = run();
        let b = run();
        assert_eq!(a.scores(), b.scores());
        assert_eq!(a.balls(), b.balls());
        assert_eq!(
            a.paddle(Side::Left).bounds(),
            b.paddle(Side::Left).bounds()
        );
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut state = GameState::new(
            NonZeroUsize::new(5).unwrap(),
            Controller::Ai(Default::default()),
            Controller::Manual,
            7,
        );
        state.paddle_mut(Side::Right).direction = Direction::Up;

        for _ in 0..5000 {
            tick(&mut state);
            assert_eq!(state.entity_count(), 7);
            for ball in state.balls() {
                assert!(ball.bounds().y1() >= 0.0);
                assert!(ball.bounds().y2() <= GAME_HEIGHT);
                assert!(ball.speed <= BALL_MAX_SPEED);
            }
            for paddle in state.paddles() {
                assert!(paddle.bounds().y1() >= 0.0);
                assert!(paddle.bounds().y2() <= GAME_HEIGHT);
            }
        }
        let (left, right) = state.scores();
        assert!(left + right > 0);
    }
}
