//! End-to-end scenarios through the public API

use std::num::NonZeroUsize;

use glam::DVec2;
use pong_sim::consts::*;
use pong_sim::renderer::AsciiCanvas;
use pong_sim::sim::{BallHandle, Controller, Entity, GameState, Goal, Side, tick};
use pong_sim::{
    App, ControllerKind, Direction, GameLoop, Key, LoopConfig, Scene, Settings, Tickable,
};

fn balls(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn manual_state(n: usize) -> GameState {
    GameState::new(balls(n), Controller::Manual, Controller::Manual, 11)
}

fn ai_settings() -> Settings {
    Settings {
        left_controller: ControllerKind::Ai,
        right_controller: ControllerKind::Ai,
        ..Default::default()
    }
}

#[test]
fn ball_crossing_left_line_scores_for_right() {
    let mut state = manual_state(3);
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
    assert_eq!(state.balls().len(), 3);
    let served = state.ball(BallHandle(1)).unwrap();
    assert_eq!(served.bounds().center(), DVec2::new(540.0, 260.0));
    assert_eq!(served.speed, BALL_INITIAL_SPEED);
}

#[test]
fn ball_crossing_right_line_scores_for_left() {
    let mut state = manual_state(1);
    {
        // Above the right paddle so nothing deflects it
        let ball = state.ball_mut(BallHandle(0)).unwrap();
        ball.angle_degrees = 0.0;
        ball.speed = 5.5;
        ball.place(1050.0, 50.0);
    }

    let goals = tick(&mut state);

    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].side, Side::Left);
    assert_eq!(state.scores(), (1, 0));
}

#[test]
fn right_paddle_returns_ball() {
    let mut state = manual_state(1);
    {
        let ball = state.ball_mut(BallHandle(0)).unwrap();
        ball.angle_degrees = 0.0;
        ball.speed = 5.5;
        ball.place(1019.0, 240.0);
    }

    assert!(tick(&mut state).is_empty());

    let ball = state.ball(BallHandle(0)).unwrap();
    let paddle_x1 = state.paddle(Side::Right).bounds().x1();
    assert_eq!(ball.bounds().x1(), paddle_x1 - BALL_WIDTH - 1.0);
    assert_eq!(ball.angle_degrees, 180.0);
    assert!((ball.speed - 5.5 * BALL_BOUNCE_BOOST).abs() < 1e-9);
}

#[test]
fn moving_paddle_slices_the_ball() {
    let mut state = manual_state(1);
    {
        let paddle = state.paddle_mut(Side::Left);
        paddle.vertical_speed = 4.0;
        paddle.direction = Direction::None;
    }
    {
        let ball = state.ball_mut(BallHandle(0)).unwrap();
        ball.angle_degrees = 10.0 + 180.0;
        ball.speed = 5.0;
        ball.place(PADDLE_WIDTH + 1.0, 240.0);
    }

    tick(&mut state);

    // The paddle coasts to 3.8 before the ball meets it
    let ball = state.ball(BallHandle(0)).unwrap();
    let expected = 180.0 - 190.0 + SLICE_MULTIPLIER * 4.0 * PADDLE_DECELERATION;
    assert!((ball.angle_degrees - expected).abs() < 1e-9);
    assert_eq!(ball.bounds().x1(), PADDLE_WIDTH);
}

#[test]
fn paddle_bounces_off_top_wall() {
    let mut state = manual_state(1);
    state.paddle_mut(Side::Left).direction = Direction::Up;

    let mut ticks = 0;
    while state.paddle(Side::Left).vertical_speed <= 0.0 {
        tick(&mut state);
        ticks += 1;
        assert!(ticks < 100, "paddle never reached the wall");
    }

    let paddle = state.paddle(Side::Left);
    assert_eq!(ticks, 31);
    assert_eq!(paddle.bounds().y1(), 0.0);
    assert!((paddle.vertical_speed - PADDLE_MAX_SPEED * PADDLE_BOUNCE_DAMPING).abs() < 1e-9);
}

#[test]
fn seeded_ai_matches_are_reproducible() {
    let run = || {
        let mut state = GameState::new(
            balls(4),
            Controller::Ai(Default::default()),
            Controller::Ai(Default::default()),
            1234,
        );
        let mut goals = Vec::new();
        for _ in 0..3000 {
            goals.extend(tick(&mut state));
        }
        (state, goals)
    };

    let (a, goals_a) = run();
    let (b, goals_b) = run();
    assert_eq!(goals_a, goals_b);
    assert_eq!(a.scores(), b.scores());
    assert_eq!(a.balls(), b.balls());
    assert_eq!(a.balls().len(), 4);
    assert_eq!(a.entity_count(), 6);
}

#[test]
fn app_plays_a_headless_match() {
    let mut app = App::new(ai_settings(), 42);
    app.finish_loading();
    for c in "3\n".chars() {
        app.type_key(Key::from_char(c));
    }
    assert!(matches!(app.scene(), Scene::Playing(_)));

    let config = LoopConfig {
        target_tps: 2000,
        max_ticks: Some(120),
    };
    let app = GameLoop::spawn(config, app).unwrap().join().unwrap();

    let game = app.game().unwrap();
    assert_eq!(game.time_ticks, 120);
    assert_eq!(game.balls().len(), 3);
    assert_eq!(game.seed, 42);
}

#[test]
fn app_snapshot_shows_court() {
    let mut app = App::new(ai_settings(), 3);
    app.finish_loading();
    app.start_game(balls(1));
    app.tick();

    let mut canvas = AsciiCanvas::new(1280, 720, 128, 36);
    app.draw(&mut canvas);

    // Court is 100..1180 x 150..670 px
    assert_eq!(canvas.get(10, 7), Some('+'));
    assert_eq!(canvas.get(117, 33), Some('+'));
    // Left score "0" at (100, 50)
    assert_eq!(canvas.get(10, 2), Some('0'));
    assert!(canvas.render().contains('#'));
}
