//! Pong entry point
//!
//! Runs the app headless: loading, the ball-count menu, then a match driven by
//! the fixed-rate game loop for a set number of ticks.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use thiserror::Error;

use pong_sim::renderer::AsciiCanvas;
use pong_sim::{
    App, AppCommand, ControllerKind, GameLoop, Key, LoopConfig, LoopError, Settings,
    SettingsError,
};

/// Snapshot grid size: 10 px per column, 20 px per row at the default screen size
const SNAPSHOT_COLS: usize = 128;
const SNAPSHOT_ROWS: usize = 36;

#[derive(Debug, Parser)]
#[command(name = "pong-sim", version, about = "Headless two-paddle Pong simulation")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of balls in play
    #[arg(long)]
    balls: Option<NonZeroUsize>,

    /// Ticks to simulate before stopping
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,

    /// RNG seed (time-based when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation rate in ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// Left paddle controller
    #[arg(long, value_enum)]
    left: Option<ControllerKind>,

    /// Right paddle controller
    #[arg(long, value_enum)]
    right: Option<ControllerKind>,

    /// Write the effective settings to this file
    #[arg(long)]
    write_settings: Option<PathBuf>,

    /// Print an ASCII snapshot of the final frame
    #[arg(long)]
    snapshot: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Loop(#[from] LoopError),
    #[error("quit before the match started")]
    Quit,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("pong-sim: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), RunError> {
    let settings = effective_settings(&args)?;
    if let Some(path) = &args.write_settings {
        settings.save(path)?;
    }

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!(
        "Pong starting: {} ball(s), {} vs {}, {} ticks/s, seed {seed}",
        settings.ball_count,
        settings.left_controller.as_str(),
        settings.right_controller.as_str(),
        settings.target_tps,
    );

    let config = LoopConfig {
        target_tps: settings.target_tps,
        max_ticks: Some(args.ticks),
    };
    let (width, height) = (settings.screen_width, settings.screen_height);
    let ball_count = settings.ball_count;

    let mut app = App::new(settings, seed);
    app.size_changed(width, height);
    app.finish_loading();
    enter_ball_count(&mut app, ball_count)?;

    let app = GameLoop::spawn(config, app)?.join()?;

    if let Some(game) = app.game() {
        let (left, right) = game.scores();
        log::info!("Final score after {} ticks: {left} - {right}", game.time_ticks);
        println!("{left} - {right}");
    }

    if args.snapshot {
        let mut canvas = AsciiCanvas::new(width, height, SNAPSHOT_COLS, SNAPSHOT_ROWS);
        app.draw(&mut canvas);
        println!("{}", canvas.render());
    }

    Ok(())
}

/// Settings file (or defaults) with command line overrides applied.
///
/// Without a settings file both paddles are AI, since nothing feeds a human
/// paddle when running headless.
fn effective_settings(args: &Args) -> Result<Settings, RunError> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load_or_default(path),
        None => Settings {
            left_controller: ControllerKind::Ai,
            right_controller: ControllerKind::Ai,
            ..Default::default()
        },
    };

    if let Some(balls) = args.balls {
        settings.ball_count = balls;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(tps) = args.tps {
        settings.target_tps = tps;
    }
    if let Some(kind) = args.left {
        settings.left_controller = kind;
    }
    if let Some(kind) = args.right {
        settings.right_controller = kind;
    }

    settings.validate()?;
    Ok(settings)
}

/// Type the ball count into the menu the way a player would. The menu takes a
/// single digit, so larger counts start the match directly.
fn enter_ball_count(app: &mut App, balls: NonZeroUsize) -> Result<(), RunError> {
    if balls.get() > 9 {
        app.start_game(balls);
        return Ok(());
    }

    for c in format!("{balls}\n").chars() {
        if app.type_key(Key::from_char(c)) == AppCommand::Quit {
            return Err(RunError::Quit);
        }
    }
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(seed_from_clock)
        .unwrap_or_default()
}

/// Low 64 bits of the nanosecond clock; the high bits only change every
/// ~584 years and add nothing to a seed.
fn seed_from_clock(since_epoch: Duration) -> u64 {
    (since_epoch.as_nanos() & u128::from(u64::MAX)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_keeps_low_clock_bits() {
        let d = Duration::new(1_700_000_000, 123_456_789);
        assert_eq!(seed_from_clock(d), 1_700_000_000_123_456_789);

        let wrapped = Duration::from_nanos(u64::MAX) + Duration::from_nanos(6);
        assert_eq!(seed_from_clock(wrapped), 5);
    }

    #[test]
    fn test_headless_defaults_to_ai_paddles() {
        let args = Args::parse_from(["pong-sim", "--balls", "3", "--right", "human"]);
        let settings = effective_settings(&args).unwrap();
        assert_eq!(settings.ball_count.get(), 3);
        assert_eq!(settings.left_controller, ControllerKind::Ai);
        assert_eq!(settings.right_controller, ControllerKind::Human);
    }
}
