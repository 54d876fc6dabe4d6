//! Hop Runner entry point
//!
//! Runs the game headless in idle mode: the autopilot plays and the run is
//! reported through the log. Set `RUST_LOG=debug` to see every spawn and
//! speed-up.
//!
//! Usage: `hop-runner [CONFIG.json] [--frames N] [--seed S]`

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use hop_runner::GameConfig;
use hop_runner::audio::LogAudio;
use hop_runner::game::Game;
use hop_runner::platform::{Display, HeadlessDisplay, ScriptedInput, SystemClock};
use hop_runner::renderer::SummaryRenderer;
use hop_runner::sim::GameState;

/// Frames played when no limit is given (one minute at 60 fps)
const DEFAULT_FRAMES: u64 = 3600;

struct Args {
    config: Option<String>,
    frames: u64,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        config: None,
        frames: DEFAULT_FRAMES,
        seed: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value.parse()?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse()?);
            }
            path if args.config.is_none() => args.config = Some(path.to_string()),
            other => return Err(format!("unexpected argument '{}'", other).into()),
        }
    }
    Ok(args)
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let display = HeadlessDisplay::new(config.display.width, config.display.height);
    let viewport = display.viewport();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };
    log::info!(
        "Hop Runner starting: {}x{} window, seed {}",
        viewport.width,
        viewport.height,
        seed
    );

    let state = GameState::new(config, viewport, seed)?;
    let mut game = Game::new(state, SystemClock::new(), LogAudio, SummaryRenderer::new());
    game.set_idle_mode(true);

    let frames = game.run(&mut ScriptedInput::default(), Some(args.frames));

    log::info!(
        "Finished after {} frames: score {}, high score {}",
        frames,
        game.state.score as u64,
        game.state.high_score as u64
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
