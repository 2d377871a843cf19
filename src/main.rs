use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grid_snake::clock::TickClock;
use grid_snake::config::{BOARD, TICKS_PER_SECOND};
use grid_snake::error::AppError;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{self, GameInput};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for apple placement and reset headings; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file. Nothing is logged without it.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(cli.log_level.into(), Config::default(), File::create(path)?)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting on a {}x{} board with seed {seed}", BOARD.width, BOARD.height);

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let mut state = GameState::new_with_seed(BOARD, seed);
    run(&mut session, &mut state)?;

    info!(
        "quit after {} ticks at length {}",
        state.tick_count,
        state.snake.len()
    );
    Ok(())
}

fn run(session: &mut TerminalSession, state: &mut GameState) -> Result<(), AppError> {
    let terminal = session.terminal_mut();
    let mut clock = TickClock::new(TICKS_PER_SECOND);

    terminal.draw(|frame| renderer::render(frame, state))?;

    loop {
        clock.wait_for_tick();

        for game_input in input::drain_events()? {
            if game_input == GameInput::Quit {
                return Ok(());
            }
            state.apply_input(game_input);
        }

        if state.tick() == GameStatus::Collided {
            info!("board cleared after collision on tick {}", state.tick_count);
        }

        terminal.draw(|frame| renderer::render(frame, state))?;
    }
}
