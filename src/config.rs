//! Command line and validated startup configuration.

use clap::Parser;
use thiserror::Error;

/// Smallest line the simulation accepts.
pub const MIN_SCREEN_SIZE: i32 = 2;
/// Largest line the simulation accepts.
pub const MAX_SCREEN_SIZE: i32 = 4096;
/// Below this width the game is technically runnable but cramped.
pub const PLAYABLE_SCREEN_SIZE: i32 = 50;
/// Columns reserved for the status suffix when sizing from the terminal.
pub const STATUS_COLUMNS: i32 = 30;
/// Terminal width assumed when the real one cannot be queried.
pub const FALLBACK_TERMINAL_WIDTH: i32 = 80;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line size {0} is too small (minimum is {})", MIN_SCREEN_SIZE)]
    ScreenTooSmall(i32),
    #[error("line size {0} is too large (maximum is {})", MAX_SCREEN_SIZE)]
    ScreenTooLarge(i32),
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Xonitix is a one-line game where you gain points by limiting the space of moving dots.",
    long_about = "Xonitix is a one-line game where you gain points by limiting the space of moving dots.\n\n\
                  Press the left/right arrow keys to move, down arrow to stop, and spacebar to block, \
                  'q' to quit.\nFill 50% of the line to level up!"
)]
pub struct Args {
    /// Line size (defaults to the terminal width minus 30)
    #[arg(short = 'l', long = "line", value_name = "SIZE")]
    pub line: Option<i32>,

    /// Quiet mode (don't show header)
    #[arg(short, long)]
    pub quiet: bool,

    /// Stealth/boss mode ('q' removes game from terminal)
    #[arg(short, long)]
    pub stealth: bool,

    /// Seed for a reproducible run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Startup configuration. Only constructible with a valid line size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    screen_size: i32,
    pub stealth: bool,
    pub quiet: bool,
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(screen_size: i32, stealth: bool, quiet: bool) -> Result<Self, ConfigError> {
        if screen_size < MIN_SCREEN_SIZE {
            return Err(ConfigError::ScreenTooSmall(screen_size));
        }
        if screen_size > MAX_SCREEN_SIZE {
            return Err(ConfigError::ScreenTooLarge(screen_size));
        }
        Ok(Self {
            screen_size,
            stealth,
            quiet,
            seed: None,
        })
    }

    /// Build from parsed arguments; `terminal_width` is only consulted when
    /// no explicit line size was given.
    pub fn from_args(args: &Args, terminal_width: Option<u16>) -> Result<Self, ConfigError> {
        let screen_size = args.line.unwrap_or_else(|| default_screen_size(terminal_width));
        let mut config = Self::new(screen_size, args.stealth, args.quiet)?;
        config.seed = args.seed;
        Ok(config)
    }

    pub fn screen_size(&self) -> i32 {
        self.screen_size
    }

    /// True when the line is narrower than is comfortable to play on.
    pub fn is_cramped(&self) -> bool {
        self.screen_size < PLAYABLE_SCREEN_SIZE
    }
}

pub fn default_screen_size(terminal_width: Option<u16>) -> i32 {
    let width = terminal_width
        .map(i32::from)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH);
    width - STATUS_COLUMNS
}
