//! Command-line configuration and logging setup for the binary.

use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "klondike-rs")]
#[command(about = "Klondike solitaire in the terminal", version)]
pub struct Config {
    /// Seed for a reproducible deal
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-oriented shell even on a terminal
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file (the TUI owns the terminal, so it only logs here)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "klondike_rs=trace" (falls back to RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Where log output should go, given how the game is being played.
#[derive(Debug, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

impl Config {
    pub fn new_game(&self) -> crate::game::Game {
        match self.seed {
            Some(seed) => crate::game::Game::with_seed(seed),
            None => crate::game::Game::new(),
        }
    }

    pub fn log_target(&self, tui: bool) -> LogTarget {
        match (&self.log_file, tui) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Off,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.log_level
            .as_deref()
            .map(EnvFilter::new)
            .or_else(|| std::env::var("RUST_LOG").ok().map(EnvFilter::new))
            .unwrap_or_else(|| EnvFilter::new("warn"))
    }

    /// Install the global subscriber. Does nothing if one is already installed.
    pub fn init_logging(&self, tui: bool) -> io::Result<()> {
        let filter = self.env_filter();
        match self.log_target(tui) {
            LogTarget::File(path) => {
                let file = File::create(path)?;
                fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
                    .ok();
            }
            LogTarget::Stderr => {
                fmt().with_env_filter(filter).with_writer(io::stderr).try_init().ok();
            }
            LogTarget::Off => {}
        }
        Ok(())
    }
}
