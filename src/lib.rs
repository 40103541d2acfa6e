//! klondike-rs: a Klondike solitaire engine
//!
//! Goals:
//! - The rules live in one engine (`game::Game`) that front ends drive through `engine::GameEngine`
//! - Illegal moves are ordinary results, never panics
//! - Deterministic deals from a seed for tests and replays
//!
//! ## Quick start: play a few moves
//! ```
//! use klondike_rs::game::{Game, PileRef, StockFlip};
//!
//! let mut game = Game::with_seed(42);
//! assert_eq!(game.layout().stock().len(), 24);
//!
//! assert_eq!(game.flip_stock(), StockFlip::Drawn);
//! assert_eq!(game.layout().talon().len(), 1);
//!
//! // the foundations start empty, so only an ace can go there
//! let ace = game.layout().talon().top().unwrap().rank() == klondike_rs::cards::Rank::Ace;
//! assert_eq!(game.move_cards(PileRef::Talon, PileRef::Foundation), ace);
//! game.check_tableau();
//! assert!(!game.victory());
//! ```
//!
//! ## Playing
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin klondike-rs
//! ```
//! or the plain line shell with `--plain`.

pub mod cards;
pub mod command;
pub mod config;
pub mod engine;
pub mod game;
pub mod layout;
pub mod pile;
pub mod shell;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
