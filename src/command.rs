//! Player commands shared by the line shell and the TUI.
//!
//! Grammar (columns are numbered 1 to 7):
//! - `m <src> <dst>`: move a run between tableau columns
//! - `b <src>`: build onto the foundations from a column, or `t` for the talon
//! - `p <dst>`: put the talon's top card on a column
//! - `f`: flip the next stock card onto the talon
//! - `n`: deal a new game
//! - `?` or `h`: show the instructions
//! - `q`: quit

use crate::engine::GameEngine;
use crate::game::{MoveError, PileRef, StockFlip};
use crate::layout::{Column, ColumnError};
use std::str::FromStr;

pub const MENU_INSTRUCTIONS: &str = "\
Action Menu
---------------
- 'm [source] [dest]' to move from one tableau stack to another
- 'b [source]' to move from a stack to the foundations, [source] t for talon
- 'p [dest]' to move from the talon to a tableau stack
- 'f' to flip another card over from the stock
- 'n' to deal a new game
- 'q' to quit
";

pub const VICTORY_MESSAGE: &str = "Yay you won!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    Move { from: Column, to: Column },
    Build(PileRef),
    Play(Column),
    Flip,
    NewGame,
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: '{0}'")]
    Unknown(String),
    #[error("'{0}' needs a pile")]
    MissingArgument(&'static str),
    #[error("not a pile: '{0}'")]
    InvalidPile(String),
    #[error(transparent)]
    Column(#[from] ColumnError),
}

/// What applying a command did, for the front end to report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Moved(usize),
    Rejected(MoveError),
    Drew(StockFlip),
    Won,
    Dealt,
    Help,
    Quit,
}

impl Outcome {
    /// One-line status text for the player.
    pub fn message(&self) -> String {
        match self {
            Outcome::Moved(1) => "Moved 1 card.".to_string(),
            Outcome::Moved(n) => format!("Moved {n} cards."),
            Outcome::Rejected(err) => format!("Invalid move: {err}."),
            Outcome::Drew(StockFlip::Recycled) => "Talon turned over; drew a card.".to_string(),
            Outcome::Drew(StockFlip::Exhausted) => "No cards left to draw.".to_string(),
            Outcome::Drew(_) => "Drew a card.".to_string(),
            Outcome::Won => VICTORY_MESSAGE.to_string(),
            Outcome::Dealt => "New game dealt.".to_string(),
            Outcome::Help => MENU_INSTRUCTIONS.to_string(),
            Outcome::Quit => "Bye.".to_string(),
        }
    }
}

fn column_arg(token: Option<&str>, command: &'static str) -> Result<Column, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(command))?;
    let number =
        token.parse::<usize>().map_err(|_| CommandError::InvalidPile(token.to_string()))?;
    Ok(Column::from_number(number)?)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?;
        let cmd = match head.to_ascii_lowercase().as_str() {
            "m" => {
                let from = column_arg(tokens.next(), "m")?;
                let to = column_arg(tokens.next(), "m")?;
                Command::Move { from, to }
            }
            "b" => match tokens.next() {
                Some(t) if t.eq_ignore_ascii_case("t") => Command::Build(PileRef::Talon),
                other => Command::Build(PileRef::Tableau(column_arg(other, "b")?)),
            },
            "p" => Command::Play(column_arg(tokens.next(), "p")?),
            "f" => Command::Flip,
            "n" => Command::NewGame,
            "?" | "h" => Command::Help,
            "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(head.to_string())),
        };
        Ok(cmd)
    }
}

impl Command {
    /// Run the command against `engine`, turning up exposed tableau cards afterwards.
    pub fn apply<E: GameEngine + ?Sized>(self, engine: &mut E) -> Outcome {
        let result = match self {
            Command::Move { from, to } => {
                engine.try_move(PileRef::Tableau(from), PileRef::Tableau(to))
            }
            Command::Build(from) => engine.try_move(from, PileRef::Foundation),
            Command::Play(to) => engine.try_move(PileRef::Talon, PileRef::Tableau(to)),
            Command::Flip => return Outcome::Drew(engine.flip_stock()),
            Command::NewGame => {
                engine.new_game();
                return Outcome::Dealt;
            }
            Command::Help => return Outcome::Help,
            Command::Quit => return Outcome::Quit,
        };
        engine.check_tableau();
        match result {
            Ok(_) if engine.victory() => Outcome::Won,
            Ok(n) => Outcome::Moved(n),
            Err(err) => Outcome::Rejected(err),
        }
    }
}
