//! Line-oriented front end: print the table, print the menu, read a command.
//!
//! Works over any reader/writer pair, so it runs on a plain stdin/stdout
//! when no terminal is available and in tests against in-memory buffers.

use crate::command::{Command, Outcome, MENU_INSTRUCTIONS, VICTORY_MESSAGE};
use crate::engine::GameEngine;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Play until the player quits, wins, or the input ends.
pub fn run<E, R, W>(engine: &mut E, input: R, output: &mut W) -> io::Result<()>
where
    E: GameEngine + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", engine.layout())?;
    let mut lines = input.lines();
    loop {
        write!(output, "{MENU_INSTRUCTIONS}> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;
        if !line.trim().is_empty() {
            match line.parse::<Command>() {
                Ok(cmd) => {
                    debug!(?cmd, "command");
                    match cmd.apply(engine) {
                        Outcome::Quit => return Ok(()),
                        Outcome::Won => {
                            writeln!(output, "{}", engine.layout())?;
                            writeln!(output, "{VICTORY_MESSAGE}")?;
                            return Ok(());
                        }
                        Outcome::Help => {}
                        other => writeln!(output, "{}", other.message())?,
                    }
                }
                Err(err) => writeln!(output, "Invalid command: {err}")?,
            }
        }
        writeln!(output, "{}", engine.layout())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use std::io::Cursor;

    fn play(game: &mut Game, script: &str) -> String {
        let mut out = Vec::new();
        run(game, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quits_on_q() {
        let mut g = Game::with_seed(2);
        let text = play(&mut g, "q\nf\n");
        assert!(text.starts_with("Foundations\n"));
        assert!(text.contains("Action Menu"));
        // the flip after quit never runs
        assert!(g.layout().talon().is_empty());
    }

    #[test]
    fn reports_bad_input_and_keeps_going() {
        let mut g = Game::with_seed(2);
        let text = play(&mut g, "zz\nm 9 1\nf\n");
        assert!(text.contains("Invalid command: unknown command: 'zz'"));
        assert!(text.contains("Invalid command: tableau column out of range"));
        assert!(text.contains("Drew a card."));
        assert_eq!(g.layout().talon().len(), 1);
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut g = Game::with_seed(2);
        let text = play(&mut g, "");
        assert!(text.ends_with("> \n"));
    }
}
