use crate::command::{Command, Outcome};
use crate::game::Game;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Playing,
    Won,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Char(char),
    Backspace,
    Submit,
    Clear,
    ToggleHelp,
    Quit,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    input: String,
    status: Option<String>,
    status_is_error: bool,
    status_at: Option<Instant>,
    help_open: bool,
    quit: bool,
}

impl AppState {
    const STATUS_TTL: Duration = Duration::from_secs(4);
    const MAX_INPUT: usize = 16;

    pub fn new(game: Game) -> Self {
        Self {
            scene: Scene::Playing,
            started: Instant::now(),
            game,
            input: String::new(),
            status: None,
            status_is_error: false,
            status_at: None,
            help_open: false,
            quit: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn status_is_error(&self) -> bool {
        self.status_is_error
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(text);
        self.status_is_error = is_error;
        self.status_at = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_is_error = false;
        self.status_at = None;
    }

    fn submit(&mut self) -> bool {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() {
            return false;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                self.set_status(format!("Invalid command: {err}"), true);
                return false;
            }
        };
        debug!(?cmd, "command");
        let outcome = cmd.apply(&mut self.game);
        let changed = match &outcome {
            Outcome::Quit => {
                self.quit = true;
                return false;
            }
            Outcome::Help => {
                self.help_open = true;
                return false;
            }
            Outcome::Won => {
                self.scene = Scene::Won;
                true
            }
            Outcome::Dealt => {
                self.scene = Scene::Playing;
                self.started = Instant::now();
                true
            }
            Outcome::Rejected(_) => false,
            _ => true,
        };
        self.set_status(outcome.message(), matches!(outcome, Outcome::Rejected(_)));
        changed
    }

    /// Apply one input action. Returns true when the game itself changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::Quit => {
                self.quit = true;
                false
            }
            // the help popup swallows everything else
            _ if self.help_open => false,
            InputAction::Char(c) => {
                if self.input.len() < Self::MAX_INPUT && !c.is_control() {
                    self.input.push(c);
                }
                false
            }
            InputAction::Backspace => {
                self.input.pop();
                false
            }
            InputAction::Clear => {
                self.input.clear();
                self.clear_status();
                false
            }
            InputAction::Submit => self.submit(),
        }
    }

    /// Expire stale status messages.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.status_at {
            if at.elapsed() >= Self::STATUS_TTL {
                self.clear_status();
            }
        }
    }
}
