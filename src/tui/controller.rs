use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = map_key(app, key) {
                        let _ = app.handle_input(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Translate a key press into an input action, if it means anything.
pub fn map_key(app: &AppState, key: KeyEvent) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Some(InputAction::Quit);
    }
    match key.code {
        KeyCode::Char('?') => Some(InputAction::ToggleHelp),
        KeyCode::Esc if app.help_open() => Some(InputAction::ToggleHelp),
        KeyCode::Esc => Some(InputAction::Clear),
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Backspace => Some(InputAction::Backspace),
        KeyCode::Char(c) => Some(InputAction::Char(c)),
        _ => None,
    }
}
