use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use klondike_rs::config::Config;
use klondike_rs::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let config = Config::parse();
    let tui = !config.plain && io::stdin().is_terminal() && io::stdout().is_terminal();
    config.init_logging(tui)?;
    tracing::info!(version = klondike_rs::VERSION, tui, seed = ?config.seed, "starting");

    let mut game = config.new_game();
    if !tui {
        let stdin = io::stdin();
        return klondike_rs::shell::run(&mut game, stdin.lock(), &mut io::stdout());
    }

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(game);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
