mod board;
mod layout;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    board::draw_board(f, app);
    if app.help_open() {
        board::draw_help(f);
    }
}
