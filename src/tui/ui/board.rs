use crate::cards::{Card, Color as CardColor, Suit};
use crate::command::{MENU_INSTRUCTIONS, VICTORY_MESSAGE};
use crate::layout::Column;
use crate::pile::Pile;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // stock, talon, foundations
            Constraint::Min(5),    // tableau
            Constraint::Length(3), // prompt
            Constraint::Length(3), // status
        ])
        .split(size);

    let layout = app.game.layout();

    let elapsed = app.started.elapsed().as_secs();
    let header = Paragraph::new(Line::from(format!(
        "Moves: {}   Stock: {}   Talon: {}   Time: {}:{:02}",
        app.game.moves(),
        layout.stock().len(),
        layout.talon().len(),
        elapsed / 60,
        elapsed % 60,
    )))
    .block(Block::default().title("klondike-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Top row: stock, talon, a gap, then one slot per foundation
    let slots = columns(chunks[1], 7);
    render_slot(f, slots[0], "Stock", stock_line(layout.stock()));
    render_slot(f, slots[1], "Talon", top_line(layout.talon(), None));
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        render_slot(f, slots[3 + i], "", top_line(layout.foundation(suit), Some(suit)));
    }

    let cols = columns(chunks[2], Column::ALL.len() as u16);
    for col in Column::ALL {
        let pile = layout.tableau(col);
        // bottom card first so the playable card sits at the end of the column
        let lines: Vec<Line> = pile.iter().rev().map(|c| Line::from(card_span(*c))).collect();
        let lines = if lines.is_empty() { vec![Line::from(Span::styled("--", dim()))] } else { lines };
        let para = Paragraph::new(lines)
            .block(Block::default().title(col.to_string()).borders(Borders::ALL));
        f.render_widget(para, cols[col.index()]);
    }

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.input().to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(Block::default().title("Command").borders(Borders::ALL));
    f.render_widget(prompt, chunks[3]);

    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(inner(status_area));
    let left = match (app.scene, app.status()) {
        (Scene::Won, _) => Line::from(Span::styled(
            format!("{VICTORY_MESSAGE} Type n for a new game."),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        (_, Some(msg)) if app.status_is_error() => {
            Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Red)))
        }
        (_, Some(msg)) => Line::from(msg.to_string()),
        (_, None) => Line::from(Span::styled("m b p f n q • ? for help", dim())),
    };
    f.render_widget(Paragraph::new(left), halves[0]);
    f.render_widget(
        Paragraph::new(Line::from("? help • Ctrl-C quit")).alignment(Alignment::Right),
        halves[1],
    );
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let mut lines: Vec<Line> = MENU_INSTRUCTIONS.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Columns are numbered 1 to 7, left to right."));
    lines.push(Line::from("Type a command and press Enter; Esc clears the prompt."));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Close help: ? or Esc", dim())));
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn card_span(card: Card) -> Span<'static> {
    if !card.is_face_up() {
        return Span::styled("##", Style::default().fg(Color::Blue));
    }
    let style = match card.color() {
        CardColor::Red => Style::default().fg(Color::Red),
        CardColor::Black => Style::default().fg(Color::White),
    };
    Span::styled(card.short(), style.add_modifier(Modifier::BOLD))
}

fn stock_line(stock: &Pile) -> Line<'static> {
    if stock.is_empty() {
        Line::from(Span::styled("[  ]", dim()))
    } else {
        Line::from(Span::styled(format!("## {}", stock.len()), Style::default().fg(Color::Blue)))
    }
}

fn top_line(pile: &Pile, placeholder: Option<Suit>) -> Line<'static> {
    match (pile.top(), placeholder) {
        (Some(card), _) => Line::from(card_span(*card)),
        (None, Some(suit)) => Line::from(Span::styled(format!("[{}]", suit.glyph()), dim())),
        (None, None) => Line::from(Span::styled("[  ]", dim())),
    }
}

fn render_slot(f: &mut Frame, area: Rect, title: &str, content: Line<'static>) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let para = Paragraph::new(content).alignment(Alignment::Center).block(block);
    f.render_widget(para, area);
}
