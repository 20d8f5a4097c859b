//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Stage 1: Love XOX 💗")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    if let Some(secret) = app.unlocked_secret() {
        render_completion(f, chunks[1], secret, app.progress());
    } else {
        let view = app.view();
        render_board(f, chunks[1], &view.board, app.cursor(), view.outcome.is_terminal());
    }

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/Enter or 1-9 to play | R: Reset Board | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Completion panel: the revealed secret and overall progress.
fn render_completion(f: &mut Frame, area: Rect, secret: &str, progress: u16) {
    let [message, gauge] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let done = Paragraph::new(vec![
        Line::from("✅ Completed!").style(Style::default().fg(Color::Green)),
        Line::default(),
        Line::from("A secret unlocked:"),
        Line::from(secret).style(Style::default().fg(Color::Magenta)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    f.render_widget(done, message);

    let love = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Love"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(progress);
    f.render_widget(love, gauge);
}
