//! Loading, error, and empty screens.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render_loading(frame: &mut Frame, area: Rect) {
    render_box(
        frame,
        area,
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "TRIVIA QUIZ",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            Line::from("Loading questions...".fg(Color::DarkGray)),
        ],
    );
}

pub fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.load_error().unwrap_or("Failed to load questions.");
    render_box(
        frame,
        area,
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "LOAD FAILED",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(""),
            Line::from(message.to_string().fg(Color::Gray)),
            Line::from(""),
            Line::from("Rerun to try again  ·  q quit".fg(Color::DarkGray)),
        ],
    );
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    render_box(
        frame,
        area,
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "NO QUESTIONS",
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(""),
            Line::from("The question source returned an empty set.".fg(Color::Gray)),
            Line::from(""),
            Line::from("q quit".fg(Color::DarkGray)),
        ],
    );
}

fn render_box(frame: &mut Frame, area: Rect, content: Vec<Line>) {
    let height = content.len() as u16 + 3;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
