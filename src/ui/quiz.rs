use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app, now);
    render_question_text(frame, chunks[1], &app.current_question().text);
    render_options(frame, chunks[2], app);
    render_feedback(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    if let Some(seconds) = app.time_left(now) {
        let color = if seconds <= 5 {
            Color::Red
        } else {
            Color::Yellow
        };
        let timer = Paragraph::new(format!("Time left: {}s", seconds))
            .alignment(Alignment::Left)
            .fg(color)
            .bold();
        frame.render_widget(timer, area);
    }

    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(app, index);
        let is_cursor = !app.is_answered() && index == app.cursor();
        let marker = if is_cursor { ">" } else { " " };
        let label = (b'A' + index as u8) as char;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Neutral before answering (cursor highlighted); afterwards the
/// correct option goes green and a wrong pick goes red.
fn option_style(app: &App, index: usize) -> Style {
    let question = app.current_question();

    if app.is_answered() {
        if index == question.correct_index {
            Style::default().fg(Color::Green).bold()
        } else if app.selected_option() == Some(index) {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    } else if index == app.cursor() {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    if !app.is_answered() {
        return;
    }

    let question = app.current_question();
    let (text, color) = if app.was_skipped() {
        (
            format!(
                "Time's up! Correct answer: \"{}\"",
                question.correct_option()
            ),
            Color::Yellow,
        )
    } else if app.selected_option() == Some(question.correct_index) {
        ("Correct!".to_string(), Color::Green)
    } else {
        (
            format!(
                "Incorrect! Correct answer: \"{}\"",
                question.correct_option()
            ),
            Color::Red,
        )
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.is_answered() {
        if app.current_question_number() < app.total_questions() {
            "enter next question  ·  q quit"
        } else {
            "enter finish quiz  ·  q quit"
        }
    } else {
        "j/k navigate  ·  enter answer  ·  q quit"
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
