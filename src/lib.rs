//! # trivia-quiz
//!
//! A terminal trivia quiz: loads a batch of multiple-choice questions
//! from a static JSON source (file or URL), presents them one at a
//! time, and tracks the score. An optional per-question countdown
//! auto-skips questions that are not answered in time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use trivia_quiz::{QuestionSource, Quiz};
//!
//! fn main() -> std::io::Result<()> {
//!     let source = QuestionSource::from_arg("questions.json");
//!
//!     // Timed variant: 30 seconds per question.
//!     let quiz = Quiz::load(&source, Some(Duration::from_secs(30)));
//!     quiz.run()
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod timer;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;

pub use app::App;
pub use data::{decode_html, fetch_questions, LoadError, QuestionSource, Shuffle, ThreadRngShuffle};
pub use models::{AppState, Question};

/// How long the event loop waits for input before driving the
/// countdown again. Short enough that the displayed seconds never
/// visibly stall.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// An untimed quiz over an already-loaded question list.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// A timed quiz over an already-loaded question list.
    pub fn timed(questions: Vec<Question>, per_question: Duration) -> Self {
        Self {
            app: App::timed(questions, per_question, Instant::now()),
        }
    }

    /// Fetch the question source and build a quiz around the outcome.
    ///
    /// Load failures do not error out here: they land the app in its
    /// error (or empty) state, which `run` then displays. There is no
    /// retry; rerunning the program is the retry.
    pub fn load(source: &QuestionSource, per_question: Option<Duration>) -> Self {
        let result = fetch_questions(source, &mut ThreadRngShuffle);
        if let Err(err) = &result {
            warn!("question load failed: {}", err);
        }

        let mut app = App::new(per_question);
        app.finish_load(result, Instant::now());
        Self { app }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, displays the quiz UI, and returns when
    /// the user quits.
    pub fn run(mut self) -> io::Result<()> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code, Instant::now()) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.state {
        AppState::Quiz => handle_quiz_input(app, key, now),
        AppState::Finished => handle_result_input(app, key, now),
        // Loading, error, and empty screens only react to quit.
        _ => {}
    }

    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode, now: Instant) {
    if app.is_answered() {
        if matches!(key, KeyCode::Enter | KeyCode::Char('n')) {
            app.next(now);
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            app.submit_answer(c as usize - '1' as usize);
        }
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode, now: Instant) {
    if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
        app.restart(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        vec![
            Question {
                text: "First?".to_string(),
                options: vec!["yes".to_string(), "no".to_string()],
                correct_index: 0,
            },
            Question {
                text: "Second?".to_string(),
                options: vec!["yes".to_string(), "no".to_string()],
                correct_index: 1,
            },
        ]
    }

    #[test]
    fn test_quit_key_exits_everywhere() {
        let mut app = App::with_questions(two_questions());
        assert!(handle_input(&mut app, KeyCode::Char('q'), Instant::now()));

        let mut loading = App::new(None);
        assert!(handle_input(&mut loading, KeyCode::Char('Q'), Instant::now()));
    }

    #[test]
    fn test_enter_submits_cursor_option() {
        let mut app = App::with_questions(two_questions());
        handle_input(&mut app, KeyCode::Enter, Instant::now());

        assert!(app.is_answered());
        assert_eq!(app.selected_option(), Some(0));
        assert_eq!(app.score(), 1);
    }

    #[test]
    fn test_digit_submits_directly() {
        let mut app = App::with_questions(two_questions());
        handle_input(&mut app, KeyCode::Char('2'), Instant::now());

        assert!(app.is_answered());
        assert_eq!(app.selected_option(), Some(1));
        assert_eq!(app.score(), 0);
    }

    #[test]
    fn test_enter_advances_after_answer() {
        let mut app = App::with_questions(two_questions());
        handle_input(&mut app, KeyCode::Enter, Instant::now());
        handle_input(&mut app, KeyCode::Enter, Instant::now());

        assert_eq!(app.current_question_number(), 2);
        assert!(!app.is_answered());
    }

    #[test]
    fn test_restart_from_finished_screen() {
        let mut app = App::with_questions(two_questions());
        handle_input(&mut app, KeyCode::Enter, Instant::now());
        handle_input(&mut app, KeyCode::Enter, Instant::now());
        handle_input(&mut app, KeyCode::Enter, Instant::now());
        handle_input(&mut app, KeyCode::Enter, Instant::now());
        assert_eq!(app.state, AppState::Finished);

        handle_input(&mut app, KeyCode::Char('r'), Instant::now());
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.score(), 0);
        assert_eq!(app.current_question_number(), 1);
    }
}
