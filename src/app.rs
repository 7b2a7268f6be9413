use std::time::{Duration, Instant};

use crate::data::LoadError;
use crate::models::{AppState, Question};
use crate::timer::Countdown;

/// The quiz controller.
///
/// Owns the whole question lifecycle: load outcome, current question,
/// answer acceptance, scoring, advancing, and the optional per-question
/// countdown. Every mutation happens through a method that checks the
/// current phase first, so invalid calls (answering twice, advancing
/// before answering) are no-ops rather than errors.
pub struct App {
    pub state: AppState,
    questions: Vec<Question>,
    load_error: Option<String>,
    current_index: usize,
    cursor: usize,
    selected_option: Option<usize>,
    is_answered: bool,
    was_skipped: bool,
    score: usize,
    timer_duration: Option<Duration>,
    countdown: Option<Countdown>,
}

impl App {
    /// A controller waiting for its one-shot load to complete. Pass a
    /// duration to enable the per-question countdown.
    pub fn new(timer_duration: Option<Duration>) -> Self {
        Self {
            state: AppState::Loading,
            questions: Vec::new(),
            load_error: None,
            current_index: 0,
            cursor: 0,
            selected_option: None,
            is_answered: false,
            was_skipped: false,
            score: 0,
            timer_duration,
            countdown: None,
        }
    }

    /// An untimed controller that starts directly on its questions.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut app = Self::new(None);
        app.finish_load(Ok(questions), Instant::now());
        app
    }

    /// A timed controller that starts directly on its questions.
    pub fn timed(questions: Vec<Question>, duration: Duration, now: Instant) -> Self {
        let mut app = Self::new(Some(duration));
        app.finish_load(Ok(questions), now);
        app
    }

    /// Apply the outcome of the one-shot fetch. Only the first call
    /// counts; a completion arriving after the controller has moved on
    /// is discarded.
    pub fn finish_load(&mut self, result: Result<Vec<Question>, LoadError>, now: Instant) {
        if self.state != AppState::Loading {
            return;
        }

        match result {
            Err(err) => {
                self.load_error = Some(err.to_string());
                self.state = AppState::Error;
            }
            Ok(questions) if questions.is_empty() => {
                self.state = AppState::Empty;
            }
            Ok(questions) => {
                self.questions = questions;
                self.state = AppState::Quiz;
                self.start_countdown(now);
            }
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    pub fn was_skipped(&self) -> bool {
        self.was_skipped
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Remaining whole seconds on the live countdown, if any. `None`
    /// in the untimed variant and once the current question is closed.
    pub fn time_left(&self, now: Instant) -> Option<u64> {
        self.countdown.map(|c| c.remaining_secs(now))
    }

    pub fn select_next_option(&mut self) {
        if self.accepting_input() {
            self.cursor = (self.cursor + 1) % self.current_question().options.len();
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.accepting_input() {
            let len = self.current_question().options.len();
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Resolve the current question with the user's choice. No-op once
    /// the question is closed, so a click racing the countdown loses
    /// cleanly whichever lands second.
    pub fn submit_answer(&mut self, index: usize) {
        if !self.accepting_input() || index >= self.current_question().options.len() {
            return;
        }

        self.selected_option = Some(index);
        self.is_answered = true;
        self.was_skipped = false;
        self.countdown = None;

        if index == self.current_question().correct_index {
            self.score += 1;
        }
    }

    /// Submit the option under the cursor.
    pub fn submit_selected(&mut self) {
        self.submit_answer(self.cursor);
    }

    /// Drive the countdown. On expiry of an open question the question
    /// closes as skipped: no selection, no score change.
    pub fn tick(&mut self, now: Instant) {
        if !self.accepting_input() {
            return;
        }
        let Some(countdown) = self.countdown else {
            return;
        };

        if countdown.is_expired(now) {
            self.selected_option = None;
            self.is_answered = true;
            self.was_skipped = true;
            self.countdown = None;
        }
    }

    /// Advance past an answered question, finishing the quiz after the
    /// last one. The final score is whatever it was at that moment.
    pub fn next(&mut self, now: Instant) {
        if self.state != AppState::Quiz || !self.is_answered {
            return;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.clear_transient();
            self.start_countdown(now);
        } else {
            self.state = AppState::Finished;
            self.countdown = None;
        }
    }

    /// Back to question 0 with a zero score. Reuses the loaded
    /// questions; never refetches. No-op when there is nothing to
    /// restart into (failed or empty load).
    pub fn restart(&mut self, now: Instant) {
        if self.questions.is_empty() {
            return;
        }

        self.state = AppState::Quiz;
        self.current_index = 0;
        self.score = 0;
        self.clear_transient();
        self.start_countdown(now);
    }

    fn accepting_input(&self) -> bool {
        self.state == AppState::Quiz && !self.is_answered
    }

    fn clear_transient(&mut self) {
        self.cursor = 0;
        self.selected_option = None;
        self.is_answered = false;
        self.was_skipped = false;
    }

    fn start_countdown(&mut self, now: Instant) {
        self.countdown = self.timer_duration.map(|d| Countdown::start(now, d));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}
