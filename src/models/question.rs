/// A normalized multiple-choice question.
///
/// Built once by the loader and immutable afterwards: option order is
/// fixed after the shuffle, and `correct_index` points at the decoded
/// correct-answer string within `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// The option string the question considers correct.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}
