//! One-shot question loading.
//!
//! The question bank is a static JSON document shaped like
//! `{ "results": [ { "question", "correct_answer", "incorrect_answers" } ] }`,
//! read either from a local file or over HTTP. Each raw entry is
//! normalized exactly once: entities decoded, options merged and
//! shuffled, correct index located post-shuffle.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info};
use serde::Deserialize;

use crate::models::Question;

use super::entities::decode_html;
use super::shuffle::Shuffle;

/// Where the question JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    File(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// Interpret a CLI argument as a URL if it looks like one,
    /// otherwise as a filesystem path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Error type for question loading.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the question file.
    Io(io::Error),
    /// Transport-level HTTP failure.
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Status(u16),
    /// The document did not match the expected shape.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read questions: {}", e),
            LoadError::Request(e) => write!(f, "failed to fetch questions: {}", e),
            LoadError::Status(code) => write!(f, "question server returned HTTP {}", code),
            LoadError::Parse(e) => write!(f, "failed to parse questions: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Request(e) => Some(e),
            LoadError::Status(_) => None,
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Request(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Wire shape of the question document.
#[derive(Debug, Deserialize)]
struct ResultSet {
    results: Vec<RawQuestion>,
}

/// One entry as the trivia source serves it. String fields may contain
/// HTML entities.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Fetch and normalize the question bank. Issued exactly once per run;
/// a failure is surfaced to the caller and never retried here.
pub fn fetch_questions(
    source: &QuestionSource,
    shuffler: &mut dyn Shuffle,
) -> Result<Vec<Question>, LoadError> {
    let body = read_source(source)?;
    let set: ResultSet = serde_json::from_str(&body)?;

    let questions: Vec<Question> = set
        .results
        .into_iter()
        .map(|raw| normalize(raw, shuffler))
        .collect();

    info!("loaded {} questions from {}", questions.len(), source);
    Ok(questions)
}

fn read_source(source: &QuestionSource) -> Result<String, LoadError> {
    match source {
        QuestionSource::File(path) => Ok(fs::read_to_string(path)?),
        QuestionSource::Url(url) => {
            debug!("fetching {}", url);
            let response = reqwest::blocking::get(url)?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            Ok(response.text()?)
        }
    }
}

/// Turn a raw entry into a presentable record: decode every string,
/// merge incorrect + correct options, shuffle, and find where the
/// correct answer landed.
fn normalize(raw: RawQuestion, shuffler: &mut dyn Shuffle) -> Question {
    let correct = decode_html(&raw.correct_answer);

    let mut options: Vec<String> = raw
        .incorrect_answers
        .iter()
        .map(|opt| decode_html(opt))
        .collect();
    options.push(correct.clone());
    shuffler.shuffle(&mut options);

    // The correct string was pushed above, so a position always exists.
    let correct_index = options
        .iter()
        .position(|opt| *opt == correct)
        .unwrap_or_default();

    Question {
        text: decode_html(&raw.question),
        options,
        correct_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic permutation: reverses the slice.
    struct ReverseShuffle;

    impl Shuffle for ReverseShuffle {
        fn shuffle(&mut self, items: &mut [String]) {
            items.reverse();
        }
    }

    /// Leaves the slice alone.
    struct IdentityShuffle;

    impl Shuffle for IdentityShuffle {
        fn shuffle(&mut self, _items: &mut [String]) {}
    }

    fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
        RawQuestion {
            question: question.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_source_from_arg() {
        assert_eq!(
            QuestionSource::from_arg("https://example.com/q.json"),
            QuestionSource::Url("https://example.com/q.json".to_string())
        );
        assert_eq!(
            QuestionSource::from_arg("http://localhost:8080/q.json"),
            QuestionSource::Url("http://localhost:8080/q.json".to_string())
        );
        assert_eq!(
            QuestionSource::from_arg("questions.json"),
            QuestionSource::File(PathBuf::from("questions.json"))
        );
    }

    #[test]
    fn test_normalize_locates_correct_index() {
        let question = normalize(raw("Q?", "right", &["a", "b", "c"]), &mut ReverseShuffle);

        // Reversed [a, b, c, right] puts the correct answer first.
        assert_eq!(question.options, vec!["right", "c", "b", "a"]);
        assert_eq!(question.correct_index, 0);
        assert_eq!(question.correct_option(), "right");
    }

    #[test]
    fn test_normalize_decodes_entities_before_matching() {
        let question = normalize(
            raw(
                "Who said &quot;hi&quot;?",
                "Bob&#039;s uncle",
                &["n&ouml;", "maybe"],
            ),
            &mut IdentityShuffle,
        );

        assert_eq!(question.text, "Who said \"hi\"?");
        assert_eq!(question.options, vec!["n\u{f6}", "maybe", "Bob's uncle"]);
        assert_eq!(question.correct_index, 2);
        assert_eq!(question.correct_option(), "Bob's uncle");
    }

    #[test]
    fn test_parse_result_set() {
        let body = r#"{
            "results": [
                {
                    "question": "2 + 2?",
                    "correct_answer": "4",
                    "incorrect_answers": ["3", "5", "22"]
                }
            ]
        }"#;
        let set: ResultSet = serde_json::from_str(body).unwrap();
        assert_eq!(set.results.len(), 1);
        assert_eq!(set.results[0].incorrect_answers.len(), 3);
    }

    #[test]
    fn test_empty_result_set_is_ok_and_empty() {
        let set: ResultSet = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(set.results.is_empty());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = serde_json::from_str::<ResultSet>(r#"{ "nope": true }"#).unwrap_err();
        let err = LoadError::from(err);
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = QuestionSource::File(PathBuf::from("/definitely/not/here.json"));
        let err = fetch_questions(&source, &mut IdentityShuffle).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
