mod entities;
mod loader;
mod shuffle;

pub use entities::decode_html;
pub use loader::{fetch_questions, LoadError, QuestionSource};
pub use shuffle::{Shuffle, ThreadRngShuffle};
