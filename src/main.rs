use std::time::Duration;

use clap::Parser;
use trivia_quiz::{QuestionSource, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path or http(s) URL of the question JSON
    #[arg(short, long)]
    questions: String,

    /// Enable the per-question countdown
    #[arg(long)]
    timed: bool,

    /// Countdown duration in seconds (timed mode)
    #[arg(long, default_value_t = 30)]
    seconds: u64,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let source = QuestionSource::from_arg(&args.questions);
    let per_question = args.timed.then(|| Duration::from_secs(args.seconds));

    let quiz = Quiz::load(&source, per_question);
    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
