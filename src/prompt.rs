//! Yes/no confirmation read from standard input.
use std::io::{self, BufRead, Write as _};

/// Source of a single confirmation answer.
pub trait Prompt {
    /// Show `question` and return the line the user typed.
    ///
    /// End of input yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the question or reading the answer fails.
    fn ask(&self, question: &str) -> io::Result<String>;
}

/// [`Prompt`] that writes to stdout and blocks on one line of stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    #[allow(clippy::print_stdout)]
    fn ask(&self, question: &str) -> io::Result<String> {
        print!("{question}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

/// Return `true` if `answer` is `yes` or `y`, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
