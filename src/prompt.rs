//! Source of answers for the interactive follow-up questions.

use std::io::{self, BufRead};

/// Supplies one line of user input per question.
pub trait Prompt {
    /// Reads one answer. `Ok(None)` means input is exhausted.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

/// Reads answers from standard input.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// `true` when the answer is `Y` in either case, ignoring surrounding whitespace.
///
/// Trimming covers the trailing newline (`\r\n` on Windows) and stray spaces
/// from piped input; anything else, `yes` included, is a no.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
