//! Interactive confirmation prompts.
//!
//! The command handlers never read stdin directly; they go through the
//! [`Prompter`] trait so tests can script every answer.

use std::io::{self, Write};

/// Answer to a batch confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Confirm, but keep asking per item.
    Yes,
    /// Decline.
    No,
    /// Confirm for every remaining item without asking again.
    All,
}

/// Trait for user confirmations (enables mocking in tests).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Asks a yes/no question. Anything but an explicit yes means no.
    fn confirm(&self, message: &str) -> bool;

    /// Asks a yes/no/all question for a batch of items.
    fn confirm_each(&self, message: &str) -> Choice;
}

/// Production prompter reading answers from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str) -> bool {
        matches!(ask(message, "y/n"), Choice::Yes | Choice::All)
    }

    fn confirm_each(&self, message: &str) -> Choice {
        ask(message, "y/n/all")
    }
}

/// Prints the prompt and reads one line. EOF means no.
fn ask(message: &str, options: &str) -> Choice {
    print!("{message} ({options}): ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return Choice::No;
    }

    parse_answer(&input)
}

fn parse_answer(input: &str) -> Choice {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Choice::Yes,
        "all" => Choice::All,
        _ => Choice::No,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_yes_variants() {
        assert_eq!(parse_answer("y\n"), Choice::Yes);
        assert_eq!(parse_answer("YES\n"), Choice::Yes);
        assert_eq!(parse_answer("  yes  "), Choice::Yes);
    }

    #[test]
    fn parse_answer_accepts_all() {
        assert_eq!(parse_answer("all\n"), Choice::All);
        assert_eq!(parse_answer("ALL"), Choice::All);
    }

    #[test]
    fn parse_answer_defaults_to_no() {
        assert_eq!(parse_answer("n\n"), Choice::No);
        assert_eq!(parse_answer(""), Choice::No);
        assert_eq!(parse_answer("maybe\n"), Choice::No);
    }
}
