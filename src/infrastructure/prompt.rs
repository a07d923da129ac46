// src/infrastructure/prompt.rs
use crate::application::Confirmation;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks on stderr and reads a y/N answer from `input`
pub struct PromptConfirmation<'a, R: BufRead> {
    input: RefCell<&'a mut R>,
}

impl<'a, R: BufRead> PromptConfirmation<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }
}

impl<R: BufRead> Confirmation for PromptConfirmation<'_, R> {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match self.input.borrow_mut().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

/// Non-interactive confirmation for `--yes`
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
