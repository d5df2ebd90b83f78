//! Terminal prompting for the `init` flow

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use dialoguer::console::style;
use idesync_core::{PromptError, Prompter, Question, ValidationError};

/// Prompter reading from the terminal
///
/// Uses dialoguer when stdin is a terminal and plain line reads otherwise,
/// so answers can be piped in.
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a prompter for the current stdin
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_answer(&self, question: &Question) -> Result<String, PromptError> {
        if self.interactive {
            let mut input = Input::<String>::new()
                .with_prompt(&question.text)
                .allow_empty(true);
            if let Some(default) = &question.default {
                input = input.default(default.clone());
            }
            return input.interact_text().map_err(prompt_error);
        }

        match &question.default {
            Some(default) => eprint!("{} [{default}]: ", question.text),
            None => eprint!("{}: ", question.text),
        }
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Exhausted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn prompt_error(err: dialoguer::Error) -> PromptError {
    let dialoguer::Error::IO(e) = err;
    PromptError::Io(e)
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt<T>(
        &mut self,
        question: &Question,
        parse: &dyn Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.read_answer(question)?;
            match parse(question.resolve(&answer)) {
                Ok(value) => return Ok(value),
                Err(e) => eprintln!("{}", style(e).red()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompter_creation() {
        let _prompter = TerminalPrompter::new();
        let _default_prompter = TerminalPrompter::default();
    }

    #[test]
    fn test_terminal_error_keeps_io_kind() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::BrokenPipe));
        match prompt_error(err) {
            PromptError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
