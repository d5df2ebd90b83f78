//! Input capability used by the `init` flow

use std::collections::VecDeque;

use crate::error::{PromptError, ValidationError};

/// A question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text shown to the user
    pub text: String,
    /// Answer used when the user submits empty input
    pub default: Option<String>,
}

impl Question {
    /// Question without a default
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
        }
    }

    /// Set the answer used for empty input
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Substitute the default for empty input
    #[must_use]
    pub fn resolve<'a>(&'a self, input: &'a str) -> &'a str {
        match &self.default {
            Some(default) if input.trim().is_empty() => default.as_str(),
            _ => input,
        }
    }
}

/// Obtain a validated value from the user
///
/// Implementations ask `question`, substitute its default for empty input and
/// pass the answer to `parse`. A rejected answer is reported and asked again;
/// only running out of input ends the loop with an error.
pub trait Prompter {
    /// Ask until `parse` accepts an answer
    fn prompt<T>(
        &mut self,
        question: &Question,
        parse: &dyn Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, PromptError>;
}

/// [`Prompter`] that answers from a fixed script
///
/// Useful for tests and non-interactive runs. Rejected answers are recorded
/// in [`rejections`](Self::rejections).
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
    rejections: Vec<ValidationError>,
}

impl ScriptedPrompter {
    /// Prompter that will give `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Question texts asked so far, in order
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Validation failures seen so far
    #[must_use]
    pub fn rejections(&self) -> &[ValidationError] {
        &self.rejections
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt<T>(
        &mut self,
        question: &Question,
        parse: &dyn Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, PromptError> {
        self.asked.push(question.text.clone());
        loop {
            let answer = self.answers.pop_front().ok_or(PromptError::Exhausted)?;
            match parse(question.resolve(&answer)) {
                Ok(value) => return Ok(value),
                Err(e) => self.rejections.push(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{parse_yes_no, validate_repository_url};

    #[test]
    fn test_default_replaces_empty_input() {
        let question = Question::new("Path").with_default("/srv");
        assert_eq!(question.resolve(""), "/srv");
        assert_eq!(question.resolve("  "), "/srv");
        assert_eq!(question.resolve("/other"), "/other");

        assert_eq!(Question::new("Path").resolve(""), "");
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new([
            "nope",
            "example.com",
            "https://example.com/r.git",
        ]);
        let url = prompter
            .prompt(&Question::new("URL"), &validate_repository_url)
            .unwrap();

        assert_eq!(url.as_str(), "https://example.com/r.git");
        assert_eq!(prompter.rejections().len(), 2);
        assert_eq!(prompter.asked(), ["URL"]);
    }

    #[test]
    fn test_exhausted_input() {
        let mut prompter = ScriptedPrompter::new(["maybe"]);
        let result = prompter.prompt(&Question::new("Local only?"), &parse_yes_no);

        assert!(matches!(result, Err(PromptError::Exhausted)));
        assert_eq!(prompter.remaining(), 0);
    }
}
