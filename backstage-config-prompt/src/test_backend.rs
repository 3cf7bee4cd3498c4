//! Test backend for running the wizard without user interaction.
//!
//! `TestBackend` answers prompts from scripted raw answers keyed by prompt
//! label. Answers go through the same defaulting rules as the interactive
//! backends, so `""` picks the default and `"nope"` is a "no".
//!
//! # Example
//!
//! ```rust
//! use backstage_config_prompt::{Prompter, TestBackend};
//!
//! let mut prompts = TestBackend::new()
//!     .with_yes("Add proxy endpoint?")
//!     .with_no("Add proxy endpoint?");
//!
//! assert!(prompts.ask_bool("Add proxy endpoint?", true).unwrap());
//! assert!(!prompts.ask_bool("Add proxy endpoint?", true).unwrap());
//! // Unscripted questions take their default.
//! assert_eq!(prompts.ask_text("Enter default IDE", "webstorm").unwrap(), "webstorm");
//! ```

use std::collections::{HashMap, VecDeque};

use crate::prompt::{
    bool_prompt, list_prompt, resolve_bool, resolve_list, resolve_text, text_prompt,
};
use crate::{PromptError, Prompter};

/// Upper bound on prompts before the backend reports itself exhausted.
const DEFAULT_PROMPT_LIMIT: usize = 1_000;

/// One prompt shown by the [`TestBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub label: String,
    /// The prompt exactly as the line backend would print it.
    pub prompt: String,
}

/// A backend that answers from pre-configured responses and records every
/// prompt it was shown.
#[derive(Debug, Clone)]
pub struct TestBackend {
    answers: HashMap<String, VecDeque<String>>,
    asked: Vec<AskedPrompt>,
    sections: Vec<String>,
    prompt_limit: usize,
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBackend {
    /// Create a backend that answers every question with its default.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            asked: Vec::new(),
            sections: Vec::new(),
            prompt_limit: DEFAULT_PROMPT_LIMIT,
        }
    }

    /// Queue a raw answer for `label`. Answers for the same label are used
    /// in the order they were added; once drained, the default applies.
    pub fn with_answer(mut self, label: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers
            .entry(label.into())
            .or_default()
            .push_back(answer.into());
        self
    }

    /// Queue several raw answers for `label`.
    pub fn with_answers<I, S>(mut self, label: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .entry(label.into())
            .or_default()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    /// Queue a "y" answer.
    pub fn with_yes(self, label: impl Into<String>) -> Self {
        self.with_answer(label, "y")
    }

    /// Queue an "n" answer.
    pub fn with_no(self, label: impl Into<String>) -> Self {
        self.with_answer(label, "n")
    }

    /// Report exhaustion after `limit` prompts, so a runaway loop ends.
    pub fn with_prompt_limit(mut self, limit: usize) -> Self {
        self.prompt_limit = limit;
        self
    }

    /// Every prompt shown so far, in order.
    pub fn asked(&self) -> &[AskedPrompt] {
        &self.asked
    }

    /// Whether a prompt with `label` was shown.
    pub fn was_asked(&self, label: &str) -> bool {
        self.asked.iter().any(|asked| asked.label == label)
    }

    /// How many times a prompt with `label` was shown.
    pub fn times_asked(&self, label: &str) -> usize {
        self.asked.iter().filter(|asked| asked.label == label).count()
    }

    /// The rendered prompt the first time `label` was shown.
    pub fn prompt_for(&self, label: &str) -> Option<&str> {
        self.asked
            .iter()
            .find(|asked| asked.label == label)
            .map(|asked| asked.prompt.as_str())
    }

    /// Section banners shown so far.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Labels that still have scripted answers left.
    pub fn unused_answers(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .answers
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(label, _)| label.as_str())
            .collect();
        labels.sort_unstable();
        labels
    }

    fn answer(&mut self, label: &str, prompt: String) -> String {
        self.asked.push(AskedPrompt {
            label: label.to_string(),
            prompt,
        });
        self.answers
            .get_mut(label)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }
}

impl Prompter for TestBackend {
    fn ask_text(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.answer(label, text_prompt(label, default));
        Ok(resolve_text(&answer, default))
    }

    fn ask_bool(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.answer(label, bool_prompt(label, default));
        Ok(resolve_bool(&answer, default))
    }

    fn ask_list(&mut self, label: &str, default: &[&str]) -> Result<Vec<String>, PromptError> {
        let answer = self.answer(label, list_prompt(label, default));
        Ok(resolve_list(&answer, default))
    }

    fn section(&mut self, title: &str) -> Result<(), PromptError> {
        self.sections.push(title.to_string());
        Ok(())
    }

    fn note(&mut self, _message: &str) -> Result<(), PromptError> {
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.asked.len() >= self.prompt_limit
    }
}
