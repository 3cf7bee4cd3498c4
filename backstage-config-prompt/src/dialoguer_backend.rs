//! Dialoguer frontend for the wizard prompts.

use std::io;

use dialoguer::{Input, theme::ColorfulTheme};

use crate::prompt::{
    bool_prompt, list_prompt, resolve_bool, resolve_list, resolve_text, text_prompt,
    write_note, write_section,
};
use crate::{PromptError, Prompter};

/// Dialoguer backend for interactive terminals.
///
/// Questions are rendered with the same `[default]` annotations as the line
/// backend and answers go through the same defaulting rules; dialoguer only
/// contributes the line editing and the theme. Requires a real terminal.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Read one raw answer. The theme supplies its own prompt separator, so
    /// the trailing `": "` of the rendered prompt is dropped.
    fn read(&self, prompt: &str) -> Result<String, PromptError> {
        let prompt = prompt.strip_suffix(": ").unwrap_or(prompt);

        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(prompt).allow_empty(true);

        Ok(builder.interact_text()?)
    }
}

impl Prompter for DialoguerBackend {
    fn ask_text(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.read(&text_prompt(label, default))?;
        Ok(resolve_text(&answer, default))
    }

    fn ask_bool(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.read(&bool_prompt(label, default))?;
        Ok(resolve_bool(&answer, default))
    }

    fn ask_list(&mut self, label: &str, default: &[&str]) -> Result<Vec<String>, PromptError> {
        let answer = self.read(&list_prompt(label, default))?;
        Ok(resolve_list(&answer, default))
    }

    fn section(&mut self, title: &str) -> Result<(), PromptError> {
        Ok(write_section(&mut io::stdout(), title)?)
    }

    fn note(&mut self, message: &str) -> Result<(), PromptError> {
        Ok(write_note(&mut io::stdout(), message)?)
    }
}
