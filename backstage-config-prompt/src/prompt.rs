use std::io::{self, Write};

use crate::PromptError;

/// A source of answers for the wizard.
///
/// Every `ask_*` call shows one prompt and consumes exactly one answer.
/// Backends differ only in how the prompt is rendered and where the answer
/// comes from; the defaulting rules are the same for all of them (see
/// [`resolve_text`], [`resolve_bool`] and [`resolve_list`]).
pub trait Prompter {
    /// Ask a free-text question. An empty answer selects `default`.
    fn ask_text(&mut self, label: &str, default: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question. An empty answer selects `default`.
    fn ask_bool(&mut self, label: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask for a comma-separated list. An empty answer selects `default`.
    fn ask_list(&mut self, label: &str, default: &[&str]) -> Result<Vec<String>, PromptError>;

    /// Show a section banner.
    fn section(&mut self, title: &str) -> Result<(), PromptError>;

    /// Show an informational line.
    fn note(&mut self, message: &str) -> Result<(), PromptError>;

    /// Whether the answer source has run dry.
    ///
    /// Once exhausted every question is answered with its default, so
    /// callers looping on a default-"yes" question must stop.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// `"{label} [{default}]: "`, or `"{label}: "` without a default.
pub fn text_prompt(label: &str, default: &str) -> String {
    if default.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{default}]: ")
    }
}

/// `"{label} (y/n) [y]: "` or `"{label} (y/n) [n]: "`.
pub fn bool_prompt(label: &str, default: bool) -> String {
    let default = if default { "y" } else { "n" };
    format!("{label} (y/n) [{default}]: ")
}

/// `"{label} [a,b]: "`, or `"{label} (comma-separated): "` without a default.
pub fn list_prompt(label: &str, default: &[&str]) -> String {
    if default.is_empty() {
        format!("{label} (comma-separated): ")
    } else {
        format!("{label} [{}]: ", default.join(","))
    }
}

/// Section banner: a blank line, the title, and an `=` underline.
pub(crate) fn write_section(output: &mut impl Write, title: &str) -> io::Result<()> {
    let underline = "=".repeat(title.chars().count());
    write!(output, "\n{title}\n{underline}\n")?;
    output.flush()
}

pub(crate) fn write_note(output: &mut impl Write, message: &str) -> io::Result<()> {
    write!(output, "\n{message}\n")?;
    output.flush()
}

/// The answer itself, untouched, unless it is empty.
pub fn resolve_text(answer: &str, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

/// `y` or `Y` is yes, empty is `default`, anything else is no.
pub fn resolve_bool(answer: &str, default: bool) -> bool {
    if answer.is_empty() {
        default
    } else {
        answer.eq_ignore_ascii_case("y")
    }
}

/// The answer split on commas (order and empty items kept, no trimming),
/// unless it is empty.
pub fn resolve_list(answer: &str, default: &[&str]) -> Vec<String> {
    if answer.is_empty() {
        default.iter().map(|item| (*item).to_string()).collect()
    } else {
        answer.split(',').map(str::to_string).collect()
    }
}
