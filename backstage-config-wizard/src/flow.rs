//! The two shapes every section is built from: a yes/no gate in front of a
//! whole branch, and a repeat-until-declined group of items.

use backstage_config_prompt::{PromptError, Prompter};
use tracing::{info, warn};

/// Ask `question`; on yes build the branch, on no return `None` without
/// asking anything else.
pub fn gated<P, T, F>(
    prompter: &mut P,
    question: &str,
    default: bool,
    build: F,
) -> Result<Option<T>, PromptError>
where
    P: Prompter + ?Sized,
    F: FnOnce(&mut P) -> Result<T, PromptError>,
{
    if prompter.ask_bool(question, default)? {
        info!(question, "accepted");
        build(prompter).map(Some)
    } else {
        info!(question, "declined");
        Ok(None)
    }
}

/// Ask `question` (default yes) before each item and build items until the
/// first "no". The item's own questions are never asked on the terminating
/// round, so declining straight away yields an empty list.
///
/// Stops early if the prompter's input is exhausted, since every remaining
/// answer would be the default "yes".
pub fn collect_repeated<P, T, F>(
    prompter: &mut P,
    question: &str,
    mut build: F,
) -> Result<Vec<T>, PromptError>
where
    P: Prompter + ?Sized,
    F: FnMut(&mut P) -> Result<T, PromptError>,
{
    let mut items = Vec::new();
    while prompter.ask_bool(question, true)? {
        if prompter.is_exhausted() {
            warn!(question, collected = items.len(), "input exhausted, not adding more");
            break;
        }
        items.push(build(prompter)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use backstage_config_prompt::{LineBackend, TestBackend};

    use super::*;

    fn name<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String, PromptError> {
        prompter.ask_text("Enter name", "")
    }

    #[test]
    fn declined_gate_asks_nothing_else() {
        let mut prompts = TestBackend::new();
        let branch = gated(&mut prompts, "Configure it?", false, name).unwrap();

        assert_eq!(branch, None);
        assert_eq!(prompts.asked().len(), 1);
    }

    #[test]
    fn accepted_gate_builds_branch() {
        let mut prompts = TestBackend::new()
            .with_yes("Configure it?")
            .with_answer("Enter name", "x");

        assert_eq!(
            gated(&mut prompts, "Configure it?", false, name).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn repeats_until_first_no() {
        let mut prompts = TestBackend::new()
            .with_answers("Add one?", ["", "y", "n"])
            .with_answers("Enter name", ["a", "b"]);

        let items = collect_repeated(&mut prompts, "Add one?", name).unwrap();

        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(prompts.times_asked("Add one?"), 3);
        assert_eq!(prompts.times_asked("Enter name"), 2);
    }

    #[test]
    fn declining_first_round_yields_empty_list() {
        let mut prompts = TestBackend::new().with_no("Add one?");
        let items = collect_repeated(&mut prompts, "Add one?", name).unwrap();

        assert!(items.is_empty());
        assert!(!prompts.was_asked("Enter name"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut prompts = LineBackend::new("y\nonly\n".as_bytes(), Vec::new());
        let items = collect_repeated(&mut prompts, "Add one?", name).unwrap();

        assert_eq!(items, vec!["only"]);
    }
}
