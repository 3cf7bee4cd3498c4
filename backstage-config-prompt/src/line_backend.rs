use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, warn};

use crate::prompt::{
    bool_prompt, list_prompt, resolve_bool, resolve_list, resolve_text, text_prompt,
    write_note, write_section,
};
use crate::{PromptError, Prompter};

/// Plain line-oriented prompts.
///
/// Each question writes its prompt to `output`, flushes, and reads one line
/// from `input`. Bytes that are not valid UTF-8 are replaced, not rejected.
/// End of input is answered with an empty line, which selects the default,
/// and marks the backend exhausted. A failed read is also answered with an
/// empty line; only a second failure in a row marks the backend exhausted.
#[derive(Debug)]
pub struct LineBackend<R, W> {
    input: R,
    output: W,
    exhausted: bool,
    failed_reads: u32,
}

impl LineBackend<StdinLock<'static>, Stdout> {
    /// Prompts on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineBackend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            exhausted: false,
            failed_reads: 0,
        }
    }

    /// Consume the backend, returning the prompt stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        Ok(self.read_answer())
    }

    fn read_answer(&mut self) -> String {
        let mut bytes = Vec::new();
        match self.input.read_until(b'\n', &mut bytes) {
            Ok(0) => {
                if !self.exhausted {
                    debug!("end of input, remaining questions take their defaults");
                }
                self.exhausted = true;
                String::new()
            }
            Ok(_) => {
                self.failed_reads = 0;
                if bytes.ends_with(b"\n") {
                    bytes.pop();
                    if bytes.ends_with(b"\r") {
                        bytes.pop();
                    }
                }
                String::from_utf8_lossy(&bytes).into_owned()
            }
            Err(err) => {
                self.failed_reads += 1;
                warn!(
                    error = %err,
                    failed_reads = self.failed_reads,
                    "failed to read answer, using the default"
                );
                if self.failed_reads > 1 {
                    self.exhausted = true;
                }
                String::new()
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LineBackend<R, W> {
    fn ask_text(&mut self, label: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.ask(&text_prompt(label, default))?;
        Ok(resolve_text(&answer, default))
    }

    fn ask_bool(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.ask(&bool_prompt(label, default))?;
        Ok(resolve_bool(&answer, default))
    }

    fn ask_list(&mut self, label: &str, default: &[&str]) -> Result<Vec<String>, PromptError> {
        let answer = self.ask(&list_prompt(label, default))?;
        Ok(resolve_list(&answer, default))
    }

    fn section(&mut self, title: &str) -> Result<(), PromptError> {
        Ok(write_section(&mut self.output, title)?)
    }

    fn note(&mut self, message: &str) -> Result<(), PromptError> {
        Ok(write_note(&mut self.output, message)?)
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use super::*;

    fn backend(input: &str) -> LineBackend<&[u8], Vec<u8>> {
        LineBackend::new(input.as_bytes(), Vec::new())
    }

    fn transcript(backend: LineBackend<&[u8], Vec<u8>>) -> String {
        String::from_utf8(backend.into_output()).unwrap()
    }

    #[test]
    fn text_answer_or_default() {
        let mut prompts = backend("9000\n\n");

        assert_eq!(prompts.ask_text("Enter backend port", "7007").unwrap(), "9000");
        assert_eq!(prompts.ask_text("Enter backend port", "7007").unwrap(), "7007");
        assert_eq!(
            transcript(prompts),
            "Enter backend port [7007]: Enter backend port [7007]: "
        );
    }

    #[test]
    fn only_the_line_terminator_is_removed() {
        let mut prompts = backend(" padded \r\n");
        assert_eq!(prompts.ask_text("Name", "").unwrap(), " padded ");
    }

    #[test]
    fn bool_answers() {
        let mut prompts = backend("Y\nnope\n\n");

        assert!(prompts.ask_bool("Enable?", false).unwrap());
        assert!(!prompts.ask_bool("Enable?", true).unwrap());
        assert!(prompts.ask_bool("Enable?", true).unwrap());
        assert_eq!(
            transcript(prompts),
            "Enable? (y/n) [n]: Enable? (y/n) [y]: Enable? (y/n) [y]: "
        );
    }

    #[test]
    fn list_answers() {
        let mut prompts = backend("a,,b\n\n");

        assert_eq!(prompts.ask_list("Targets", &[]).unwrap(), vec!["a", "", "b"]);
        assert_eq!(prompts.ask_list("Targets", &["x", "y"]).unwrap(), vec!["x", "y"]);
        assert_eq!(
            transcript(prompts),
            "Targets (comma-separated): Targets [x,y]: "
        );
    }

    #[test]
    fn end_of_input_selects_defaults_and_exhausts() {
        let mut prompts = backend("last");

        assert!(!prompts.is_exhausted());
        assert_eq!(prompts.ask_text("First", "a").unwrap(), "last");
        assert!(!prompts.is_exhausted());
        assert_eq!(prompts.ask_text("Second", "b").unwrap(), "b");
        assert!(prompts.ask_bool("Third?", true).unwrap());
        assert!(prompts.is_exhausted());
    }

    #[test]
    fn section_banner_is_underlined() {
        let mut prompts = backend("");
        prompts.section("Devpod Configurations").unwrap();
        prompts.note("Configuring admin users:").unwrap();

        assert_eq!(
            transcript(prompts),
            "\nDevpod Configurations\n=====================\n\nConfiguring admin users:\n"
        );
    }

    #[test]
    fn invalid_utf8_line_is_kept_and_reading_continues() {
        let mut prompts = LineBackend::new(&b"Caf\xe9\ny\nprod\n"[..], Vec::new());

        assert_eq!(prompts.ask_text("Enter application title", "x").unwrap(), "Caf\u{fffd}");
        assert!(!prompts.is_exhausted());
        assert!(prompts.ask_bool("Add a Kubernetes cluster?", true).unwrap());
        assert!(!prompts.is_exhausted());
        assert_eq!(prompts.ask_text("Enter cluster name", "").unwrap(), "prod");
    }

    /// Fails the first `failures` reads, then serves `data`.
    struct FlakyReader {
        failures: usize,
        data: &'static [u8],
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(io::Error::other("device hiccup"));
            }
            self.data.read(buf)
        }
    }

    fn flaky(failures: usize, data: &'static [u8]) -> LineBackend<BufReader<FlakyReader>, Vec<u8>> {
        LineBackend::new(BufReader::new(FlakyReader { failures, data }), Vec::new())
    }

    #[test]
    fn single_read_failure_is_a_default_not_the_end() {
        let mut prompts = flaky(1, b"y\nn\n");

        assert!(!prompts.ask_bool("Configure proxy endpoints?", false).unwrap());
        assert!(!prompts.is_exhausted());
        assert!(prompts.ask_bool("Add proxy endpoint?", true).unwrap());
        assert!(!prompts.ask_bool("Add proxy endpoint?", true).unwrap());
        assert!(!prompts.is_exhausted());
    }

    #[test]
    fn repeated_read_failures_exhaust() {
        let mut prompts = flaky(2, b"y\n");

        assert!(prompts.ask_bool("Add proxy endpoint?", true).unwrap());
        assert!(!prompts.is_exhausted());
        assert!(prompts.ask_bool("Add proxy endpoint?", true).unwrap());
        assert!(prompts.is_exhausted());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prompt_write_failure_is_fatal() {
        let mut prompts = LineBackend::new("y\n".as_bytes(), BrokenPipe);
        let err = prompts.ask_bool("Enable?", false).unwrap_err();

        assert!(matches!(err, PromptError::Io(_)));
    }
}
