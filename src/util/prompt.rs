//! Interactive operator prompts over explicit input/output handles.
//!
//! The binary wires these to locked stdin/stdout; tests feed a byte slice and
//! capture a `Vec<u8>`. End of input is never treated as an answer, so piped
//! input that runs dry fails cleanly instead of re-prompting forever.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::util::diagnostic::ScanError;

/// Line-oriented prompt driver.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `question` and read one trimmed line.
    ///
    /// `what` names the expected answer in the error raised on end of input.
    pub fn ask_line(&mut self, question: &str, what: &str) -> Result<String> {
        write!(self.output, "{}", question).context("failed to write prompt")?;
        self.output.flush().context("failed to write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read operator input")?;
        if read == 0 {
            // Keep the next message off the prompt line.
            writeln!(self.output).context("failed to write prompt")?;
            return Err(ScanError::InputClosed {
                what: what.to_string(),
            }
            .into());
        }

        Ok(line.trim().to_string())
    }

    /// Print a numbered list of `candidates` and read a 1-based selection.
    ///
    /// Re-prompts on non-numeric or out-of-range input. Returns the 0-based
    /// index of the chosen candidate.
    pub fn choose(&mut self, candidates: &[String], what: &str) -> Result<usize> {
        for (i, name) in candidates.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, name).context("failed to write prompt")?;
        }

        let question = format!("Select {} [1-{}]: ", what, candidates.len());
        loop {
            let answer = self.ask_line(&question, what)?;
            match parse_selection(&answer, candidates.len()) {
                Some(index) => return Ok(index),
                None => {
                    tracing::debug!("rejected selection {:?}", answer);
                    writeln!(
                        self.output,
                        "Please enter a number between 1 and {}",
                        candidates.len()
                    )
                    .context("failed to write prompt")?;
                }
            }
        }
    }

    /// Write a plain line to the output handle.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("failed to write output")
    }

    /// Give back the handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Parse a 1-based selection in `1..=count` into a 0-based index.
pub fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    if (1..=count).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["app1.war".to_string(), "APP2.WAR".to_string()]
    }

    fn output_of<R: BufRead>(p: Prompter<R, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 2), Some(0));
        assert_eq!(parse_selection(" 2 ", 2), Some(1));
        assert_eq!(parse_selection("0", 2), None);
        assert_eq!(parse_selection("3", 2), None);
        assert_eq!(parse_selection("-1", 2), None);
        assert_eq!(parse_selection("two", 2), None);
        assert_eq!(parse_selection("", 2), None);
    }

    #[test]
    fn test_ask_line_trims() {
        let mut p = Prompter::new(&b"  /opt/jboss  \n"[..], Vec::new());
        let answer = p.ask_line("Server home: ", "the server home").unwrap();
        assert_eq!(answer, "/opt/jboss");
        assert_eq!(output_of(p), "Server home: ");
    }

    #[test]
    fn test_ask_line_eof_is_input_closed() {
        let mut p = Prompter::new(&b""[..], Vec::new());
        let err = p.ask_line("Server home: ", "the server home").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::InputClosed { .. })
        ));
    }

    /// Accepts everything except a bare newline.
    struct NewlineRefused(Vec<u8>);

    impl Write for NewlineRefused {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf == b"\n" {
                return Err(std::io::Error::other("stdout closed"));
            }
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ask_line_eof_propagates_output_failure() {
        let mut p = Prompter::new(&b""[..], NewlineRefused(Vec::new()));
        let err = p.ask_line("Server home: ", "the server home").unwrap_err();
        assert!(err.downcast_ref::<ScanError>().is_none());
        assert_eq!(err.to_string(), "failed to write prompt");
    }

    #[test]
    fn test_choose_reprompts_until_valid() {
        let mut p = Prompter::new(&b"0\nabc\n3\n2\n"[..], Vec::new());
        let index = p.choose(&candidates(), "a deployable").unwrap();
        assert_eq!(index, 1);

        let out = output_of(p);
        assert!(out.contains("  [1] app1.war\n"));
        assert!(out.contains("  [2] APP2.WAR\n"));
        assert_eq!(out.matches("Select a deployable [1-2]: ").count(), 4);
        assert_eq!(out.matches("Please enter a number between 1 and 2").count(), 3);
    }

    #[test]
    fn test_choose_eof_after_invalid_input() {
        let mut p = Prompter::new(&b"9\n"[..], Vec::new());
        let err = p.choose(&candidates(), "a deployable").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::InputClosed { .. })
        ));
    }
}
