//! Interactive input.
//!
//! Responsibilities:
//! - Define the `Prompter` collaborator used by prompt setters and MFA.
//! - Read from the terminal, hiding input when masked.
//! - Read from any buffered reader (piped stdin, tests).
//!
//! Invariants:
//! - Labels go to stderr so stdout stays clean for the target program.
//! - End of input is an error, never an empty value.
//! - The trailing newline (and carriage return) is stripped, nothing else.

use std::io::{self, BufRead, IsTerminal, Write};

/// Asks the user for one value.
pub trait Prompter {
    fn prompt(&mut self, label: &str, masked: bool) -> io::Result<String>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, label: &str, masked: bool) -> io::Result<String> {
        if masked && io::stdin().is_terminal() {
            return dialoguer::Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()
                .map_err(|e| io::Error::other(e.to_string()));
        }

        let mut stderr = io::stderr();
        write!(stderr, "{label}: ")?;
        stderr.flush()?;
        read_value(&mut io::stdin().lock())
    }
}

/// Prompts by reading lines from `reader`, echoing labels to `output`.
pub struct ReaderPrompter<R, W> {
    reader: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(reader: R, output: W) -> Self {
        Self { reader, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn prompt(&mut self, label: &str, _masked: bool) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        read_value(&mut self.reader)
    }
}

fn read_value(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input before a value was entered",
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
