//! Console I/O for the interpreter
//!
//! `스크럼` writes one line and `뭐먹` reads one line. Both go through the
//! [`Console`] trait so tests can script input and inspect output with a
//! [`MockTerminal`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Write `text` followed by a newline.
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its trailing newline, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Process stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// In-memory console: scripted input lines, recorded output lines
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    input: VecDeque<String>,
    pub lines: Vec<String>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal::default()
    }

    /// Terminal whose reads return `input` one line at a time
    pub fn with_input<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTerminal {
            input: input.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
        }
    }

    /// Get all printed lines
    pub fn get_output(&self) -> &[String] {
        &self.lines
    }
}

impl Console for MockTerminal {
    fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn print_line(&mut self, text: &str) -> io::Result<()> {
        (**self).print_line(text)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
