//! Line-oriented terminal access.
//!
//! The menus only ever talk to a [`Terminal`], so they can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests.

use crate::Error;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

#[cfg_attr(test, mockall::automock)]
pub trait Terminal {
    /// Shows `message` without a line break and reads one line of input.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - the line without its trailing newline
    /// * `Ok(None)` - input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>, Error>;
    /// Writes `text` followed by a line break.
    fn print(&mut self, text: &str) -> Result<(), Error>;
}

/// [`Terminal`] over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
