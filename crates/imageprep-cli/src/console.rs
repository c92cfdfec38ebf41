// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line-oriented console I/O. Generic over reader and writer so the menu and
// handlers can be driven from in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use imageprep_core::error::{PrepError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print a horizontal rule of `width` copies of `ch`.
    pub fn rule(&mut self, ch: char, width: usize) -> Result<()> {
        let line: String = std::iter::repeat_n(ch, width).collect();
        self.say(&line)
    }

    /// Show `text` without a newline and read the answer, trimmed.
    ///
    /// End of input yields `PrepError::InputClosed`.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PrepError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a number; an empty answer yields `default`.
    ///
    /// Anything that does not parse as `T` is an `InvalidNumber` error.
    pub fn prompt_number<T>(&mut self, text: &str, field: &'static str, default: T) -> Result<T>
    where
        T: FromStr + std::fmt::Display,
    {
        let answer = self.prompt(&format!("{text} [{default}]: "))?;
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse()
            .map_err(|_| PrepError::InvalidNumber { field, input: answer })
    }
}

impl<R, W> Console<R, W> {
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
pub(crate) fn scripted(input: &str) -> Console<std::io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[cfg(test)]
pub(crate) fn transcript<R>(console: &Console<R, Vec<u8>>) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
