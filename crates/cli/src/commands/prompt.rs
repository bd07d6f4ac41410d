// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented prompting for the interactive modes

use std::io::{self, BufRead, Write};

/// Parse a strictly positive count; anything else is rejected
pub fn parse_positive(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// True when the user asked to leave, in any letter case
pub fn is_exit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("exit")
}

/// Asks questions on one stream and reads answers from another
///
/// Reads block the calling thread. Callers only prompt while no group is in
/// flight.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a message without waiting for an answer
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Show a prompt and read one line; `None` once input is closed
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a positive count, re-prompting with `retry` until one is given
    pub fn ask_positive(&mut self, prompt: &str, retry: &str) -> io::Result<Option<usize>> {
        let mut answer = self.ask(prompt)?;
        loop {
            match answer.as_deref().map(parse_positive) {
                None => return Ok(None),
                Some(Some(n)) => return Ok(Some(n)),
                Some(None) => answer = self.ask(retry)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
