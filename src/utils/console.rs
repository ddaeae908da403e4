use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use crate::errors::AppError;

/// Line-oriented output sink for query results and phase banners.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on standard output. Colour is dropped when stdout is not a terminal.
    pub fn stdout(color: bool) -> Self {
        let out = io::stdout();
        let color = color && out.is_terminal();
        Console { out, color }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Console { out, color }
    }

    pub fn line(&mut self, value: impl Display) -> Result<(), AppError> {
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    pub fn banner(&mut self, text: &str) -> Result<(), AppError> {
        if self.color {
            writeln!(self.out, "{}", text.blue())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
