// kommit - Conventional commits from a declarative configuration.
// Copyright (C) 2026 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Line-oriented consoles.

use std::{
    fmt,
    io::{self, BufRead, IsTerminal as _, StdinLock, Stderr, Write},
};

use colored::Colorize as _;
use inquire::{InquireError, Text};
use thiserror::Error;

/// A line-oriented console.
pub trait Console: fmt::Debug {
    /// Shows some text to the user.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Asks a question and reads one line of input.
    ///
    /// Returns `None` at the end of input. The line terminator is not part of
    /// the answer.
    fn ask(&mut self, question: &str) -> Result<Option<String>, ConsoleError>;
}

/// Errors that can occur when interacting with the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// An I/O error.
    #[error("Failed to interact with the console")]
    Io(#[from] io::Error),
    /// The user has cancelled the prompt.
    #[error("The prompt has been cancelled")]
    Cancelled,
    /// The user has interrupted the prompt.
    #[error("The prompt has been interrupted")]
    Interrupted,
    /// Another error from the terminal prompt.
    #[error("Failed to prompt in the terminal")]
    Terminal(InquireError),
}

/// A console over any reader and writer.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    /// Where the answers are read from.
    reader: R,
    /// Where the text and questions are written.
    writer: W,
}

/// A console using a terminal prompt for each question.
#[derive(Debug, Default)]
pub struct InquireConsole;

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Builds a console over a reader and a writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdConsole<StdinLock<'static>, Stderr> {
    /// Builds a console reading from stdin and writing to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead + fmt::Debug, W: Write + fmt::Debug> Console
    for StdConsole<R, W>
{
    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, ConsoleError> {
        if !question.is_empty() {
            write!(self.writer, "{question} ")?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            return Ok(None);
        }

        let answer = line
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(&line);

        Ok(Some(answer.to_owned()))
    }
}

impl Console for InquireConsole {
    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        match text.strip_suffix(':') {
            Some(header) if !text.contains('\n') => {
                eprintln!("{}", format!("{header}:").bold());
            }
            _ => eprintln!("{text}"),
        }

        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, ConsoleError> {
        match Text::new(question).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled) => {
                Err(ConsoleError::Cancelled)
            }
            Err(InquireError::OperationInterrupted) => {
                Err(ConsoleError::Interrupted)
            }
            Err(InquireError::IO(error)) => Err(ConsoleError::Io(error)),
            Err(error) => Err(ConsoleError::Terminal(error)),
        }
    }
}

/// Returns the console to use for the current process.
///
/// An interactive terminal gets a terminal prompt. Piped input gets a plain
/// line console.
pub fn console() -> Box<dyn Console> {
    if io::stdin().is_terminal() {
        tracing::debug!("using the terminal console");
        Box::new(InquireConsole)
    } else {
        tracing::debug!("using the line console");
        Box::new(StdConsole::stdio())
    }
}
