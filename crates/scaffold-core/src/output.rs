//! Marked status lines for the operator
//!
//! Every line the tool prints about its own progress carries a marker that
//! tells success, info, warning and failure apart, colored when the terminal
//! allows it.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use colored::{ColoredString, Colorize};

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
    Failure,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Failure => "failure",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "•",
            Self::Warning => "!",
            Self::Failure => "✗",
        }
    }

    fn marker(&self) -> ColoredString {
        match self {
            Self::Success => self.symbol().green(),
            Self::Info => self.symbol().cyan(),
            Self::Warning => self.symbol().yellow(),
            Self::Failure => self.symbol().red().bold(),
        }
    }

    /// Render a full marked line (without trailing newline)
    pub fn line(&self, message: impl Display) -> String {
        format!("{} {}", self.marker(), message)
    }
}

/// Writes marked status lines to an output stream.
///
/// Output is observational only. A failed write is logged and otherwise
/// ignored, it never aborts the operation being reported on.
pub struct Console<W: Write = Stdout> {
    out: W,
}

impl Console<Stdout> {
    /// Console bound to standard output
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn status(&mut self, status: Status, message: impl Display) {
        let line = status.line(message);
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::debug!(status = status.as_str(), error = %e, "status line not written");
        }
    }

    pub fn success(&mut self, message: impl Display) {
        self.status(Status::Success, message);
    }

    pub fn info(&mut self, message: impl Display) {
        self.status(Status::Info, message);
    }

    pub fn warn(&mut self, message: impl Display) {
        self.status(Status::Warning, message);
    }

    pub fn failure(&mut self, message: impl Display) {
        self.status(Status::Failure, message);
    }

    /// Write an unmarked line (headings, blank lines, hints)
    pub fn plain(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            tracing::debug!(error = %e, "line not written");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
