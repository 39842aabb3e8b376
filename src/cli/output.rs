//! Leveled, colored console output.
//!
//! Formatting is a pure function of level, message and sink ([`write_line`]);
//! [`OutputManager`] only decides whether a line is shown and on which stream.

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress information
    Info,
    /// Recoverable problem, e.g. a skipped platform
    Warn,
    /// Fatal problem
    Error,
    /// Completed step
    Success,
}

impl Level {
    /// Label printed before the message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
        }
    }

    /// Color spec for the whole line.
    pub fn color_spec(self) -> ColorSpec {
        let color = match self {
            Self::Info | Self::Success => Color::Green,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_intense(true);
        spec
    }
}

/// Writes `LEVEL: message` followed by a newline, colored when `out` supports it.
pub fn write_line<W: WriteColor + ?Sized>(out: &mut W, level: Level, message: &str) -> io::Result<()> {
    out.set_color(&level.color_spec())?;
    write!(out, "{}: {message}", level.label())?;
    out.reset()?;
    writeln!(out)
}

/// Picks the color mode for one stream.
///
/// `Auto` still honors `NO_COLOR` and `TERM=dumb`; redirected streams never
/// get escape codes.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes status lines to the terminal.
///
/// Errors go to stderr, everything else to stdout. Each stream decides its
/// own color mode.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout_color: ColorChoice,
    stderr_color: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` hides info and verbose lines; warnings, errors and success
    /// lines are always shown.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout_color: color_choice(io::stdout().is_terminal()),
            stderr_color: color_choice(io::stderr().is_terminal()),
        }
    }

    /// Progress line.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.emit(Level::Info, message);
        }
    }

    /// Per-item detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            self.emit(Level::Info, message);
        }
    }

    /// Completed step.
    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    /// Recoverable problem.
    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Fatal problem.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn emit(&self, level: Level, message: &str) {
        let stream = if level == Level::Error {
            StandardStream::stderr(self.stderr_color)
        } else {
            StandardStream::stdout(self.stdout_color)
        };
        // A closed pipe must not turn a finished package into a failure.
        if let Err(e) = write_line(&mut stream.lock(), level, message) {
            log::debug!("Dropped console line: {e}");
        }
    }
}
