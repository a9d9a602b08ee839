//! Game logger with verbosity levels and optional in-memory capture.
//!
//! The engine reports what it does (deals, attacks, reveals, status changes)
//! through a `GameLogger`. Output goes to stdout, to a capture buffer, or
//! both. Tests switch to `OutputMode::Memory` and inspect `logs()`.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// How much the logger prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// No output
    Silent = 0,
    /// Only round outcomes
    Minimal = 1,
    /// Deals, attacks and outcomes (default)
    #[default]
    Normal = 2,
    /// Every card movement and reveal
    Verbose = 3,
}

impl std::str::FromStr for VerbosityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityLevel::Silent),
            "minimal" | "1" => Ok(VerbosityLevel::Minimal),
            "normal" | "2" => Ok(VerbosityLevel::Normal),
            "verbose" | "3" => Ok(VerbosityLevel::Verbose),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

/// Output destination for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Print to stdout (default)
    #[default]
    Stdout,
    /// Capture into the in-memory buffer only
    Memory,
    /// Print and capture
    Both,
}

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    /// Short tag such as "deal", "combat", "status"
    pub category: &'static str,
    pub message: String,
}

/// Verbosity-filtered logger.
///
/// Logging takes `&self` so the engine can log while holding borrows of its
/// own state; the capture buffer sits behind a `RefCell`.
#[derive(Debug, Clone, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a logger with default verbosity (Normal) printing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger with the given verbosity.
    #[must_use]
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    /// A logger that never prints or captures anything.
    #[must_use]
    pub fn silent() -> Self {
        Self::with_verbosity(VerbosityLevel::Silent)
    }

    /// A logger that captures every message into memory without printing.
    #[must_use]
    pub fn capturing() -> Self {
        Self {
            verbosity: VerbosityLevel::Verbose,
            output_mode: OutputMode::Memory,
            buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Borrow the captured entries.
    pub fn logs(&self) -> Ref<'_, Vec<LogEntry>> {
        self.buffer.borrow()
    }

    /// Drop all captured entries.
    pub fn clear_logs(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Log at Minimal level.
    pub fn minimal(&self, category: &'static str, message: impl AsRef<str>) {
        self.log(VerbosityLevel::Minimal, category, message.as_ref());
    }

    /// Log at Normal level.
    pub fn normal(&self, category: &'static str, message: impl AsRef<str>) {
        self.log(VerbosityLevel::Normal, category, message.as_ref());
    }

    /// Log at Verbose level.
    pub fn verbose(&self, category: &'static str, message: impl AsRef<str>) {
        self.log(VerbosityLevel::Verbose, category, message.as_ref());
    }

    fn log(&self, level: VerbosityLevel, category: &'static str, message: &str) {
        if level > self.verbosity {
            return;
        }

        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.buffer.borrow_mut().push(LogEntry {
                level,
                category,
                message: message.to_string(),
            });
        }

        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            if level == VerbosityLevel::Minimal {
                println!("{message}");
            } else {
                println!("  [{category}] {message}");
            }
        }
    }
}
