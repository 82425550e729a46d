//! Log level definitions for CLI diagnostics
//!
//! Levels are cumulative: Debug includes Verbose, Trace includes Debug.

use std::fmt;

/// Verbosity level for CLI diagnostics
///
/// Levels are ordered: Normal < Verbose < Debug < Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Warnings and errors only (default)
    #[default]
    Normal = 0,
    /// Configuration loads and saves, authentication steps
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
    /// Request and response bodies, redacted
    Trace = 3,
}

impl LogLevel {
    /// Create LogLevel from CLI flags
    ///
    /// Order of precedence: trace > debug > verbose > normal
    pub fn from_flags(verbose: bool, debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Combine CLI flags with `CLOCO_VERBOSE`, `CLOCO_DEBUG` and `CLOCO_TRACE`
    pub fn from_flags_and_env(verbose: bool, debug: bool, trace: bool) -> Self {
        Self::from_flags(
            verbose || env_flag("CLOCO_VERBOSE"),
            debug || env_flag("CLOCO_DEBUG"),
            trace || env_flag("CLOCO_TRACE"),
        )
    }

    /// `tracing` filter directive for this level
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Get the display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
