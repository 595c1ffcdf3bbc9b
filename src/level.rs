//! Severity levels and their line tags.
//!
//! The gate stores the *maximum verbosity to show*: a message at level `L`
//! is emitted iff the current gate value is at least `L`, so `Error` (0) is
//! always shown and `Trace` (4) only at full verbosity.

/// Severity of a log line, ordered from least to most verbose.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Unexpected failures.
    Error = 0,
    /// Suspicious but recoverable conditions.
    Warn = 1,
    /// Normal progress reporting; also gates call tracing.
    Info = 2,
    /// Diagnostic detail.
    Debug = 3,
    /// Everything, including high-volume trace chatter.
    Trace = 4,
}

impl Level {
    /// Four-character tag rendered inside the `[..]` brackets of a line.
    ///
    /// The tags are fixed-width so the message column lines up across
    /// levels, which is why `ERR` and `LOG` carry a leading space.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Error => " ERR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DBUG",
            Level::Trace => " LOG",
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}
