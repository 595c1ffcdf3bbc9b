//! The logger service object and its line emitter.
//!
//! A [`Logger`] bundles every piece of process-wide state: the severity
//! gate, the title, the round-robin color counter, and the output sink with
//! the lock that serializes writes to it. The lazily created global instance
//! behind [`Logger::global`] backs the `log` facade and the [`trace_call!`]
//! macro; tests construct private instances over an in-memory sink.
//!
//! Logging is fire and forget: write errors on the sink are swallowed so
//! instrumentation can never alter the control flow of the program it
//! observes.
//!
//! [`trace_call!`]: crate::trace_call

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::Local;
use log::SetLoggerError;

use crate::color::{self, RESET, ThreadColor};
use crate::depth;
use crate::level::Level;
use crate::scope::CallScope;
use crate::thread_id;

/// Tag rendered on call-trace entry and exit lines.
pub(crate) const CALL_TAG: &str = "CALL";

static NEXT_LOGGER_ID: AtomicUsize = AtomicUsize::new(0);
static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// A thread-aware console logger.
///
/// Each emitted line is written and flushed while the output lock is held,
/// so lines from concurrent threads never interleave. The portion after the
/// level tag is wrapped in the calling thread's ANSI color when the logger
/// writes to a terminal-like sink.
pub struct Logger {
    /// Distinguishes this logger's color assignments in thread-local caches.
    id: usize,
    /// Severity gate; stores the maximum verbosity to show.
    level: AtomicU8,
    /// Tag prepended to every line, e.g. the application name.
    title: Mutex<String>,
    /// Next palette index to hand out to a first-time thread.
    next_color: AtomicUsize,
    /// Output sink and the lock that makes each line atomic.
    output: Mutex<Box<dyn Write + Send>>,
    /// Whether to bracket the thread portion in ANSI color escapes.
    colored: bool,
}

impl Logger {
    /// Creates a logger that writes colored lines to standard error.
    pub fn new() -> Logger {
        Logger::build(Box::new(io::stderr()), true)
    }

    /// Creates a logger over an arbitrary sink, with colors disabled.
    ///
    /// Intended for capturing output in tests or redirecting it to a file;
    /// use [`Logger::colored`] to re-enable the escapes.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Logger {
        Logger::build(sink, false)
    }

    /// Enables or disables ANSI color escapes on emitted lines.
    pub fn colored(mut self, enabled: bool) -> Logger {
        self.colored = enabled;
        self
    }

    fn build(sink: Box<dyn Write + Send>, colored: bool) -> Logger {
        Logger {
            id: NEXT_LOGGER_ID.fetch_add(1, Ordering::Relaxed),
            level: AtomicU8::new(Level::Trace as u8),
            title: Mutex::new(String::new()),
            next_color: AtomicUsize::new(0),
            output: Mutex::new(sink),
            colored,
        }
    }

    /// The process-wide logger used by the `log` facade and the macros.
    ///
    /// Created on first use, writing to standard error with colors on. It is
    /// never torn down; it holds no resources beyond the stderr handle.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Sets the severity gate. Takes effect for all subsequent log calls
    /// from any thread.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Current severity gate.
    pub fn level(&self) -> Level {
        match self.level.load(Ordering::Relaxed) {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.level.load(Ordering::Relaxed) >= level as u8
    }

    /// Replaces the title shown on every line. Last writer wins.
    pub fn set_title(&self, title: impl Into<String>) {
        let mut current = self.title.lock().unwrap_or_else(PoisonError::into_inner);
        *current = title.into();
    }

    /// Current title.
    pub fn title(&self) -> String {
        self.title
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The color assigned to the calling thread, assigning one on first use.
    ///
    /// Stable for the life of the thread; wraps around the ten-entry palette
    /// once more threads have logged than the palette holds.
    pub fn thread_color(&self) -> ThreadColor {
        color::for_current_thread(self.id, &self.next_color)
    }

    /// Emits a leveled message, subject to the severity gate.
    ///
    /// `file` and `line` name the call site; only the file's basename is
    /// rendered. The `log` facade macros and re-exported `error!`-family
    /// route here with the call site captured automatically.
    pub fn message(&self, level: Level, args: fmt::Arguments<'_>, file: &str, line: u32) {
        if !self.enabled(level) {
            return;
        }
        self.emit(
            level.tag(),
            depth::current(),
            format_args!("  \"{args}\""),
            Some((file, line)),
        );
    }

    /// Starts a traced call, emitting the `>>name(args)` entry line and
    /// returning the guard whose drop emits the matching `<<name()` line.
    ///
    /// Prefer the [`trace_call!`] macro, which captures the enclosing
    /// function's name and the call site for you.
    ///
    /// [`trace_call!`]: crate::trace_call
    pub fn trace_call<'a>(
        &'a self,
        name: &'static str,
        args: fmt::Arguments<'_>,
        file: &str,
        line: u32,
    ) -> CallScope<'a> {
        CallScope::enter(self, name, args, file, line)
    }

    /// Composes and writes one line while holding the output lock.
    ///
    /// Layout: `HH:MM:SS:mmm [title][tag]: ` uncolored, then the thread
    /// color escape, `TID:` plus two spaces of indentation per depth level,
    /// the framed body, ` ----file:line` when a location is given, the color
    /// reset, and the newline. The sink is flushed before the lock is
    /// released so every line is durable before the call returns.
    pub(crate) fn emit(
        &self,
        tag: &str,
        depth: usize,
        body: fmt::Arguments<'_>,
        location: Option<(&str, u32)>,
    ) {
        let stamp = Local::now().format("%H:%M:%S:%3f");
        let title = self.title();
        let thread_color = self.thread_color();
        let tid = thread_id::current();

        let mut out = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = write!(out, "{stamp} [{title}][{tag}]: ");
        if self.colored {
            let _ = out.write_all(thread_color.escape().as_bytes());
        }
        let _ = write!(out, "{tid}:{:width$}", "", width = depth * 2);
        let _ = out.write_fmt(body);
        if let Some((file, line)) = location {
            let _ = write!(out, " ----{}:{line}", basename(file));
        }
        if self.colored {
            let _ = out.write_all(RESET.as_bytes());
        }
        let _ = out.write_all(b"\n");
        let _ = out.flush();
    }
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        self.message(
            Level::from(record.level()),
            *record.args(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        );
    }

    fn flush(&self) {
        let mut out = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.flush();
    }
}

/// Installs the global logger as the `log` facade backend.
///
/// Fails if another logger was installed first. The facade's max level is
/// set to `Trace`; the severity gate does the dynamic filtering.
pub fn try_init() -> Result<(), SetLoggerError> {
    log::set_logger(Logger::global()).map(|()| log::set_max_level(log::LevelFilter::Trace))
}

/// Installs the global logger, doing nothing if one is already installed.
pub fn init() {
    let _ = try_init();
}

/// Sets the global logger's severity gate.
pub fn set_level(level: Level) {
    Logger::global().set_level(level);
}

/// Sets the global logger's title.
pub fn set_title(title: impl Into<String>) {
    Logger::global().set_title(title);
}

/// Strips directories from a source path, leaving the file name.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
