//! Thread-aware console logger with per-thread colors and call tracing.
//!
//! When several threads log at once, plain stderr output turns into soup.
//! This crate keeps it readable: every line is emitted atomically under one
//! output lock, each thread's output is tinted with a stable ANSI color
//! assigned on first use, and traced function calls render as indented
//! `>>entry` / `<<exit` pairs that follow the per-thread nesting depth.
//!
//! The crate is a backend for the [`log`] facade: install it with [`init`]
//! and the standard `error!`..`trace!` macros (re-exported here) produce
//! lines like
//!
//! ```text
//! 14:03:27:481 [Test][INFO]: 71031:    "cache warmed" ----server.rs:88
//! ```
//!
//! Call tracing comes from the [`trace_call!`] macro, placed at the top of a
//! function body:
//!
//! ```no_run
//! fn rebuild_index(shard: usize) {
//!     tracelog::trace_call!("shard={shard}");
//!     // ... early returns and panics still log the exit line ...
//! }
//! ```
//!
//! Severity is gated process-wide through [`set_level`]; [`set_title`] names
//! the application in every line. Logging is best-effort by design: sink
//! write errors are swallowed and nothing here can panic the instrumented
//! program.

pub mod color;
pub mod level;
pub mod logger;
pub mod scope;

mod depth;
mod macros;
pub mod thread_id;

#[cfg(test)]
mod test_support;

pub use color::ThreadColor;
pub use level::Level;
pub use logger::{Logger, init, set_level, set_title, try_init};
pub use scope::CallScope;

// The facade macros work against the global logger once `init` has run.
pub use log::{debug, error, info, trace, warn};
