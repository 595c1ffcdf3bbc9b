//! Per-thread ANSI colors.
//!
//! Every thread that logs is assigned one color from a fixed ten-entry
//! palette, round-robin in first-use order. The assignment is cached in
//! thread-local storage, so the shared counter is touched exactly once per
//! thread per logger. Once more than ten threads have logged the palette
//! wraps and colors repeat.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// ANSI escape sequence that restores the terminal's default color.
pub const RESET: &str = "\x1b[0m";

/// Color assigned to a thread's portion of a log line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThreadColor {
    Green,
    Yellow,
    Pink,
    Teal,
    BoldRed,
    BoldGreen,
    BoldYellow,
    BoldBlue,
    BoldPink,
    BoldTeal,
}

/// Assignment order for first-use round-robin.
pub const PALETTE: [ThreadColor; 10] = [
    ThreadColor::Green,
    ThreadColor::Yellow,
    ThreadColor::Pink,
    ThreadColor::Teal,
    ThreadColor::BoldRed,
    ThreadColor::BoldGreen,
    ThreadColor::BoldYellow,
    ThreadColor::BoldBlue,
    ThreadColor::BoldPink,
    ThreadColor::BoldTeal,
];

impl ThreadColor {
    /// ANSI escape sequence that switches the terminal to this color.
    pub fn escape(self) -> &'static str {
        match self {
            ThreadColor::Green => "\x1b[0;32m",
            ThreadColor::Yellow => "\x1b[0;33m",
            ThreadColor::Pink => "\x1b[0;35m",
            ThreadColor::Teal => "\x1b[0;36m",
            ThreadColor::BoldRed => "\x1b[31;1m",
            ThreadColor::BoldGreen => "\x1b[32;1m",
            ThreadColor::BoldYellow => "\x1b[33;1m",
            ThreadColor::BoldBlue => "\x1b[34;1m",
            ThreadColor::BoldPink => "\x1b[35;1m",
            ThreadColor::BoldTeal => "\x1b[36;1m",
        }
    }
}

thread_local! {
    // Color assigned to this thread, tagged with the id of the logger whose
    // counter handed it out. One slot suffices: a thread talks to one logger
    // in practice, and a mismatch just re-assigns from the other counter.
    static ASSIGNED: Cell<Option<(usize, ThreadColor)>> = const { Cell::new(None) };
}

/// Returns the calling thread's color, assigning one on first use.
///
/// `logger_id` distinguishes independent loggers so each keeps its own
/// round-robin sequence; `counter` is that logger's shared next-color
/// counter.
pub(crate) fn for_current_thread(logger_id: usize, counter: &AtomicUsize) -> ThreadColor {
    ASSIGNED.with(|slot| match slot.get() {
        Some((id, color)) if id == logger_id => color,
        _ => {
            let color = PALETTE[counter.fetch_add(1, Ordering::Relaxed) % PALETTE.len()];
            slot.set(Some((logger_id, color)));
            color
        }
    })
}
