//! Per-thread call-depth counter.
//!
//! The counter only feeds indentation (two spaces per level); it never
//! influences control flow. Each thread owns its counter, so no
//! synchronization is involved.

use std::cell::Cell;

thread_local! {
    static CALL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Current nesting depth of traced calls on this thread.
pub(crate) fn current() -> usize {
    CALL_DEPTH.with(Cell::get)
}

/// Increments the depth and returns the value it had before the increment.
pub(crate) fn increment() -> usize {
    CALL_DEPTH.with(|depth| {
        let before = depth.get();
        depth.set(before + 1);
        before
    })
}

/// Decrements the depth and returns the value it has after the decrement.
///
/// Saturates at zero so an unbalanced caller cannot wrap the counter.
pub(crate) fn decrement() -> usize {
    CALL_DEPTH.with(|depth| {
        let after = depth.get().saturating_sub(1);
        depth.set(after);
        after
    })
}
