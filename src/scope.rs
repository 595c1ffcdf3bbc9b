//! Scope guard for function entry/exit tracing.

use std::fmt;
use std::marker::PhantomData;

use crate::depth;
use crate::level::Level;
use crate::logger::{CALL_TAG, Logger};

/// Guard whose lifetime brackets one traced function activation.
///
/// Construction emits the `>>name(args)` entry line; dropping the guard
/// emits the matching `<<name()` exit line, unconditionally on every path
/// out of the function, early returns and unwinding included. The severity
/// gate is consulted independently at each end, so a gate change mid-call
/// can suppress one line without affecting the other.
///
/// Entry and exit of the same activation render at the same indentation:
/// the entry line uses the depth as it was before this call nested, and the
/// drop decrements the counter before rendering. The per-thread depth is
/// adjusted in matched pairs regardless of the gate, so it always returns
/// to its pre-call value.
///
/// The guard is tied to the thread that created it and cannot be sent to
/// another.
#[must_use = "dropping the guard immediately emits the exit line"]
pub struct CallScope<'a> {
    logger: &'a Logger,
    name: &'static str,
    // Depth and color are thread-local; keep the guard off other threads.
    _single_thread: PhantomData<*const ()>,
}

impl<'a> CallScope<'a> {
    pub(crate) fn enter(
        logger: &'a Logger,
        name: &'static str,
        args: fmt::Arguments<'_>,
        file: &str,
        line: u32,
    ) -> CallScope<'a> {
        let before = depth::increment();
        if logger.enabled(Level::Info) {
            logger.emit(
                CALL_TAG,
                before,
                format_args!(">>{name}({args})"),
                Some((file, line)),
            );
        }
        CallScope {
            logger,
            name,
            _single_thread: PhantomData,
        }
    }

    /// The function name captured when the scope was entered.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for CallScope<'_> {
    fn drop(&mut self) {
        let after = depth::decrement();
        if self.logger.enabled(Level::Info) {
            self.logger
                .emit(CALL_TAG, after, format_args!("<<{}()", self.name), None);
        }
    }
}
