//! Operating-system thread identifiers.
//!
//! Log lines render the kernel's thread id where one is available (Linux,
//! macOS), which makes them easy to correlate with `top -H`, `gdb` and
//! friends. Other targets fall back to a process-local monotonic id so the
//! line format stays identical everywhere.

/// Returns the identifier of the calling thread as rendered in log lines.
///
/// The value is stable for the life of the thread.
#[cfg(target_os = "linux")]
pub fn current() -> u64 {
    // SAFETY: gettid has no preconditions and cannot fail.
    (unsafe { libc::gettid() }) as u64
}

/// Returns the identifier of the calling thread as rendered in log lines.
///
/// The value is stable for the life of the thread.
#[cfg(target_os = "macos")]
pub fn current() -> u64 {
    let mut tid: u64 = 0;
    // SAFETY: pthread_self is always valid and tid is a valid out-pointer
    // for the duration of the call.
    unsafe {
        libc::pthread_threadid_np(libc::pthread_self(), &mut tid);
    }
    tid
}

/// Returns the identifier of the calling thread as rendered in log lines.
///
/// The value is stable for the life of the thread.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn current() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);

    thread_local! {
        static ID: u64 = NEXT.fetch_add(1, Ordering::Relaxed);
    }

    ID.with(|id| *id)
}
