//! Leveled messages at every severity, filtered by the gate.
//!
//! Run with `cargo run --example leveled`. With the gate at `Debug`, the
//! trace line is suppressed.

use tracelog::{Level, debug, error, info, trace, warn};

fn main() {
    tracelog::init();
    tracelog::set_title("leveled");
    tracelog::set_level(Level::Debug);

    error!("this is an error message");
    warn!("this is a warning message");
    info!("this is an info message");
    debug!("this is a debug message");
    trace!("this one is gated off");
}
