//! Three worker threads each walk a 3-deep traced call chain.
//!
//! Run with `cargo run --example nested_threads`. Each thread's lines show
//! in a distinct color, indenting on entry and dedenting on exit, and no
//! line is ever split by another thread's output.

use std::thread;
use std::time::Duration;

use tracelog::{Level, info};

fn call_3() {
    tracelog::trace_call!();
    thread::sleep(Duration::from_secs(1));
    info!("this is call_3");
}

fn call_2() {
    tracelog::trace_call!();
    thread::sleep(Duration::from_secs(1));
    call_3();
}

fn call_1() {
    tracelog::trace_call!();
    thread::sleep(Duration::from_secs(1));
    call_2();
}

fn main() {
    tracelog::init();
    tracelog::set_title("Test");
    tracelog::set_level(Level::Info);

    let workers: Vec<_> = (0..3).map(|_| thread::spawn(call_1)).collect();
    for worker in workers {
        let _ = worker.join();
    }
}
