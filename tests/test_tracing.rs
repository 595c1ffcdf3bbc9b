//! Call tracing under concurrency: line atomicity, indentation symmetry,
//! color assignment, and thread-id round trips.

mod common;

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use common::Capture;
use regex::Regex;
use tracelog::color::PALETTE;
use tracelog::{Level, Logger};

fn capture_logger() -> (Arc<Logger>, Capture) {
    let sink = Capture::default();
    let logger = Arc::new(Logger::with_sink(Box::new(sink.clone())));
    (logger, sink)
}

fn call_3(logger: &Logger) {
    let _scope = logger.trace_call("call_3", format_args!(""), file!(), line!());
    thread::sleep(Duration::from_millis(50));
}

fn call_2(logger: &Logger) {
    let _scope = logger.trace_call("call_2", format_args!(""), file!(), line!());
    thread::sleep(Duration::from_millis(50));
    call_3(logger);
}

fn call_1(logger: &Logger) {
    let _scope = logger.trace_call("call_1", format_args!(""), file!(), line!());
    thread::sleep(Duration::from_millis(50));
    call_2(logger);
}

/// Three threads each run a 3-deep traced chain with sleeps at every level.
/// Expect 18 whole lines, and per thread: three entries then three exits at
/// indents 0, 2, 4 then 4, 2, 0.
#[test]
fn three_threads_three_deep_nested_calls() {
    let (logger, sink) = capture_logger();
    logger.set_title("Test");
    logger.set_level(Level::Info);

    let workers: Vec<_> = (0..3)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || call_1(&logger))
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let line = Regex::new(
        r#"^\d{2}:\d{2}:\d{2}:\d{3} \[Test\]\[CALL\]: (\d+):( *)(>>|<<)(call_[123])\(\)( ----test_tracing\.rs:\d+)?$"#,
    )
    .unwrap();

    let contents = sink.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 18, "{contents}");

    // Every line is whole and well-formed on its own.
    let mut per_thread: Vec<(String, Vec<(String, String, usize)>)> = Vec::new();
    for text in &lines {
        let caps = line.captures(text).unwrap_or_else(|| {
            panic!("malformed line: {text:?}");
        });
        let tid = caps[1].to_string();
        let entry = (
            caps[3].to_string(),
            caps[4].to_string(),
            caps[2].len(),
        );
        // Entry lines carry a call site, exit lines do not.
        assert_eq!(caps.get(5).is_some(), &caps[3] == ">>", "{text:?}");
        match per_thread.iter_mut().find(|(id, _)| *id == tid) {
            Some((_, events)) => events.push(entry),
            None => per_thread.push((tid, vec![entry])),
        }
    }

    assert_eq!(per_thread.len(), 3, "expected three distinct thread ids");
    for (tid, events) in &per_thread {
        let expected = [
            (">>", "call_1", 0),
            (">>", "call_2", 2),
            (">>", "call_3", 4),
            ("<<", "call_3", 4),
            ("<<", "call_2", 2),
            ("<<", "call_1", 0),
        ];
        assert_eq!(events.len(), 6, "thread {tid}");
        for (event, expected) in events.iter().zip(expected) {
            assert_eq!(event.0, expected.0, "thread {tid}");
            assert_eq!(event.1, expected.1, "thread {tid}");
            assert_eq!(event.2, expected.2, "thread {tid}: indent");
        }
    }
}

/// Depth returns to zero after arbitrarily deep nesting.
#[test]
fn depth_survives_deep_recursion() {
    fn nest(logger: &Logger, remaining: usize) {
        let _scope = logger.trace_call("nest", format_args!("{remaining}"), file!(), line!());
        if remaining == 0 {
            return;
        }
        nest(logger, remaining - 1);
    }

    let (logger, sink) = capture_logger();
    let worker = Arc::clone(&logger);
    thread::spawn(move || {
        nest(&worker, 50);
        worker.message(Level::Info, format_args!("back at the top"), file!(), line!());
    })
    .join()
    .unwrap();

    let contents = sink.contents();
    // 51 entries, 51 exits, one trailing message.
    assert_eq!(contents.lines().count(), 103);
    let last = contents.lines().last().unwrap();
    // Unindented: exactly the two framing spaces before the quoted message.
    assert!(
        Regex::new(r#"\d+:  "back at the top""#).unwrap().is_match(last),
        "{last:?}"
    );
}

/// Colors repeat the palette order and wrap: thread 11 matches thread 1.
#[test]
fn colors_wrap_after_ten_threads() {
    let logger = Arc::new(Logger::with_sink(Box::new(Capture::default())));

    let mut colors = Vec::new();
    for _ in 0..11 {
        let logger = Arc::clone(&logger);
        colors.push(thread::spawn(move || logger.thread_color()).join().unwrap());
    }

    assert_eq!(&colors[..10], &PALETTE[..]);
    assert_eq!(colors[10], colors[0]);
}

/// The thread id embedded in a line matches the id of the emitting thread.
#[test]
fn line_thread_id_matches_emitting_thread() {
    let (logger, sink) = capture_logger();
    let (tx, rx) = mpsc::channel();

    let worker = Arc::clone(&logger);
    thread::spawn(move || {
        tx.send(tracelog::thread_id::current()).unwrap();
        worker.message(Level::Info, format_args!("from worker"), file!(), line!());
    })
    .join()
    .unwrap();

    let os_id = rx.recv().unwrap();
    let contents = sink.contents();
    let rendered = contents
        .split("]: ")
        .nth(1)
        .and_then(|rest| rest.split(':').next())
        .unwrap();
    assert_eq!(rendered.parse::<u64>().unwrap(), os_id);
}

/// Many threads hammering one logger never interleave within a line.
#[test]
fn concurrent_writers_emit_whole_lines() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let (logger, sink) = capture_logger();
    logger.set_title("hammer");

    let workers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.message(
                        Level::Info,
                        format_args!("worker {worker} message {i}"),
                        file!(),
                        line!(),
                    );
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let line = Regex::new(
        r#"^\d{2}:\d{2}:\d{2}:\d{3} \[hammer\]\[INFO\]: \d+:  "worker \d+ message \d+" ----test_tracing\.rs:\d+$"#,
    )
    .unwrap();

    let contents = sink.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for text in lines {
        assert!(line.is_match(text), "malformed line: {text:?}");
    }
}
