use std::io;
use std::sync::{Arc, Mutex};

use pacman_sim::formatter::{set_simulation_time, simulation_time, CustomFormatter};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tracing::{info, info_span, warn};

/// An in-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Runs `f` with a plain-text subscriber using [`CustomFormatter`] and returns what it logged.
fn capture(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .event_format(CustomFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

/// Splits a line into its wall clock and everything after it.
fn split_wall_clock(line: &str) -> (&str, &str) {
    let (clock, rest) = line.split_at(12);
    (clock, rest.strip_prefix(' ').unwrap())
}

#[test]
fn test_formats_simulation_time_and_level() {
    let output = capture(|| {
        set_simulation_time(1234);
        info!(score = 10, "Pill eaten");
    });
    assert_eq!(simulation_time(), 1234);

    let (clock, rest) = split_wall_clock(&output);
    assert_eq!(rest, "t=   1234ms  INFO formatting: Pill eaten score=10\n");

    // HH:MM:SS.mmm
    let shape: String = clock.chars().map(|c| if c.is_ascii_digit() { 'd' } else { c }).collect();
    assert_eq!(shape, "dd:dd:dd.ddd");
}

#[test]
fn test_formats_span_scope_without_ansi() {
    let output = capture(|| {
        let span = info_span!("tick", timestamp = 7);
        let _entered = span.enter();
        warn!("Frame behind schedule");
    });

    assert_that(&output.contains('\x1b')).is_false();
    assert_that(&output.lines().count()).is_equal_to(1);
    assert_that(&output.contains(" WARN tick{timestamp=7}: formatting: Frame behind schedule")).is_true();
}
