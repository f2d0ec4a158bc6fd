//! Non-blocking stdin line source (std only).
//!
//! The host talks to the device over the USB serial console, which shows up
//! as stdin on esp-idf (and as plain stdin when testing the loop on a
//! desktop). Reading stdin blocks, so a background thread does the blocking
//! reads and hands complete lines to the polling loop through a channel;
//! [`poll_line`](crate::traits::LineSource::poll_line) is then a zero-timeout
//! `try_recv`.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::traits::{LineSource, TelemetryLine, MAX_LINE_LEN};

/// Line source backed by a stdin reader thread.
///
/// # Example
///
/// ```no_run
/// use segtherm::hal::stdin::StdinLineSource;
/// use segtherm::traits::LineSource;
///
/// let mut source = StdinLineSource::spawn();
/// loop {
///     if let Some(line) = source.poll_line() {
///         println!("Received: {}", line);
///     }
///     # break;
/// }
/// ```
pub struct StdinLineSource {
    rx: Receiver<TelemetryLine>,
}

impl StdinLineSource {
    /// Starts the reader thread and returns the polling handle.
    ///
    /// The thread runs until stdin reaches end-of-file or the process exits.
    /// Lines are stripped of trailing whitespace and truncated to
    /// [`MAX_LINE_LEN`] bytes.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let trimmed = line.trim_end();

                let mut buf = TelemetryLine::new();
                for ch in trimmed.chars().take(MAX_LINE_LEN) {
                    if buf.push(ch).is_err() {
                        break;
                    }
                }
                if tx.send(buf).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl LineSource for StdinLineSource {
    fn poll_line(&mut self) -> Option<TelemetryLine> {
        self.rx.try_recv().ok()
    }
}
