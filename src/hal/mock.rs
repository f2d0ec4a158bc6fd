//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for every seam the monitor touches,
//! enabling development and testing on desktop without physical displays.
//!
//! # Available Mocks
//!
//! | Mock | Stands in for | Purpose |
//! |------|---------------|---------|
//! | [`MockPin`] | `embedded_hal::digital::OutputPin` | Records every level change into a shared log |
//! | [`MockDelay`] | `embedded_hal::delay::DelayNs` | Accumulates requested delay time |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//! | [`MockPanel`] | [`SegmentPanel`] | Records written frames, can inject failures |
//! | [`MockLineSource`] | [`LineSource`] | Queued telemetry lines |
//!
//! The two pins of one TM1637 bus share a [`SharedPinLog`], so tests can
//! verify the *interleaving* of clock and data edges, not just each pin in
//! isolation.
//!
//! # Example
//!
//! ```rust
//! use segtherm::hal::{MockPin, PinId, SharedPinLog};
//! use embedded_hal::digital::OutputPin;
//!
//! let log = SharedPinLog::default();
//! let mut clk = MockPin::new(PinId::Clk, &log);
//! let mut dio = MockPin::new(PinId::Dio, &log);
//!
//! clk.set_low().unwrap();
//! dio.set_high().unwrap();
//!
//! assert_eq!(log.events(), vec![(PinId::Clk, false), (PinId::Dio, true)]);
//! ```
//!
//! [`Clock`]: crate::traits::Clock
//! [`SegmentPanel`]: crate::traits::SegmentPanel
//! [`LineSource`]: crate::traits::LineSource

use core::cell::RefCell;
use core::convert::Infallible;

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::segments::DisplayFrame;
use crate::traits::{Clock, LineSource, SegmentPanel, TelemetryLine};

// ============================================================================
// Pin Mocks
// ============================================================================

/// Which wire of the two-wire bus an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinId {
    /// The clock line.
    Clk,
    /// The data line.
    Dio,
}

/// Shared, ordered log of pin level changes.
///
/// Clone handles are cheap; all clones append to the same log. Each entry is
/// `(pin, level)` in the order the driver issued the writes.
#[derive(Clone, Debug, Default)]
pub struct SharedPinLog {
    events: Rc<RefCell<Vec<(PinId, bool)>>>,
}

impl SharedPinLog {
    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<(PinId, bool)> {
        self.events.borrow().clone()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Counts low-to-high transitions on one pin.
    ///
    /// Pins are assumed to idle high, so the count starts after the first
    /// recorded low on that pin.
    pub fn rising_edges(&self, pin: PinId) -> usize {
        let mut level = true;
        let mut count = 0;
        for (id, new_level) in self.events.borrow().iter() {
            if *id != pin {
                continue;
            }
            if !level && *new_level {
                count += 1;
            }
            level = *new_level;
        }
        count
    }

    /// Replays the log the way a TM1637 would see it and returns the bytes
    /// latched in each transaction.
    ///
    /// A transaction opens when the data line falls while the clock is high
    /// and closes when it rises while the clock is high. Within it, the data
    /// level is sampled on every rising clock edge; each byte costs nine
    /// edges (eight data bits LSB-first plus the acknowledge pulse, whose
    /// sample is discarded), and the stop condition's own clock rise is
    /// dropped.
    pub fn transaction_bytes(&self) -> Vec<Vec<u8>> {
        let mut clk = true;
        let mut dio = true;
        let mut in_transaction = false;
        let mut samples: Vec<bool> = Vec::new();
        let mut transactions = Vec::new();

        for (id, level) in self.events.borrow().iter() {
            match id {
                PinId::Dio => {
                    if clk && dio && !*level {
                        in_transaction = true;
                        samples.clear();
                    } else if clk && !dio && *level && in_transaction {
                        samples.pop(); // the stop condition's clock rise
                        transactions.push(decode_lsb_first(&samples));
                        in_transaction = false;
                    }
                    dio = *level;
                }
                PinId::Clk => {
                    if !clk && *level && in_transaction {
                        samples.push(dio);
                    }
                    clk = *level;
                }
            }
        }
        transactions
    }

    fn push(&self, pin: PinId, level: bool) {
        self.events.borrow_mut().push((pin, level));
    }
}

/// Folds groups of nine sampled levels into bytes, LSB first, discarding the
/// ninth (acknowledge) sample of each group.
fn decode_lsb_first(samples: &[bool]) -> Vec<u8> {
    samples
        .chunks(9)
        .map(|chunk| {
            chunk
                .iter()
                .take(8)
                .enumerate()
                .fold(0u8, |byte, (i, bit)| byte | ((*bit as u8) << i))
        })
        .collect()
}

/// Mock GPIO output pin.
///
/// Records every `set_high`/`set_low` call into its [`SharedPinLog`].
#[derive(Clone, Debug)]
pub struct MockPin {
    id: PinId,
    log: SharedPinLog,
}

impl MockPin {
    /// Creates a pin that appends to the given log.
    pub fn new(id: PinId, log: &SharedPinLog) -> Self {
        Self {
            id,
            log: log.clone(),
        }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.push(self.id, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.push(self.id, true);
        Ok(())
    }
}

// ============================================================================
// Delay Mock
// ============================================================================

/// Mock delay source that accumulates requested time instead of sleeping.
///
/// # Example
///
/// ```rust
/// use segtherm::hal::MockDelay;
/// use embedded_hal::delay::DelayNs;
///
/// let mut delay = MockDelay::new();
/// delay.delay_us(2);
/// delay.delay_ms(1);
/// assert_eq!(delay.total_us(), 1_002);
/// ```
#[derive(Debug, Default)]
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    /// Creates a delay mock with zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay so far, in microseconds.
    pub fn total_us(&self) -> u64 {
        self.elapsed_ns / 1_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

// ============================================================================
// Clock Mock
// ============================================================================

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
///
/// # Example
///
/// ```rust
/// use segtherm::hal::MockClock;
/// use segtherm::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

// ============================================================================
// Panel Mock
// ============================================================================

/// Mock segment panel for testing rendering decisions.
///
/// Records every written frame. Failures can be injected one-shot
/// ([`fail_next_write`](Self::fail_next_write)) or persistently
/// ([`set_failing`](Self::set_failing)).
///
/// # Example
///
/// ```rust
/// use segtherm::hal::MockPanel;
/// use segtherm::traits::SegmentPanel;
///
/// let mut panel = MockPanel::new();
/// panel.write_frame([0x3F, 0, 0, 0]).unwrap();
///
/// assert_eq!(panel.frame_count(), 1);
/// assert_eq!(panel.last_frame(), Some([0x3F, 0, 0, 0]));
/// ```
#[derive(Debug, Default)]
pub struct MockPanel {
    frames: Vec<DisplayFrame>,
    fail_next: bool,
    failing: bool,
}

impl MockPanel {
    /// Creates a panel with no recorded frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes exactly the next write fail.
    pub fn fail_next_write(&mut self) {
        self.fail_next = true;
    }

    /// Makes every write fail (or succeed again) from now on.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// All frames written so far, oldest first.
    pub fn frames(&self) -> &[DisplayFrame] {
        &self.frames
    }

    /// The most recently written frame, if any.
    pub fn last_frame(&self) -> Option<DisplayFrame> {
        self.frames.last().copied()
    }

    /// Number of successful writes.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl SegmentPanel for MockPanel {
    type Error = ();

    fn write_frame(&mut self, frame: DisplayFrame) -> Result<(), ()> {
        if self.failing || core::mem::take(&mut self.fail_next) {
            return Err(());
        }
        self.frames.push(frame);
        Ok(())
    }
}

// ============================================================================
// Line Source Mock
// ============================================================================

/// Mock line source with a FIFO queue of lines.
///
/// # Example
///
/// ```rust
/// use segtherm::hal::MockLineSource;
/// use segtherm::traits::LineSource;
///
/// let mut source = MockLineSource::new();
/// source.queue_line("45.0,62.0");
///
/// assert_eq!(source.poll_line().as_deref(), Some("45.0,62.0"));
/// assert!(source.poll_line().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MockLineSource {
    queue: VecDeque<TelemetryLine>,
}

impl MockLineSource {
    /// Creates a source with no pending lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line to the queue, truncated to the line length limit.
    pub fn queue_line(&mut self, line: &str) {
        let mut buf = TelemetryLine::new();
        for ch in line.chars() {
            if buf.push(ch).is_err() {
                break;
            }
        }
        self.queue.push_back(buf);
    }
}

impl LineSource for MockLineSource {
    fn poll_line(&mut self) -> Option<TelemetryLine> {
        self.queue.pop_front()
    }
}

// ============================================================================
// Tests
// ============================================================================
