//! Input-driven monitor: parses telemetry lines, renders them, and raises
//! timeout errors during data silence.
//!
//! [`TempMonitor`] is the application state machine. It owns the
//! [`DualRenderer`] plus the two pieces of session state that drive error
//! precedence: the timestamp of the last successful update and the error
//! latch. The latch stops an already-displayed error from being re-rendered
//! every tick; only the next successful update clears it.
//!
//! Time is passed into [`tick`](TempMonitor::tick) rather than read from an
//! owned clock, so tests drive the monitor with simulated timestamps.
//!
//! # Example
//!
//! ```rust
//! use segtherm::monitor::{TempMonitor, TickOutcome};
//! use segtherm::render::DualRenderer;
//! use segtherm::config::MonitorConfig;
//! use segtherm::hal::MockPanel;
//!
//! let renderer = DualRenderer::new(MockPanel::new(), MockPanel::new());
//! let mut monitor = TempMonitor::new(renderer, MonitorConfig::default());
//!
//! monitor.reset_session(0);
//! let outcome = monitor.tick(Some("45.0,62.0"), 100);
//! assert!(matches!(outcome, TickOutcome::Updated(_)));
//! ```

use embedded_hal::delay::DelayNs;

use crate::codes::{ErrorCode, StatusCode};
use crate::config::MonitorConfig;
use crate::parsing::{parse_line, TempReading};
use crate::render::DualRenderer;
use crate::traits::{Clock, LineSource, SegmentPanel};

/// What one monitor tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// No pending line and no timeout fired.
    Idle,
    /// A line parsed successfully and both panels were updated.
    Updated(TempReading),
    /// An error code was rendered (parse, format, or timeout).
    ErrorShown(ErrorCode),
    /// A panel write failed; E-99 was attempted best-effort and the caller
    /// should back off before the next tick.
    Fault,
}

/// The temperature monitor state machine.
///
/// Constructed once at startup; all mutable session state lives here rather
/// than in globals.
pub struct TempMonitor<D1, D2> {
    renderer: DualRenderer<D1, D2>,
    config: MonitorConfig,
    last_update_ms: u64,
    error_latched: bool,
}

impl<D1, D2, E> TempMonitor<D1, D2>
where
    D1: SegmentPanel<Error = E>,
    D2: SegmentPanel<Error = E>,
{
    /// Creates a monitor over the given renderer and timing configuration.
    pub fn new(renderer: DualRenderer<D1, D2>, config: MonitorConfig) -> Self {
        Self {
            renderer,
            config,
            last_update_ms: 0,
            error_latched: false,
        }
    }

    /// Runs the visible startup sequence: status 1 (boot ok), hold, status 2
    /// (waiting for connection), hold, status 3 (connected).
    ///
    /// Call [`reset_session`](Self::reset_session) when entering the loop so
    /// the silence window starts after the holds, not before.
    pub fn startup(&mut self, delay: &mut impl DelayNs) -> Result<(), E> {
        self.renderer.show_status(StatusCode::BootOk)?;
        delay.delay_ms(self.config.boot_hold_ms);
        self.renderer.show_status(StatusCode::WaitingConnection)?;
        delay.delay_ms(self.config.connect_hold_ms);
        self.renderer.show_status(StatusCode::Connected)
    }

    /// Resets the session clock to `now_ms` and clears the error latch.
    pub fn reset_session(&mut self, now_ms: u64) {
        self.last_update_ms = now_ms;
        self.error_latched = false;
    }

    /// Processes one loop iteration: handle a pending line if any, then
    /// check for data silence.
    ///
    /// Never panics and never returns an error; a failed panel write is
    /// reported as [`TickOutcome::Fault`] after a best-effort attempt to
    /// show E-99, and the loop keeps going.
    pub fn tick(&mut self, line: Option<&str>, now_ms: u64) -> TickOutcome {
        match self.process(line, now_ms) {
            Ok(outcome) => outcome,
            Err(_) => {
                // The panels may be wedged; showing E-99 is best-effort.
                let _ = self.renderer.show_error(ErrorCode::Unknown);
                TickOutcome::Fault
            }
        }
    }

    fn process(&mut self, line: Option<&str>, now_ms: u64) -> Result<TickOutcome, E> {
        if let Some(line) = line.filter(|l| !l.is_empty()) {
            match parse_line(line) {
                Ok(reading) => {
                    self.renderer.show_temperatures(reading)?;
                    self.last_update_ms = now_ms;
                    self.error_latched = false;
                    return Ok(TickOutcome::Updated(reading));
                }
                Err(err) => {
                    let code = ErrorCode::from(err);
                    self.renderer.show_error(code)?;
                    self.error_latched = true;
                    return Ok(TickOutcome::ErrorShown(code));
                }
            }
        }

        if !self.error_latched
            && now_ms.saturating_sub(self.last_update_ms) > self.config.data_timeout_ms
        {
            self.renderer.show_error(ErrorCode::DataTimeout)?;
            self.error_latched = true;
            return Ok(TickOutcome::ErrorShown(ErrorCode::DataTimeout));
        }

        Ok(TickOutcome::Idle)
    }

    /// Runs the cooperative polling loop forever.
    ///
    /// One iteration per tick interval; an extra backoff is inserted after a
    /// panel fault. The loop never exits and never propagates an error.
    ///
    /// `observe` is called once per iteration with the polled line (if any)
    /// and the tick outcome, so the binary can log without owning the loop.
    pub fn run<S, C, D, F>(&mut self, source: &mut S, clock: &C, delay: &mut D, mut observe: F) -> !
    where
        S: LineSource,
        C: Clock,
        D: DelayNs,
        F: FnMut(Option<&str>, TickOutcome),
    {
        self.reset_session(clock.now_ms());
        loop {
            let line = source.poll_line();
            let outcome = self.tick(line.as_deref(), clock.now_ms());
            observe(line.as_deref(), outcome);
            if matches!(outcome, TickOutcome::Fault) {
                delay.delay_ms(self.config.fault_backoff_ms);
            }
            delay.delay_ms(self.config.tick_interval_ms);
        }
    }

    /// True while a displayed error is suppressing re-raising.
    pub fn error_latched(&self) -> bool {
        self.error_latched
    }

    /// Timestamp of the last successful update, in milliseconds.
    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    /// The monitor's timing configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Access to the renderer, mainly for inspection in tests.
    pub fn renderer(&self) -> &DualRenderer<D1, D2> {
        &self.renderer
    }
}
