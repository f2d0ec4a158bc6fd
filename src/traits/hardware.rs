//! Hardware abstraction traits for timekeeping and line input.
//!
//! Pin output and microsecond delays come straight from `embedded-hal` 1.0
//! ([`embedded_hal::digital::OutputPin`], [`embedded_hal::delay::DelayNs`]);
//! this module only defines the two seams `embedded-hal` does not cover for
//! this device: a millisecond clock for silence detection and a non-blocking
//! source of telemetry lines.
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations from
//! [`crate::hal::mock`]. On hardware, use `Esp32Clock` (requires the `esp32`
//! feature) and the std-based `StdinLineSource`.

use heapless::String as HString;

/// Maximum accepted length of one telemetry line.
pub const MAX_LINE_LEN: usize = 64;

/// One received telemetry line, already stripped of trailing whitespace.
pub type TelemetryLine = HString<MAX_LINE_LEN>;

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds for data-silence detection.
/// On desktop this can wrap `std::time::Instant`; on embedded, a hardware
/// timer.
///
/// # Example
///
/// ```rust
/// use segtherm::traits::Clock;
/// use segtherm::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

/// Non-blocking source of host telemetry lines.
///
/// The monitor loop polls this once per tick with zero timeout: a pending
/// line is returned immediately, otherwise `None` and the loop falls through
/// to its timeout check. Implementations strip the trailing newline and any
/// trailing whitespace before returning a line.
pub trait LineSource {
    /// Returns the next pending line, or `None` if nothing has arrived.
    ///
    /// Must never block.
    fn poll_line(&mut self) -> Option<TelemetryLine>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::{MockClock, MockLineSource};

    #[test]
    fn clock_is_monotonic_under_advance() {
        let mut clock = MockClock::new();
        let t0 = clock.now_ms();
        clock.advance(250);
        assert!(clock.now_ms() > t0);
    }

    #[test]
    fn line_source_returns_none_when_empty() {
        let mut source = MockLineSource::new();
        assert!(source.poll_line().is_none());
    }

    #[test]
    fn line_source_returns_queued_lines_in_order() {
        let mut source = MockLineSource::new();
        source.queue_line("45.0,62.0");
        source.queue_line("50.0,63.0");

        assert_eq!(source.poll_line().as_deref(), Some("45.0,62.0"));
        assert_eq!(source.poll_line().as_deref(), Some("50.0,63.0"));
        assert!(source.poll_line().is_none());
    }
}
