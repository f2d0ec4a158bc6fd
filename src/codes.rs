//! Status and error codes shown on the displays.
//!
//! The device has no feedback channel to the host, so these two-digit codes
//! are the only way it communicates its state. The numeric values are a wire
//! contract with whoever is watching the panels and must not change.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 1    | boot successful |
//! | 2    | waiting for connection |
//! | 3    | connected, awaiting data |
//! | E-10 | a field failed numeric parse |
//! | E-11 | line had no separator |
//! | E-20 | no successful update for >10 seconds |
//! | E-99 | unexpected failure in the processing loop |

/// Startup status codes, shown as a single digit on both displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCode {
    /// Boot successful.
    BootOk = 1,
    /// Waiting for the host to open the serial connection.
    WaitingConnection = 2,
    /// Connected, awaiting the first data line.
    Connected = 3,
}

impl StatusCode {
    /// Returns the single-digit code value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Error codes, shown as `E-XX` on both displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// A received field failed numeric parse.
    Parse = 10,
    /// A received line had no separator.
    Format = 11,
    /// No successful update for longer than the configured timeout.
    DataTimeout = 20,
    /// Unexpected failure in the processing loop (e.g. a panel write failed).
    Unknown = 99,
}

impl ErrorCode {
    /// Returns the two-digit code value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
