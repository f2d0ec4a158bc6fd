//! # segtherm
//!
//! A dual TM1637 seven-segment display controller for CPU/GPU temperature
//! telemetry received over a serial link.
//!
//! ## Features
//!
//! - **Bit-banged TM1637 driver**: exact two-wire transaction framing over
//!   any `embedded-hal` 1.0 output pins
//! - **Pure segment encoding**: digits, status codes, `E-XX` error codes and
//!   temperature layouts as plain frame-returning functions
//! - **Resilient monitor loop**: parse/format/timeout errors become visible
//!   display codes and the loop never halts
//! - **Error latch**: a displayed error is raised once per incident, not
//!   re-rendered every tick
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Clock, line-input and panel abstractions
//! - `segments` - Pure pattern/frame encoding
//! - `codes` - The status and error code contract
//! - `tm1637` - The display controller driver
//! - `render` - Frame routing onto the two physical panels
//! - `parsing` - Telemetry line parsing
//! - `monitor` - The input/timeout state machine
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use segtherm::{
//!     config::MonitorConfig,
//!     hal::{MockPanel, MockDelay},
//!     monitor::{TempMonitor, TickOutcome},
//!     render::DualRenderer,
//! };
//!
//! // Create a monitor with mock panels
//! let renderer = DualRenderer::new(MockPanel::new(), MockPanel::new());
//! let mut monitor = TempMonitor::new(renderer, MonitorConfig::default());
//!
//! // Run the visible startup sequence (status 1, 2, 3)
//! let mut delay = MockDelay::new();
//! monitor.startup(&mut delay).unwrap();
//! monitor.reset_session(0);
//!
//! // Feed a telemetry line into the loop
//! let outcome = monitor.tick(Some("45.3,62.0"), 100);
//! assert!(matches!(outcome, TickOutcome::Updated(_)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Status and error code contract shown on the displays.
pub mod codes;
/// Monitor timing configuration.
pub mod config;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Input/timeout state machine that drives the displays.
pub mod monitor;
/// Telemetry line parsing.
pub mod parsing;
/// Frame routing onto the two physical panels.
pub mod render;
/// Segment pattern and frame encoding.
pub mod segments;
/// Bit-banged TM1637 display controller driver.
pub mod tm1637;
/// Core traits for hardware abstraction.
pub mod traits;

// Re-exports for convenience
pub use codes::{ErrorCode, StatusCode};
pub use config::MonitorConfig;
pub use monitor::{TempMonitor, TickOutcome};
pub use parsing::{parse_line, LineError, TempReading};
pub use render::{Channel, DualRenderer};
pub use segments::{
    digit, error_frame, status_frame, temperature_frame, DisplayFrame, SegmentPattern,
};
pub use tm1637::Tm1637;
pub use traits::{Clock, LineSource, SegmentPanel, TelemetryLine};
