//! Trait definitions for hardware abstraction and display output.
//!
//! This module defines the abstractions that allow segtherm to:
//! - Run on different hardware (ESP32, desktop mock)
//! - Drive any 4-digit segment panel, not just the TM1637
//! - Be tested on desktop with simulated time and input
//!
//! # Submodules
//!
//! - `hardware`: Clock and non-blocking line input
//! - `display`: Segment panel trait
//!
//! Pin output and delays are taken directly from `embedded-hal` 1.0 rather
//! than wrapped here; see [`crate::tm1637`].
//!
//! # Key traits
//!
//! - [`SegmentPanel`]: a 4-digit display accepting whole frames
//! - [`Clock`]: millisecond time source for `no_std` environments
//! - [`LineSource`]: zero-timeout poll for host telemetry lines

pub mod display;
pub mod hardware;

pub use display::*;
pub use hardware::*;
