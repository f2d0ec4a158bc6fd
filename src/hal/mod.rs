//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `stdin`: Thread-backed non-blocking stdin line source (requires `std`)
//! - `esp32`: ESP32-C3 SuperMini with two TM1637 panels (requires `esp32` feature)

pub mod mock;

#[cfg(feature = "std")]
pub mod stdin;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "std")]
pub use stdin::StdinLineSource;

#[cfg(feature = "esp32")]
pub use esp32::*;
