//! ESP32-C3 SuperMini hardware abstraction layer for the dual-display rig.
//!
//! This module provides hardware implementations for the ESP32-C3 SuperMini
//! board driving two TM1637 4-digit seven-segment modules.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 SuperMini (RISC-V 160MHz, 4MB Flash)
//! - **Displays**: two TM1637 modules, one per sensor channel
//! - **Host link**: USB serial console (stdin on esp-idf)
//!
//! GPIO pins are plain push-pull outputs; `esp_idf_hal::gpio::PinDriver`
//! implements the `embedded-hal` 1.0 `OutputPin` trait the TM1637 driver is
//! generic over, and `esp_idf_hal::delay::Delay` provides `DelayNs`.
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for the GPIO numbers matching the wiring.

mod clock;

pub use clock::Esp32Clock;

/// Pin assignments for SuperMini ESP32-C3.
///
/// Each display gets its own clock/data pair; the bus has no arbitration,
/// so the pairs must not be shared.
pub mod pins {
    // =========================================================================
    // CPU display (left panel)
    // =========================================================================

    /// CPU display clock line
    pub const CPU_CLK: i32 = 0;

    /// CPU display data line
    pub const CPU_DIO: i32 = 1;

    // =========================================================================
    // GPU display (right panel)
    // =========================================================================

    /// GPU display clock line
    pub const GPU_CLK: i32 = 2;

    /// GPU display data line
    pub const GPU_DIO: i32 = 3;
}
