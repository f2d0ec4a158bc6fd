//! Monitor timing configuration.
//!
//! All timing knobs for the startup sequence and the polling loop live here,
//! with builder-style setters so the binary can tweak individual values
//! without spelling out the whole struct.
//!
//! # Example
//!
//! ```rust
//! use segtherm::config::MonitorConfig;
//!
//! // Use defaults
//! let config = MonitorConfig::default();
//! assert_eq!(config.data_timeout_ms, 10_000);
//!
//! // Or customize
//! let config = MonitorConfig::default()
//!     .with_data_timeout_ms(5_000)
//!     .with_tick_interval_ms(50);
//! ```

/// Timing configuration for the monitor loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Data silence window before E-20 is raised, in milliseconds.
    pub data_timeout_ms: u64,
    /// Sleep between loop iterations, in milliseconds.
    pub tick_interval_ms: u32,
    /// Extra backoff after an unexpected fault, in milliseconds.
    pub fault_backoff_ms: u32,
    /// How long the boot status (1) stays visible, in milliseconds.
    pub boot_hold_ms: u32,
    /// How long the waiting status (2) stays visible, in milliseconds.
    pub connect_hold_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            data_timeout_ms: 10_000,
            tick_interval_ms: 100,
            fault_backoff_ms: 1_000,
            boot_hold_ms: 2_000,
            connect_hold_ms: 1_000,
        }
    }
}

impl MonitorConfig {
    /// Set the data silence window before E-20 is raised.
    pub fn with_data_timeout_ms(mut self, ms: u64) -> Self {
        self.data_timeout_ms = ms;
        self
    }

    /// Set the sleep between loop iterations.
    pub fn with_tick_interval_ms(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the extra backoff after an unexpected fault.
    pub fn with_fault_backoff_ms(mut self, ms: u32) -> Self {
        self.fault_backoff_ms = ms;
        self
    }

    /// Set how long the boot status stays visible.
    pub fn with_boot_hold_ms(mut self, ms: u32) -> Self {
        self.boot_hold_ms = ms;
        self
    }

    /// Set how long the waiting status stays visible.
    pub fn with_connect_hold_ms(mut self, ms: u32) -> Self {
        self.connect_hold_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_timing() {
        let config = MonitorConfig::default();
        assert_eq!(config.data_timeout_ms, 10_000);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.fault_backoff_ms, 1_000);
        assert_eq!(config.boot_hold_ms, 2_000);
        assert_eq!(config.connect_hold_ms, 1_000);
    }

    #[test]
    fn builders_set_fields() {
        let config = MonitorConfig::default()
            .with_data_timeout_ms(5_000)
            .with_tick_interval_ms(50)
            .with_fault_backoff_ms(500)
            .with_boot_hold_ms(100)
            .with_connect_hold_ms(200);

        assert_eq!(config.data_timeout_ms, 5_000);
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.fault_backoff_ms, 500);
        assert_eq!(config.boot_hold_ms, 100);
        assert_eq!(config.connect_hold_ms, 200);
    }
}
