//! Rendering of domain state onto the two physical panels.
//!
//! [`DualRenderer`] owns both displays and decides what each one shows:
//! status and error codes mirror onto both panels, while temperatures are
//! rendered per-channel so one display can show a valid reading while the
//! other shows a sentinel.
//!
//! # Example
//!
//! ```rust
//! use segtherm::render::{Channel, DualRenderer};
//! use segtherm::codes::StatusCode;
//! use segtherm::hal::MockPanel;
//!
//! let mut renderer = DualRenderer::new(MockPanel::new(), MockPanel::new());
//! renderer.show_status(StatusCode::BootOk).unwrap();
//!
//! renderer.show_temperature(Channel::Cpu, 45.0).unwrap();
//! renderer.show_temperature(Channel::Gpu, 62.0).unwrap();
//! ```

use crate::codes::{ErrorCode, StatusCode};
use crate::parsing::TempReading;
use crate::segments::{error_frame, status_frame, temperature_frame};
use crate::traits::SegmentPanel;

/// Which physical display a temperature belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// The left panel, wired for CPU temperature.
    Cpu,
    /// The right panel, wired for GPU temperature.
    Gpu,
}

/// Renders frames onto the CPU and GPU panels.
///
/// Both panels must share an error type; in practice they are two instances
/// of the same driver on different pins.
pub struct DualRenderer<D1, D2> {
    cpu: D1,
    gpu: D2,
}

impl<D1, D2, E> DualRenderer<D1, D2>
where
    D1: SegmentPanel<Error = E>,
    D2: SegmentPanel<Error = E>,
{
    /// Creates a renderer over the CPU and GPU panels, in that order.
    pub fn new(cpu: D1, gpu: D2) -> Self {
        Self { cpu, gpu }
    }

    /// Shows a startup status code on both panels.
    pub fn show_status(&mut self, code: StatusCode) -> Result<(), E> {
        let frame = status_frame(code);
        self.cpu.write_frame(frame)?;
        self.gpu.write_frame(frame)
    }

    /// Shows an `E-XX` error code on both panels.
    pub fn show_error(&mut self, code: ErrorCode) -> Result<(), E> {
        let frame = error_frame(code.code());
        self.cpu.write_frame(frame)?;
        self.gpu.write_frame(frame)
    }

    /// Shows a temperature on one panel, leaving the other untouched.
    pub fn show_temperature(&mut self, channel: Channel, temp: f32) -> Result<(), E> {
        let frame = temperature_frame(temp);
        match channel {
            Channel::Cpu => self.cpu.write_frame(frame),
            Channel::Gpu => self.gpu.write_frame(frame),
        }
    }

    /// Shows a full reading, CPU panel first then GPU.
    pub fn show_temperatures(&mut self, reading: TempReading) -> Result<(), E> {
        self.show_temperature(Channel::Cpu, reading.cpu)?;
        self.show_temperature(Channel::Gpu, reading.gpu)
    }

    /// Returns references to the underlying panels (CPU, GPU).
    pub fn panels(&self) -> (&D1, &D2) {
        (&self.cpu, &self.gpu)
    }

    /// Consumes the renderer and returns the panels.
    pub fn release(self) -> (D1, D2) {
        (self.cpu, self.gpu)
    }
}
