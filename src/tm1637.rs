//! Bit-banged TM1637 display controller driver.
//!
//! The TM1637 speaks a two-wire protocol that looks like I2C but has no
//! addressing and no multi-device arbitration: one clock line, one data
//! line, fixed settle delays between every edge. This module implements the
//! transaction framing (start condition, LSB-first byte writes with an
//! ignored acknowledge pulse, stop condition) and the three-transaction
//! command sequence that updates all four digits at once.
//!
//! The driver is generic over [`embedded_hal`] 1.0 [`OutputPin`]s and a
//! [`DelayNs`] source, so it runs unchanged on ESP32 GPIO and on the mock
//! pins from [`crate::hal::mock`].
//!
//! # Example
//!
//! ```rust
//! use segtherm::tm1637::Tm1637;
//! use segtherm::segments::status_frame;
//! use segtherm::codes::StatusCode;
//! use segtherm::hal::{MockDelay, MockPin, PinId, SharedPinLog};
//!
//! let log = SharedPinLog::default();
//! let clk = MockPin::new(PinId::Clk, &log);
//! let dio = MockPin::new(PinId::Dio, &log);
//!
//! let mut panel = Tm1637::new(clk, dio, MockDelay::new());
//! panel.write(status_frame(StatusCode::BootOk)).unwrap();
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::segments::DisplayFrame;
use crate::traits::SegmentPanel;

/// Command byte: data write mode with auto-incrementing address.
const CMD_DATA_WRITE: u8 = 0x40;

/// Command byte: set the write address to digit 0.
const CMD_ADDR_BASE: u8 = 0xC0;

/// Command byte: display on; brightness level lives in bits 0-2.
const CMD_DISPLAY_ON: u8 = 0x88;

/// Settle time after every line state change, in microseconds.
const BIT_DELAY_US: u32 = 2;

/// Highest supported brightness level.
pub const MAX_BRIGHTNESS: u8 = 7;

/// One TM1637-driven 4-digit panel.
///
/// Owns the two control pins and a delay source for the lifetime of the
/// process. Brightness defaults to the maximum level and can be changed with
/// [`set_brightness`](Self::set_brightness); it is applied on every
/// [`write_frame`](Self::write_frame).
pub struct Tm1637<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    brightness: u8,
}

impl<CLK, DIO, D, E> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Creates a driver for one panel at maximum brightness.
    ///
    /// Both pins should be configured as outputs and idle high before the
    /// first transaction.
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self {
            clk,
            dio,
            delay,
            brightness: MAX_BRIGHTNESS,
        }
    }

    /// Sets the brightness level (0-7, clamped).
    ///
    /// Takes effect on the next frame write.
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
    }

    /// Returns the current brightness level.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Releases the pins and delay source.
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    /// Start condition: data low while clock is high.
    fn start(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.delay.delay_us(BIT_DELAY_US);
        Ok(())
    }

    /// Stop condition: data low, clock high, then data high.
    fn stop(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_high()?;
        self.delay.delay_us(BIT_DELAY_US);
        self.dio.set_high()?;
        Ok(())
    }

    /// Clocks one byte out LSB-first, then runs the acknowledge pulse.
    ///
    /// The chip pulls the data line low during the ninth clock cycle to
    /// acknowledge the byte; this driver clocks through that cycle without
    /// sampling it, so a missing or failing chip is indistinguishable from a
    /// healthy one at this level.
    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in 0..8 {
            self.clk.set_low()?;
            self.delay.delay_us(BIT_DELAY_US);
            if (byte >> bit) & 1 == 1 {
                self.dio.set_high()?;
            } else {
                self.dio.set_low()?;
            }
            self.delay.delay_us(BIT_DELAY_US);
            self.clk.set_high()?;
            self.delay.delay_us(BIT_DELAY_US);
        }

        // Acknowledge pulse, level deliberately ignored.
        self.clk.set_low()?;
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_high()?;
        self.delay.delay_us(BIT_DELAY_US);
        self.clk.set_low()?;
        self.delay.delay_us(BIT_DELAY_US);
        Ok(())
    }

    /// Writes all four digits in the controller's three-transaction sequence:
    /// write-mode command, address plus the four pattern bytes, then the
    /// display-control command carrying the brightness level.
    pub fn write(&mut self, frame: DisplayFrame) -> Result<(), E> {
        self.start()?;
        self.write_byte(CMD_DATA_WRITE)?;
        self.stop()?;

        self.start()?;
        self.write_byte(CMD_ADDR_BASE)?;
        for pattern in frame {
            self.write_byte(pattern)?;
        }
        self.stop()?;

        self.start()?;
        self.write_byte(CMD_DISPLAY_ON | self.brightness)?;
        self.stop()?;
        Ok(())
    }
}

impl<CLK, DIO, D, E> SegmentPanel for Tm1637<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
{
    type Error = E;

    fn write_frame(&mut self, frame: DisplayFrame) -> Result<(), E> {
        self.write(frame)
    }
}
