//! Display abstraction for 4-digit segment panels.
//!
//! This module defines the [`SegmentPanel`] trait, the seam between the
//! rendering layer and a concrete display driver such as
//! [`Tm1637`](crate::tm1637::Tm1637).

use crate::segments::DisplayFrame;

/// One 4-digit seven-segment panel.
///
/// Implementors accept a complete [`DisplayFrame`] and make it visible
/// atomically; there is no per-digit addressing at this level.
///
/// # Example
///
/// ```ignore
/// use segtherm::traits::SegmentPanel;
/// use segtherm::segments::DisplayFrame;
///
/// struct MyPanel { /* ... */ }
///
/// impl SegmentPanel for MyPanel {
///     type Error = ();
///
///     fn write_frame(&mut self, frame: DisplayFrame) -> Result<(), ()> {
///         // Push the four patterns to the hardware...
///         Ok(())
///     }
/// }
/// ```
pub trait SegmentPanel {
    /// Error type for panel writes.
    type Error;

    /// Writes all four digit patterns, left to right.
    fn write_frame(&mut self, frame: DisplayFrame) -> Result<(), Self::Error>;
}
