//! Segment pattern encoding for 4-digit seven-segment displays.
//!
//! This module is the pure mapping layer: it turns domain values (digits,
//! status codes, error codes, temperatures) into [`DisplayFrame`]s ready to
//! be written to a TM1637 panel. Nothing here touches hardware.
//!
//! # Pattern layout
//!
//! A [`SegmentPattern`] is one byte per digit: bits 0-6 drive segments A-G,
//! bit 7 drives the decimal point / colon (chip-specific).
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---
//!      D
//! ```
//!
//! # Example
//!
//! ```rust
//! use segtherm::segments::{temperature_frame, digit, BLANK, LETTER_C};
//!
//! // 72.4 degrees renders as " 72C"
//! let frame = temperature_frame(72.4);
//! assert_eq!(frame, [BLANK, digit(7), digit(2), LETTER_C]);
//! ```

use crate::codes::StatusCode;

/// One byte of segment state for a single digit position.
///
/// Bits 0-6 select segments A-G, bit 7 the decimal point/colon.
pub type SegmentPattern = u8;

/// Exactly four digit patterns, left-to-right, written atomically.
pub type DisplayFrame = [SegmentPattern; 4];

/// Segment patterns for the digits 0-9.
pub const DIGITS: [SegmentPattern; 10] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F,
];

/// All segments off.
pub const BLANK: SegmentPattern = 0x00;

/// Minus sign (segment G only).
pub const DASH: SegmentPattern = 0x40;

/// Degree symbol.
pub const DEGREE: SegmentPattern = 0x63;

/// Letter C (for Celsius).
pub const LETTER_C: SegmentPattern = 0x39;

/// Letter E (for error codes).
pub const LETTER_E: SegmentPattern = 0x79;

/// Looks up the pattern for a decimal digit.
///
/// The input is taken modulo 10 so the lookup can never go out of bounds.
#[inline]
pub const fn digit(d: u8) -> SegmentPattern {
    DIGITS[(d % 10) as usize]
}

/// Builds the frame for a startup status code: the code digit followed by
/// three blanks (`"1   "`, `"2   "`, `"3   "`).
pub const fn status_frame(code: StatusCode) -> DisplayFrame {
    [digit(code.code()), BLANK, BLANK, BLANK]
}

/// Builds the `E-XX` frame for a two-digit error code.
///
/// The code is taken modulo 100.
pub const fn error_frame(code: u8) -> DisplayFrame {
    let code = code % 100;
    [LETTER_E, DASH, digit(code / 10), digit(code % 10)]
}

/// Builds the frame for a temperature reading.
///
/// Layout by case:
/// - exactly `0.0` renders `" -- "`; the host sends 0.0 when it has no
///   reading for that sensor
/// - below zero or at 1000 and above renders `"E---"`
/// - 100 and above: three digits, no unit letter, clamped to 999
/// - below 100: `" XXC"` with the tens digit blanked when zero
///
/// Rounding is half-away-from-zero. The branch between the two- and
/// three-digit layouts is taken on the *rounded* value, so 99.6 renders as
/// `100 ` rather than overflowing the two-digit layout.
pub fn temperature_frame(temp: f32) -> DisplayFrame {
    if temp == 0.0 {
        return [BLANK, DASH, DASH, BLANK];
    }
    if temp < 0.0 || temp >= 1000.0 {
        return [LETTER_E, DASH, DASH, DASH];
    }

    // Positive and in range, so truncation after +0.5 rounds to nearest.
    let rounded = (temp + 0.5) as u16;

    if rounded >= 100 {
        let capped = if rounded > 999 { 999 } else { rounded };
        let hundreds = (capped / 100) as u8;
        let tens = ((capped % 100) / 10) as u8;
        let ones = (capped % 10) as u8;
        return [digit(hundreds), digit(tens), digit(ones), BLANK];
    }

    let tens = (rounded / 10) as u8;
    let ones = (rounded % 10) as u8;
    [
        BLANK,
        if tens > 0 { digit(tens) } else { BLANK },
        digit(ones),
        LETTER_C,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::StatusCode;

    // =========================================================================
    // Digit lookup
    // =========================================================================

    #[test]
    fn digit_patterns() {
        assert_eq!(digit(0), 0x3F);
        assert_eq!(digit(1), 0x06);
        assert_eq!(digit(8), 0x7F);
        assert_eq!(digit(9), 0x6F);
    }

    #[test]
    fn digit_wraps_modulo_ten() {
        assert_eq!(digit(10), digit(0));
        assert_eq!(digit(13), digit(3));
        assert_eq!(digit(255), digit(5));
    }

    // =========================================================================
    // Status frames
    // =========================================================================

    #[test]
    fn status_frames_are_code_then_blanks() {
        for code in [
            StatusCode::BootOk,
            StatusCode::WaitingConnection,
            StatusCode::Connected,
        ] {
            let frame = status_frame(code);
            assert_eq!(frame[0], digit(code.code()));
            assert_eq!(&frame[1..], &[BLANK, BLANK, BLANK]);
        }
    }

    // =========================================================================
    // Error frames
    // =========================================================================

    #[test]
    fn error_frame_decomposes_all_codes() {
        for code in 0..100u8 {
            let frame = error_frame(code);
            assert_eq!(frame[0], LETTER_E);
            assert_eq!(frame[1], DASH);
            assert_eq!(frame[2], digit(code / 10));
            assert_eq!(frame[3], digit(code % 10));
        }
    }

    #[test]
    fn error_frame_known_codes() {
        assert_eq!(error_frame(10), [LETTER_E, DASH, digit(1), digit(0)]);
        assert_eq!(error_frame(99), [LETTER_E, DASH, digit(9), digit(9)]);
        assert_eq!(error_frame(7), [LETTER_E, DASH, digit(0), digit(7)]);
    }

    #[test]
    fn error_frame_wraps_over_99() {
        assert_eq!(error_frame(123), error_frame(23));
    }

    // =========================================================================
    // Temperature frames
    // =========================================================================

    #[test]
    fn zero_is_no_reading_sentinel() {
        assert_eq!(temperature_frame(0.0), [BLANK, DASH, DASH, BLANK]);
    }

    #[test]
    fn out_of_range_sentinel() {
        assert_eq!(temperature_frame(-5.0), [LETTER_E, DASH, DASH, DASH]);
        assert_eq!(temperature_frame(-0.1), [LETTER_E, DASH, DASH, DASH]);
        assert_eq!(temperature_frame(1000.0), [LETTER_E, DASH, DASH, DASH]);
    }

    #[test]
    fn two_digit_temperature() {
        assert_eq!(
            temperature_frame(72.4),
            [BLANK, digit(7), digit(2), LETTER_C]
        );
        assert_eq!(
            temperature_frame(45.0),
            [BLANK, digit(4), digit(5), LETTER_C]
        );
    }

    #[test]
    fn single_digit_blanks_leading_zero() {
        assert_eq!(temperature_frame(7.2), [BLANK, BLANK, digit(7), LETTER_C]);
        assert_eq!(temperature_frame(0.4), [BLANK, BLANK, digit(0), LETTER_C]);
    }

    #[test]
    fn three_digit_temperature_drops_unit() {
        assert_eq!(
            temperature_frame(105.6),
            [digit(1), digit(0), digit(6), BLANK]
        );
        assert_eq!(
            temperature_frame(100.0),
            [digit(1), digit(0), digit(0), BLANK]
        );
    }

    #[test]
    fn rounding_up_to_100_uses_three_digit_layout() {
        // 99.6 rounds to 100; must not overflow the two-digit layout.
        assert_eq!(
            temperature_frame(99.6),
            [digit(1), digit(0), digit(0), BLANK]
        );
        assert_eq!(
            temperature_frame(99.4),
            [BLANK, digit(9), digit(9), LETTER_C]
        );
    }

    #[test]
    fn rounding_over_999_clamps() {
        // Fractional readings up to (not including) 1000 clamp to 999.
        assert_eq!(
            temperature_frame(999.9),
            [digit(9), digit(9), digit(9), BLANK]
        );
        assert_eq!(
            temperature_frame(999.5),
            [digit(9), digit(9), digit(9), BLANK]
        );
        assert_eq!(
            temperature_frame(999.0),
            [digit(9), digit(9), digit(9), BLANK]
        );
        // 1000 itself is out of range.
        assert_eq!(
            temperature_frame(1000.0),
            [LETTER_E, DASH, DASH, DASH]
        );
    }
}
