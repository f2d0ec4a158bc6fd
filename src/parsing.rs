//! Parsing of host telemetry lines.
//!
//! The host sends one line per update over the serial link:
//!
//! ```text
//! <cpu_temp>,<gpu_temp>\n
//! ```
//!
//! Both fields are ASCII decimal floats. Fields after the second comma are
//! ignored. The two failure modes map one-to-one onto displayed error codes:
//! a missing separator is E-11, a non-numeric field is E-10.
//!
//! # Example
//!
//! ```rust
//! use segtherm::parsing::{parse_line, LineError};
//!
//! let reading = parse_line("45.3,62.0").unwrap();
//! assert_eq!(reading.cpu, 45.3);
//! assert_eq!(reading.gpu, 62.0);
//!
//! assert_eq!(parse_line("45.3"), Err(LineError::MissingSeparator));
//! assert_eq!(parse_line("abc,62.0"), Err(LineError::BadNumber));
//! ```

use crate::codes::ErrorCode;

/// One successfully parsed telemetry update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempReading {
    /// CPU temperature in degrees Celsius.
    pub cpu: f32,
    /// GPU temperature in degrees Celsius.
    pub gpu: f32,
}

/// Ways a received line can be malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineError {
    /// The line contained no comma separator.
    MissingSeparator,
    /// A field was present but did not parse as a float.
    BadNumber,
}

impl From<LineError> for ErrorCode {
    fn from(err: LineError) -> Self {
        match err {
            LineError::MissingSeparator => ErrorCode::Format,
            LineError::BadNumber => ErrorCode::Parse,
        }
    }
}

/// Parses one `"cpu,gpu"` line into a [`TempReading`].
///
/// Fields are trimmed before parsing; anything after the second field is
/// ignored.
pub fn parse_line(line: &str) -> Result<TempReading, LineError> {
    let mut fields = line.split(',');
    let cpu_field = fields.next().unwrap_or("");
    let gpu_field = fields.next().ok_or(LineError::MissingSeparator)?;

    let cpu = cpu_field
        .trim()
        .parse::<f32>()
        .map_err(|_| LineError::BadNumber)?;
    let gpu = gpu_field
        .trim()
        .parse::<f32>()
        .map_err(|_| LineError::BadNumber)?;

    Ok(TempReading { cpu, gpu })
}
