//! The single line of text that a run reports.

use std::io::Write;

use crate::RunMeasurement;
use crate::error::{Error, Result};

/// Text that precedes the elapsed seconds in a report line.
///
/// The label reads "1 10000000000" verbatim, independent of the loop bound actually counted to.
pub const REPORT_PREFIX: &str = "Counting to 1 10000000000 took ";

/// Text that follows the elapsed seconds in a report line.
pub const REPORT_SUFFIX: &str = " seconds.";

/// Writes the report line of `measurement`, terminated by a newline, and flushes the writer.
pub(crate) fn write_report(writer: &mut impl Write, measurement: &RunMeasurement) -> Result<()> {
    writeln!(writer, "{measurement}")?;
    writer.flush()?;

    Ok(())
}

/// Parses a report line, returning the elapsed seconds it carries.
///
/// A single trailing line terminator is tolerated. Everything else must match the report
/// shape exactly: [`REPORT_PREFIX`], a non-negative decimal number and [`REPORT_SUFFIX`].
///
/// # Errors
///
/// Returns [`Error::MalformedReport`] if the line does not have the report shape.
///
/// # Examples
///
/// ```
/// use timed_counter::parse_report_line;
///
/// let seconds = parse_report_line("Counting to 1 10000000000 took 0.25 seconds.\n").unwrap();
/// assert!((seconds - 0.25).abs() < f64::EPSILON);
///
/// assert!(parse_report_line("Counting to 1 10000000000 took soon seconds.").is_err());
/// ```
pub fn parse_report_line(line: &str) -> Result<f64> {
    let malformed = || Error::MalformedReport {
        line: line.to_string(),
    };

    let trimmed = line
        .strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));

    let number = trimmed
        .strip_prefix(REPORT_PREFIX)
        .and_then(|rest| rest.strip_suffix(REPORT_SUFFIX))
        .ok_or_else(malformed)?;

    let is_decimal = !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit() || c == '.')
        && number.chars().any(|c| c.is_ascii_digit());

    if !is_decimal {
        return Err(malformed());
    }

    number.parse::<f64>().map_err(|_parse_error| malformed())
}
