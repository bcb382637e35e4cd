#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Counts to one billion in a tight loop and reports how long that took.
//!
//! The core functionality includes:
//! - [`TimedCounter`] - Runs the counting loop between two monotonic clock readings
//! - [`RunMeasurement`] - The start, end and elapsed time of one run, plus the counter state
//! - [`parse_report_line`] - Reads back the elapsed seconds from a report line
//!
//! A run produces exactly one line of output:
//!
//! ```text
//! Counting to 1 10000000000 took 0.41293 seconds.
//! ```
//!
//! The `count_to_billion` binary in this package performs a single run with the default loop
//! bound and writes the line to standard output.
//!
//! # Simple usage
//!
//! ```no_run
//! # fn main() -> Result<(), timed_counter::Error> {
//! let measurement = timed_counter::count_to_one_billion()?;
//! assert_eq!(measurement.final_value(), 999_999_999);
//! # Ok(())
//! # }
//! ```
//!
//! # Shorter runs
//!
//! The loop bound can be lowered, which is mostly useful for tests:
//!
//! ```
//! use timed_counter::TimedCounter;
//!
//! let counter = TimedCounter::builder().loop_bound(10).build();
//! let measurement = counter.measure();
//!
//! assert_eq!(measurement.final_value(), 9);
//! println!("{measurement}");
//! ```
//!
//! # Logging
//!
//! Runs emit `tracing` events at debug level when the loop starts and finishes. The package
//! does not install a subscriber itself; the binary installs one that writes to standard
//! error so that standard output only ever carries the report line.

mod builder;
mod counter;
mod error;
mod measurement;
mod pal;
mod report;

pub use builder::*;
pub use counter::TimedCounter;
pub use error::Error;
pub use measurement::RunMeasurement;
pub use report::{REPORT_PREFIX, REPORT_SUFFIX, parse_report_line};

/// Counts to one billion and writes the report line to standard output.
///
/// # Errors
///
/// Returns [`Error::Write`] if standard output cannot be written to.
pub fn count_to_one_billion() -> Result<RunMeasurement, Error> {
    TimedCounter::new().run()
}
