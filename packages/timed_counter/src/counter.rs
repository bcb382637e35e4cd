//! The timed counting loop.

use std::hint::black_box;
use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::report::write_report;
use crate::{RunMeasurement, TimedCounterBuilder};

/// Counts from 1 up to (but excluding) a loop bound and measures how long that takes.
///
/// Each run captures a start timestamp, assigns every value of the range `1..loop_bound` to a
/// counter in turn, captures an end timestamp and produces a [`RunMeasurement`]. Nothing else
/// happens per iteration. The default loop bound is one billion.
///
/// # Examples
///
/// ```
/// use timed_counter::TimedCounter;
///
/// let counter = TimedCounter::builder().loop_bound(10).build();
///
/// let mut output = Vec::new();
/// let measurement = counter.run_to(&mut output).unwrap();
///
/// assert_eq!(measurement.final_value(), 9);
/// assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
/// ```
#[derive(Debug)]
pub struct TimedCounter {
    loop_bound: u64,
    platform: PlatformFacade,
}

impl TimedCounter {
    /// Creates a counter with the default loop bound of one billion.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a counter with non-default settings.
    pub fn builder() -> TimedCounterBuilder {
        TimedCounterBuilder::new()
    }

    pub(crate) fn new_with(loop_bound: u64, platform: PlatformFacade) -> Self {
        Self {
            loop_bound,
            platform,
        }
    }

    /// The exclusive upper bound of the counted range.
    #[must_use]
    pub fn loop_bound(&self) -> u64 {
        self.loop_bound
    }

    /// Runs the counting loop once and returns its measurement without writing anything.
    #[must_use]
    pub fn measure(&self) -> RunMeasurement {
        debug!(loop_bound = self.loop_bound, "counting started");

        let start = self.platform.now();
        let final_value = count_up_to(self.loop_bound);
        let end = self.platform.now();

        let measurement = RunMeasurement::new(start, end, final_value, self.loop_bound);

        debug!(
            final_value,
            seconds = measurement.seconds(),
            "counting finished"
        );

        measurement
    }

    /// Runs the counting loop once and writes its report line to `writer`.
    ///
    /// Exactly one newline-terminated line is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`][crate::Error::Write] if the report line cannot be written.
    pub fn run_to(&self, writer: &mut impl Write) -> Result<RunMeasurement> {
        let measurement = self.measure();
        write_report(writer, &measurement)?;

        Ok(measurement)
    }

    /// Runs the counting loop once and writes its report line to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`][crate::Error::Write] if standard output cannot be written to.
    #[cfg_attr(test, mutants::skip)] // Output goes to the test harness, covered via run_to().
    pub fn run(&self) -> Result<RunMeasurement> {
        self.run_to(&mut io::stdout().lock())
    }
}

impl Default for TimedCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns each value of `1..loop_bound` to a counter and returns the last value assigned.
///
/// The assignment goes through `black_box` so the optimizer cannot collapse the loop.
fn count_up_to(loop_bound: u64) -> u64 {
    let mut number = 0_u64;

    for i in 1..loop_bound {
        number = black_box(i);
    }

    number
}
