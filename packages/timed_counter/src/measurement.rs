//! The result of a single timed counting run.

use std::fmt;
use std::time::{Duration, Instant};

use crate::report::{REPORT_PREFIX, REPORT_SUFFIX};

/// Timestamps and counter state captured by one run of a [`TimedCounter`][crate::TimedCounter].
///
/// A measurement is created when the run starts, completed when the loop exits and is
/// typically consumed immediately by writing its report line. Formatting a measurement with
/// `{}` yields exactly that report line, without a trailing newline.
///
/// # Examples
///
/// ```
/// use timed_counter::TimedCounter;
///
/// let counter = TimedCounter::builder().loop_bound(10).build();
/// let measurement = counter.measure();
///
/// assert_eq!(measurement.final_value(), 9);
/// assert!(measurement.to_string().starts_with("Counting to 1 10000000000 took "));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunMeasurement {
    start: Instant,
    end: Instant,
    final_value: u64,
    loop_bound: u64,
}

impl RunMeasurement {
    pub(crate) fn new(start: Instant, end: Instant, final_value: u64, loop_bound: u64) -> Self {
        Self {
            start,
            end,
            final_value,
            loop_bound,
        }
    }

    /// The instant captured immediately before the loop was entered.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// The instant captured immediately after the loop exited.
    #[must_use]
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Time elapsed between [`start()`][Self::start] and [`end()`][Self::end].
    ///
    /// Never negative: if the clock reported an end before the start, the duration is zero.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// The elapsed time as floating point seconds, the unit used in the report line.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.duration().as_secs_f64()
    }

    /// The last value assigned to the counter before the loop exited.
    ///
    /// This is `loop_bound - 1` for any loop bound of at least 2 and zero otherwise,
    /// as the counter starts from zero and the counted range `1..loop_bound` is empty.
    #[must_use]
    pub fn final_value(&self) -> u64 {
        self.final_value
    }

    /// The exclusive upper bound of the counted range.
    #[must_use]
    pub fn loop_bound(&self) -> u64 {
        self.loop_bound
    }
}

impl fmt::Display for RunMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPORT_PREFIX}{}{REPORT_SUFFIX}", self.seconds())
    }
}
