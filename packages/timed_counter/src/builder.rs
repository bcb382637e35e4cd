use crate::TimedCounter;
use crate::pal::PlatformFacade;

/// The loop bound used unless a different one is configured: one billion.
pub const DEFAULT_LOOP_BOUND: u64 = 1_000_000_000;

/// Builder for configuring a [`TimedCounter`].
///
/// # Examples
///
/// ```
/// use timed_counter::TimedCounter;
///
/// let counter = TimedCounter::builder().loop_bound(1_000).build();
/// assert_eq!(counter.loop_bound(), 1_000);
/// ```
#[derive(Debug)]
#[must_use]
pub struct TimedCounterBuilder {
    loop_bound: u64,
    platform: PlatformFacade,
}

impl TimedCounterBuilder {
    pub(crate) fn new() -> Self {
        Self {
            loop_bound: DEFAULT_LOOP_BOUND,
            platform: PlatformFacade::real(),
        }
    }

    /// Sets the exclusive upper bound of the counted range.
    ///
    /// The counter visits every value in `1..loop_bound`. A bound of 0 or 1 yields an empty
    /// range, leaving the counter at its initial value of zero.
    pub fn loop_bound(mut self, loop_bound: u64) -> Self {
        self.loop_bound = loop_bound;
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Creates the configured counter.
    #[must_use]
    pub fn build(self) -> TimedCounter {
        TimedCounter::new_with(self.loop_bound, self.platform)
    }
}
