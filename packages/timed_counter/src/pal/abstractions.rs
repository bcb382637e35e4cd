use std::fmt::Debug;
use std::time::Instant;

#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Captures the current point in time from a monotonic clock.
    fn now(&self) -> Instant;
}
