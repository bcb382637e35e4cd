use std::time::Instant;

use crate::pal::Platform;

/// Reads the monotonic clock of the operating system via the Rust standard library.
#[derive(Debug)]
pub(crate) struct RealPlatform;

pub(crate) static REAL_PLATFORM: RealPlatform = RealPlatform;

impl Platform for RealPlatform {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
