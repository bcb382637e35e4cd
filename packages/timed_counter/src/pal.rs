//! Platform abstraction layer for the monotonic clock.
//!
//! The counter reads timestamps through [`PlatformFacade`], which dispatches either to the
//! real operating system clock or, in tests, to a mock that returns scripted instants.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
