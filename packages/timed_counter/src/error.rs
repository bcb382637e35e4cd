use std::io;

use thiserror::Error;

/// Errors that can occur when running the timed counter or reading back its report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The report line could not be written to the output.
    #[error("failed to write report line: {0}")]
    Write(#[from] io::Error),

    /// A line that was supposed to be a report did not have the expected shape.
    #[error("malformed report line: '{line}'")]
    MalformedReport {
        /// The line that failed to parse, as received.
        line: String,
    },
}

/// A specialized `Result` type for timed counter operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn write_error_wraps_io_error() {
        let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();

        assert!(matches!(error, Error::Write(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(error.to_string(), "failed to write report line: pipe closed");
    }

    #[test]
    fn malformed_report_mentions_line() {
        let error = Error::MalformedReport {
            line: "Counted nothing".to_string(),
        };

        assert_eq!(error.to_string(), "malformed report line: 'Counted nothing'");
    }
}
