use thiserror::Error;

/// Why a position could not be obtained.
///
/// Returned once from [`PositionStream::start`][crate::PositionStream::start];
/// during watching the same values are only reported to
/// [`PositionObserver::on_watch_error`][crate::PositionObserver::on_watch_error].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("location permission denied; enable location access")]
    PermissionDenied,

    #[error("location information is unavailable")]
    Unavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("unknown location error: {0}")]
    Unknown(String),
}

/// Failure inside a [`FixSink`][crate::FixSink].  Never escapes the stream;
/// it is logged and the fix is still delivered.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("fix sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fix sink CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("fix sink rejected record: {0}")]
    Rejected(String),
}

pub type TrackingResult<T> = Result<T, PositionError>;
