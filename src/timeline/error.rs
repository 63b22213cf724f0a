use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("row {index}: invalid timestamp {value:?}: {source}")]
    Timestamp {
        index: usize,
        value: String,
        source: chrono::ParseError,
    },
    #[error("row {index}: timestamp {timestamp} does not follow {previous}")]
    NonMonotonic {
        index: usize,
        timestamp: DateTime<Utc>,
        previous: DateTime<Utc>,
    },
    #[error("row {index}: quaternion has zero norm")]
    DegenerateQuaternion { index: usize },
    #[error("window start {start} is not before stop {stop}")]
    InvalidWindow {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },
}
