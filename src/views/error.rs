use thiserror::Error;

use crate::dataset::DatasetError;
use crate::timeline::TimelineError;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),
    #[error("duration out of range: {0}")]
    Duration(#[from] chrono::OutOfRangeError),
    #[error("duplicate view name: {0}")]
    Duplicate(String),
}
