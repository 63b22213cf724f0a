mod builtin;
mod error;
mod loader;
mod types;

pub use builtin::sample_log;
pub use error::DatasetError;
pub use loader::BUILTIN;
pub use types::{AttitudeRow, FlightLog, FlightModeRow, PositionRow, SetpointRow, Timestamped};
