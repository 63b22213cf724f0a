use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::TimelineError;

/// The `[start, stop]` replay interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(try_from = "WindowBounds")]
pub struct AnimationWindow {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
}

#[derive(Deserialize)]
struct WindowBounds {
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
}

impl TryFrom<WindowBounds> for AnimationWindow {
    type Error = TimelineError;

    fn try_from(bounds: WindowBounds) -> Result<Self, Self::Error> {
        AnimationWindow::new(bounds.start, bounds.stop)
    }
}

impl AnimationWindow {
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<Self, TimelineError> {
        if start >= stop {
            return Err(TimelineError::InvalidWindow { start, stop });
        }
        Ok(Self { start, stop })
    }

    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Result<Self, TimelineError> {
        Self::new(start, start + length)
    }

    /// Window over a data range; `None` for an empty or zero-length range.
    pub fn from_span(span: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Option<Self> {
        let (start, stop) = span?;
        Self::new(start, stop).ok()
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.stop
    }

    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }

    pub fn covers(&self, span: (DateTime<Utc>, DateTime<Utc>)) -> bool {
        self.contains(span.0) && self.contains(span.1)
    }
}
