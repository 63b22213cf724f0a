use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::TimelineError;
use super::sample::{collect_samples, ensure_monotonic, ControlSetpoint, FlightMode, Sample};
use crate::dataset::{FlightModeRow, SetpointRow, Timestamped};

/// A value held on the half-open interval `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval<V> {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub value: V,
}

impl<V> Interval<V> {
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.stop
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepTrack<V> {
    intervals: Vec<Interval<V>>,
}

impl<V> Default for StepTrack<V> {
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }
}

impl<V> StepTrack<V> {
    /// Sample `i` holds until sample `i + 1`. The last sample has no successor
    /// and therefore no interval. Timestamps must strictly increase.
    pub fn from_samples(samples: Vec<Sample<V>>) -> Result<Self, TimelineError> {
        ensure_monotonic(&samples)?;
        let mut intervals = Vec::with_capacity(samples.len().saturating_sub(1));
        let mut iter = samples.into_iter().peekable();

        while let Some(current) = iter.next() {
            if let Some(next) = iter.peek() {
                intervals.push(Interval {
                    start: current.timestamp,
                    stop: next.timestamp,
                    value: current.value,
                });
            }
        }

        Ok(Self { intervals })
    }

    pub fn intervals(&self) -> &[Interval<V>] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.intervals.first()?.start, self.intervals.last()?.stop))
    }

    /// The value holding at `t`, or `None` outside every interval.
    pub fn value_at(&self, t: DateTime<Utc>) -> Option<&V> {
        let idx = self.intervals.partition_point(|iv| iv.start <= t);
        let interval = self.intervals.get(idx.checked_sub(1)?)?;
        interval.contains(t).then_some(&interval.value)
    }
}

/// Builds a step function from any timestamped rows. Both the current value
/// and the closing boundary of each interval come from `rows`.
pub fn build_step_track<R, V>(
    rows: &[R],
    value: impl FnMut(usize, &R) -> Result<V, TimelineError>,
) -> Result<StepTrack<V>, TimelineError>
where
    R: Timestamped,
{
    collect_samples(rows, value).and_then(StepTrack::from_samples)
}

pub fn build_flight_mode_track(
    rows: &[FlightModeRow],
) -> Result<StepTrack<FlightMode>, TimelineError> {
    build_step_track(rows, |_, row| Ok(FlightMode(row.1.clone())))
}

pub fn build_setpoint_track(
    rows: &[SetpointRow],
) -> Result<StepTrack<ControlSetpoint>, TimelineError> {
    build_step_track(rows, |_, row| {
        Ok(ControlSetpoint {
            x: row.1,
            y: row.2,
            z: row.3,
            r: row.4,
        })
    })
}
