use chrono::{DateTime, Utc};
use nalgebra::Vector3;

use super::error::TimelineError;
use super::sample::{collect_samples, ensure_monotonic, Geodetic, Sample};
use super::time::seconds_between;
use crate::dataset::PositionRow;

/// Height kept between the take-off point and the terrain below it.
pub const TAKEOFF_CLEARANCE_M: f64 = 2.0;

/// Altitude offset that puts the logged take-off altitude `clearance_m`
/// above the terrain height at the take-off point.
pub fn takeoff_altitude_offset(
    ground_height_m: f64,
    takeoff_altitude_m: f64,
    clearance_m: f64,
) -> f64 {
    ground_height_m - takeoff_altitude_m + clearance_m
}

/// Ordered position samples.
///
/// The track hands its raw samples to the renderer, which interpolates them
/// itself. [`PositionTrack::position_at`] mirrors that for point queries:
/// linear interpolation of the earth-fixed coordinates between the two
/// bracketing samples, and no extrapolation outside the sampled range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionTrack {
    samples: Vec<Sample<Geodetic>>,
}

impl PositionTrack {
    pub fn from_samples(samples: Vec<Sample<Geodetic>>) -> Result<Self, TimelineError> {
        ensure_monotonic(&samples)?;
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample<Geodetic>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.samples.first()?.timestamp, self.samples.last()?.timestamp))
    }

    pub fn sample_at(&self, t: DateTime<Utc>) -> Option<&Geodetic> {
        self.samples
            .binary_search_by_key(&t, |s| s.timestamp)
            .ok()
            .map(|idx| &self.samples[idx].value)
    }

    /// Earth-fixed position at `t` in meters, `None` outside the sampled range.
    pub fn position_at(&self, t: DateTime<Utc>) -> Option<Vector3<f64>> {
        let (first, last) = self.span()?;
        if t < first || t > last {
            return None;
        }

        let idx = self.samples.partition_point(|s| s.timestamp <= t);
        let before = &self.samples[idx - 1];
        let Some(after) = self.samples.get(idx) else {
            return Some(before.value.to_ecef());
        };
        if before.timestamp == t {
            return Some(before.value.to_ecef());
        }

        let fraction =
            seconds_between(before.timestamp, t) / seconds_between(before.timestamp, after.timestamp);
        Some(before.value.to_ecef().lerp(&after.value.to_ecef(), fraction))
    }
}

/// Builds a position track from `(timestamp, lon, lat, alt)` rows, adding
/// `altitude_offset_m` to every altitude.
pub fn build_position_track(
    rows: &[PositionRow],
    altitude_offset_m: f64,
) -> Result<PositionTrack, TimelineError> {
    let samples = collect_samples(rows, |_, row| {
        Ok(Geodetic::new(row.1, row.2, row.3).with_altitude_offset(altitude_offset_m))
    })?;
    Ok(PositionTrack { samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::time::parse_timestamp;
    use approx::assert_relative_eq;

    fn ts(s: &str) -> DateTime<Utc> {
        parse_timestamp(s).unwrap()
    }

    fn two_rows() -> Vec<PositionRow> {
        vec![
            PositionRow("2019-05-13T16:38:49Z".into(), 151.0, -33.0, 100.0),
            PositionRow("2019-05-13T16:38:59Z".into(), 151.01, -33.0, 110.0),
        ]
    }

    #[test]
    fn offset_is_applied_to_every_sample() {
        let track = build_position_track(&two_rows(), 5.0).unwrap();

        let first = track.sample_at(ts("2019-05-13T16:38:49Z")).unwrap();
        let second = track.sample_at(ts("2019-05-13T16:38:59Z")).unwrap();
        assert_eq!(first.altitude_m, 105.0);
        assert_eq!(second.altitude_m, 115.0);
        assert_eq!(second.longitude_deg, 151.01);
        assert_eq!(track.sample_at(ts("2019-05-13T16:38:54Z")), None);
    }

    #[test]
    fn no_position_outside_the_sampled_range() {
        let track = build_position_track(&two_rows(), 5.0).unwrap();
        assert!(track.position_at(ts("2019-05-13T16:38:48Z")).is_none());
        assert!(track.position_at(ts("2019-05-13T16:39:00Z")).is_none());
        assert!(track.position_at(ts("2019-05-13T16:38:49Z")).is_some());
        assert!(track.position_at(ts("2019-05-13T16:38:59Z")).is_some());
    }

    #[test]
    fn interpolates_between_samples() {
        let track = build_position_track(&two_rows(), 0.0).unwrap();
        let a = Geodetic::new(151.0, -33.0, 100.0).to_ecef();
        let b = Geodetic::new(151.01, -33.0, 110.0).to_ecef();

        let mid = track.position_at(ts("2019-05-13T16:38:54Z")).unwrap();
        assert_relative_eq!(mid, (a + b) / 2.0, epsilon = 1e-6);

        let quarter = track.position_at(ts("2019-05-13T16:38:51.5Z")).unwrap();
        assert_relative_eq!(quarter, a + (b - a) * 0.25, epsilon = 1e-6);
    }

    #[test]
    fn offset_is_linear() {
        let offset = 37.5;
        let shifted = build_position_track(&two_rows(), offset).unwrap();
        let base = build_position_track(&two_rows(), 0.0).unwrap();
        let shifted_later: Vec<_> = base
            .samples()
            .iter()
            .map(|s| Sample {
                timestamp: s.timestamp,
                value: s.value.with_altitude_offset(offset),
            })
            .collect();

        for (a, b) in shifted.samples().iter().zip(&shifted_later) {
            assert_eq!(a.timestamp, b.timestamp);
            assert_relative_eq!(a.value.altitude_m, b.value.altitude_m, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_rows_make_an_empty_track() {
        let track = build_position_track(&[], 10.0).unwrap();
        assert!(track.is_empty());
        assert_eq!(track.span(), None);
        assert!(track.position_at(ts("2019-05-13T16:38:49Z")).is_none());
    }

    #[test]
    fn takeoff_offset_lifts_log_altitude_above_terrain() {
        let offset = takeoff_altitude_offset(300.0, 20.952, TAKEOFF_CLEARANCE_M);
        assert_relative_eq!(20.952 + offset, 302.0, epsilon = 1e-9);
    }

    #[test]
    fn unordered_samples_are_rejected() {
        let t = ts("2019-05-13T16:38:49Z");
        let samples = vec![
            Sample {
                timestamp: t,
                value: Geodetic::new(0.0, 0.0, 0.0),
            },
            Sample {
                timestamp: t,
                value: Geodetic::new(0.1, 0.0, 0.0),
            },
        ];
        assert!(matches!(
            PositionTrack::from_samples(samples),
            Err(TimelineError::NonMonotonic { index: 1, .. })
        ));
    }
}
