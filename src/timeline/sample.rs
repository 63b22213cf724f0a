use chrono::{DateTime, Utc};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::error::TimelineError;
use super::time::parse_timestamp;
use crate::dataset::Timestamped;

// WGS-84
const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
const ECCENTRICITY_SQ: f64 = 0.00669437999014;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample<T> {
    pub timestamp: DateTime<Utc>,
    pub value: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Geodetic {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    #[serde(default)]
    pub altitude_m: f64,
}

impl Geodetic {
    pub fn new(longitude_deg: f64, latitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            altitude_m,
        }
    }

    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        Some(Self::new(lon, lat, altitude_m.unwrap_or(0.0)))
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn with_altitude_offset(self, offset_m: f64) -> Self {
        Self {
            altitude_m: self.altitude_m + offset_m,
            ..self
        }
    }

    /// Earth-centred, earth-fixed position in meters.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let lat = self.lat_rad();
        let lon = self.lon_rad();
        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let n = SEMI_MAJOR_AXIS_M / (1.0 - ECCENTRICITY_SQ * sin_lat * sin_lat).sqrt();
        Vector3::new(
            (n + self.altitude_m) * cos_lat * lon.cos(),
            (n + self.altitude_m) * cos_lat * lon.sin(),
            (n * (1.0 - ECCENTRICITY_SQ) + self.altitude_m) * sin_lat,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FlightMode(pub String);

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ControlSetpoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
}

/// Pairs each row's value with its parsed timestamp. Timestamps must strictly increase.
pub fn collect_samples<R, T>(
    rows: &[R],
    mut value: impl FnMut(usize, &R) -> Result<T, TimelineError>,
) -> Result<Vec<Sample<T>>, TimelineError>
where
    R: Timestamped,
{
    let mut samples: Vec<Sample<T>> = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let raw = row.timestamp();
        let timestamp = parse_timestamp(raw).map_err(|source| TimelineError::Timestamp {
            index,
            value: raw.to_string(),
            source,
        })?;

        if let Some(previous) = samples.last().map(|s| s.timestamp) {
            if timestamp <= previous {
                return Err(TimelineError::NonMonotonic {
                    index,
                    timestamp,
                    previous,
                });
            }
        }

        samples.push(Sample {
            timestamp,
            value: value(index, row)?,
        });
    }

    Ok(samples)
}

/// Checks an already-parsed sequence for strictly increasing timestamps.
pub fn ensure_monotonic<T>(samples: &[Sample<T>]) -> Result<(), TimelineError> {
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(TimelineError::NonMonotonic {
                index: index + 1,
                timestamp: pair[1].timestamp,
                previous: pair[0].timestamp,
            });
        }
    }
    Ok(())
}
