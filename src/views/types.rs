use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use strum_macros::Display;

use crate::playback::{ClockRange, ClockSettings};
use crate::scene::{BillboardStyle, ModelAsset, PathStyle};
use crate::timeline::{takeoff_altitude_offset, AnimationWindow, Geodetic, TAKEOFF_CLEARANCE_M};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewConfig {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub kind: ViewKind,
}

impl ViewConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewKind {
    Replay(ReplayConfig),
    StaticModel(ModelPlacementConfig),
    Billboard(BillboardConfig),
    /// A scripted two-point flight east of an origin.
    FlightPath(FlightPathConfig),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplayConfig {
    /// Flight log file; the compiled-in sample log when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// Take-off origin for the attitude frame correction. Without it the
    /// view is not ready.
    #[serde(default)]
    pub origin: Option<Geodetic>,
    #[serde(default)]
    pub altitude: AltitudeConfig,
    /// Fixed replay window; the span of the position data when unset.
    #[serde(default)]
    pub window: Option<AnimationWindow>,
    #[serde(default)]
    pub boot_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock: ClockSettings,
    #[serde(default = "ModelAsset::aircraft")]
    pub model: ModelAsset,
    #[serde(default = "default_trail")]
    pub path: Option<PathStyle>,
}

fn default_trail() -> Option<PathStyle> {
    Some(PathStyle::default())
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeConfig {
    Offset(f64),
    /// Put the logged take-off altitude `clearance_m` above the terrain.
    Takeoff {
        altitude_m: f64,
        ground_height_m: f64,
        #[serde(default = "default_clearance")]
        clearance_m: f64,
    },
}

fn default_clearance() -> f64 {
    TAKEOFF_CLEARANCE_M
}

impl Default for AltitudeConfig {
    fn default() -> Self {
        AltitudeConfig::Offset(0.0)
    }
}

impl AltitudeConfig {
    pub fn offset_m(&self) -> f64 {
        match *self {
            AltitudeConfig::Offset(offset) => offset,
            AltitudeConfig::Takeoff {
                altitude_m,
                ground_height_m,
                clearance_m,
            } => takeoff_altitude_offset(ground_height_m, altitude_m, clearance_m),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelPlacementConfig {
    pub position: Geodetic,
    pub model: ModelAsset,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BillboardConfig {
    pub position: Geodetic,
    pub billboard: BillboardStyle,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlightPathConfig {
    pub origin: Geodetic,
    #[serde(default = "default_longitude_delta")]
    pub longitude_delta_deg: f64,
    #[serde(default = "default_leg", deserialize_with = "deserialize_duration")]
    pub leg: Duration,
    #[serde(default = "default_window_length", deserialize_with = "deserialize_duration")]
    pub window_length: Duration,
    /// Start of the window; the time the view is built when unset.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default = "default_flight_path_clock")]
    pub clock: ClockSettings,
    pub model: ModelAsset,
    #[serde(default)]
    pub path: Option<PathStyle>,
}

fn default_longitude_delta() -> f64 {
    0.1
}

fn default_leg() -> Duration {
    Duration::from_secs(500)
}

fn default_window_length() -> Duration {
    Duration::from_secs(1000)
}

fn default_flight_path_clock() -> ClockSettings {
    ClockSettings {
        range: ClockRange::Clamped,
        multiplier: 10.0,
        should_animate: false,
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}
