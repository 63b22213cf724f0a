use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

pub const SHUTTLE_RING_TICKS: [f64; 17] = [
    0.01, 0.02, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 100.0, 300.0, 600.0,
    1000.0,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClockRange {
    /// Wrap to the start when playing forward, stop at the start in reverse.
    #[default]
    LoopStop,
    Clamped,
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ClockSettings {
    #[serde(default)]
    pub range: ClockRange,
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default)]
    pub should_animate: bool,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            range: ClockRange::default(),
            multiplier: default_multiplier(),
            should_animate: false,
        }
    }
}
