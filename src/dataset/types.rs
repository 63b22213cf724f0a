use serde::{Deserialize, Serialize};

pub trait Timestamped {
    fn timestamp(&self) -> &str;
}

/// `(timestamp, longitude_deg, latitude_deg, altitude_m)`
#[derive(Debug, Clone, Deserialize, PartialEq, Serialize)]
pub struct PositionRow(pub String, pub f64, pub f64, pub f64);

/// `(timestamp, qx, qy, qz, qw)` in the vehicle's local frame.
#[derive(Debug, Clone, Deserialize, PartialEq, Serialize)]
pub struct AttitudeRow(pub String, pub f64, pub f64, pub f64, pub f64);

/// `(timestamp, mode label)`
#[derive(Debug, Clone, Deserialize, PartialEq, Serialize)]
pub struct FlightModeRow(pub String, pub String);

/// `(timestamp, x, y, z, r)`
#[derive(Debug, Clone, Deserialize, PartialEq, Serialize)]
pub struct SetpointRow(pub String, pub f64, pub f64, pub f64, pub f64);

macro_rules! impl_timestamped {
    ($($row:ty),*) => {
        $(impl Timestamped for $row {
            fn timestamp(&self) -> &str {
                &self.0
            }
        })*
    };
}

impl_timestamped!(PositionRow, AttitudeRow, FlightModeRow, SetpointRow);

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct FlightLog {
    #[serde(default)]
    pub position: Vec<PositionRow>,
    #[serde(default)]
    pub attitude: Vec<AttitudeRow>,
    #[serde(default)]
    pub flight_modes: Vec<FlightModeRow>,
    #[serde(default)]
    pub manual_control_setpoints: Vec<SetpointRow>,
}

impl FlightLog {
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
            && self.attitude.is_empty()
            && self.flight_modes.is_empty()
            && self.manual_control_setpoints.is_empty()
    }
}
