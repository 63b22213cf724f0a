use nalgebra::UnitQuaternion;

use super::graphics::{BillboardStyle, ModelAsset, PathStyle};
use crate::playback::{ClockSettings, ElapsedTimeFormatter};
use crate::timeline::{AnimationWindow, ControlSetpoint, FlightMode, Geodetic, PositionTrack, StepTrack};

pub trait Renderer {
    fn set_clock_window(&mut self, window: &AnimationWindow, clock: &ClockSettings);
    fn set_playback_presets(&mut self, presets: &[f64]);
    fn set_time_formatter(&mut self, formatter: ElapsedTimeFormatter);
    fn attach_entity(&mut self, entity: EntitySpec);
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityPosition {
    Fixed(Geodetic),
    Sampled(PositionTrack),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityOrientation {
    Default,
    Intervals(StepTrack<UnitQuaternion<f64>>),
    /// Nose along the direction of travel of the sampled position.
    AlongVelocity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Graphics {
    Model(ModelAsset),
    Billboard(BillboardStyle),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpec {
    pub name: String,
    pub position: EntityPosition,
    pub orientation: EntityOrientation,
    pub availability: Option<AnimationWindow>,
    pub graphics: Graphics,
    pub path: Option<PathStyle>,
    pub flight_modes: Option<StepTrack<FlightMode>>,
    pub setpoints: Option<StepTrack<ControlSetpoint>>,
}

impl EntitySpec {
    pub fn new(name: &str, position: EntityPosition, graphics: Graphics) -> Self {
        Self {
            name: name.to_string(),
            position,
            orientation: EntityOrientation::Default,
            availability: None,
            graphics,
            path: None,
            flight_modes: None,
            setpoints: None,
        }
    }
}
