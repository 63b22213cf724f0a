mod builder;
mod error;
mod orientation;
mod position;
mod sample;
mod step;
mod time;
mod window;

pub use builder::{Timeline, TimelineState};
pub use error::TimelineError;
pub use orientation::{build_orientation_track, FrameCorrection, RawQuaternion};
pub use position::{
    build_position_track, takeoff_altitude_offset, PositionTrack, TAKEOFF_CLEARANCE_M,
};
pub use sample::{ControlSetpoint, FlightMode, Geodetic, Sample};
pub use step::{build_flight_mode_track, build_setpoint_track, build_step_track, Interval, StepTrack};
pub use time::parse_timestamp;
pub use window::AnimationWindow;
