use chrono::{DateTime, Utc};
use nalgebra::{UnitQuaternion, Vector3};

use super::error::TimelineError;
use super::orientation::{build_orientation_track, FrameCorrection};
use super::position::{build_position_track, PositionTrack};
use super::sample::{ControlSetpoint, FlightMode, Geodetic};
use super::step::{build_flight_mode_track, build_setpoint_track, StepTrack};
use super::window::AnimationWindow;
use crate::dataset::FlightLog;

#[derive(Debug, Clone)]
pub struct Timeline {
    pub position: PositionTrack,
    /// `None` until a take-off origin is known.
    pub orientation: Option<StepTrack<UnitQuaternion<f64>>>,
    pub flight_modes: StepTrack<FlightMode>,
    pub setpoints: StepTrack<ControlSetpoint>,
    /// The fixed window if one was given, else the span of the position data.
    pub window: Option<AnimationWindow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    pub time: DateTime<Utc>,
    pub position: Option<Vector3<f64>>,
    pub orientation: Option<UnitQuaternion<f64>>,
    pub flight_mode: Option<FlightMode>,
    pub setpoint: Option<ControlSetpoint>,
}

impl Timeline {
    pub fn build(
        log: &FlightLog,
        origin: Option<&Geodetic>,
        altitude_offset_m: f64,
        window: Option<AnimationWindow>,
    ) -> Result<Self, TimelineError> {
        let position = build_position_track(&log.position, altitude_offset_m)?;
        let orientation = origin
            .map(|origin| build_orientation_track(&log.attitude, &FrameCorrection::at(origin)))
            .transpose()?;
        let flight_modes = build_flight_mode_track(&log.flight_modes)?;
        let setpoints = build_setpoint_track(&log.manual_control_setpoints)?;
        let window = window.or_else(|| AnimationWindow::from_span(position.span()));

        let timeline = Timeline {
            position,
            orientation,
            flight_modes,
            setpoints,
            window,
        };
        timeline.log_coverage();
        Ok(timeline)
    }

    /// All four tracks are non-empty and the replay window is known.
    pub fn is_ready(&self) -> bool {
        self.window.is_some()
            && !self.position.is_empty()
            && self.orientation.as_ref().is_some_and(|o| !o.is_empty())
            && !self.flight_modes.is_empty()
            && !self.setpoints.is_empty()
    }

    pub fn state_at(&self, time: DateTime<Utc>) -> TimelineState {
        TimelineState {
            time,
            position: self.position.position_at(time),
            orientation: self
                .orientation
                .as_ref()
                .and_then(|o| o.value_at(time))
                .copied(),
            flight_mode: self.flight_modes.value_at(time).cloned(),
            setpoint: self.setpoints.value_at(time).copied(),
        }
    }

    fn log_coverage(&self) {
        let Some(window) = self.window else {
            log::debug!("timeline has no replay window yet");
            return;
        };

        let spans = [
            ("position", self.position.span()),
            ("orientation", self.orientation.as_ref().and_then(|o| o.span())),
            ("flight_modes", self.flight_modes.span()),
            ("setpoints", self.setpoints.span()),
        ];
        for (name, span) in spans {
            if let Some(span) = span.filter(|span| !window.covers(*span)) {
                log::debug!(
                    "{} track [{}, {}] extends past window [{}, {}]",
                    name,
                    span.0,
                    span.1,
                    window.start,
                    window.stop
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{sample_log, FlightModeRow};
    use crate::timeline::time::parse_timestamp;

    fn takeoff() -> Geodetic {
        Geodetic::new(151.210757, -33.861338, 300.0)
    }

    #[test]
    fn sample_log_builds_a_ready_timeline() {
        let timeline = Timeline::build(&sample_log(), Some(&takeoff()), 0.0, None).unwrap();
        assert!(timeline.is_ready());

        let window = timeline.window.unwrap();
        assert_eq!(window.start, parse_timestamp("2019-05-13T16:38:49.599987+00:00").unwrap());
        assert_eq!(window.stop, parse_timestamp("2019-05-13T16:46:41.002275+00:00").unwrap());
        assert_eq!(timeline.position.len(), 11);
        assert_eq!(timeline.orientation.as_ref().unwrap().len(), 10);
        assert_eq!(timeline.flight_modes.len(), 5);
        assert_eq!(timeline.setpoints.len(), 5);
    }

    #[test]
    fn missing_origin_is_not_ready() {
        let timeline = Timeline::build(&sample_log(), None, 0.0, None).unwrap();
        assert!(timeline.orientation.is_none());
        assert!(!timeline.is_ready());
    }

    #[test]
    fn any_empty_track_is_not_ready() {
        let mut log = sample_log();
        log.flight_modes.truncate(1);
        let timeline = Timeline::build(&log, Some(&takeoff()), 0.0, None).unwrap();
        assert!(timeline.flight_modes.is_empty());
        assert!(!timeline.is_ready());
    }

    #[test]
    fn explicit_window_wins_over_data_span() {
        let window = AnimationWindow::new(
            parse_timestamp("2019-05-13T16:40:00Z").unwrap(),
            parse_timestamp("2019-05-13T16:41:00Z").unwrap(),
        )
        .unwrap();
        let timeline = Timeline::build(&sample_log(), Some(&takeoff()), 0.0, Some(window)).unwrap();
        assert_eq!(timeline.window, Some(window));
    }

    #[test]
    fn malformed_flight_mode_fails_the_build() {
        let mut log = sample_log();
        log.flight_modes[2] = FlightModeRow("13/05/2019 16:40".into(), "Mission".into());
        assert!(matches!(
            Timeline::build(&log, Some(&takeoff()), 0.0, None),
            Err(TimelineError::Timestamp { index: 2, .. })
        ));
    }

    #[test]
    fn state_reports_each_channel() {
        let timeline = Timeline::build(&sample_log(), Some(&takeoff()), 0.0, None).unwrap();
        let t = parse_timestamp("2019-05-13T16:41:00Z").unwrap();
        let state = timeline.state_at(t);

        assert_eq!(state.flight_mode, Some(FlightMode("Mission".into())));
        assert_eq!(state.setpoint.map(|s| s.z), Some(0.5));
        assert!(state.position.is_some());
        assert!(state.orientation.is_some());

        let after = timeline.state_at(parse_timestamp("2019-05-13T17:00:00Z").unwrap());
        assert_eq!(after.flight_mode, None);
        assert_eq!(after.position, None);
        assert_eq!(after.orientation, None);
    }
}
