use chrono::{DateTime, Utc};
use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;
use utoipa::ToSchema;

use super::graphics::{BillboardStyle, ModelAsset, PathStyle};
use super::renderer::{EntityOrientation, EntityPosition, EntitySpec, Graphics, Renderer};
use crate::playback::{ClockRange, ClockSettings, ElapsedTimeFormatter};
use crate::timeline::{AnimationWindow, ControlSetpoint, StepTrack};

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SceneDocument {
    pub clock: Option<ClockDocument>,
    pub shuttle_ring: Vec<f64>,
    pub time_formatter: Option<ElapsedTimeFormatter>,
    pub entities: Vec<EntityDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClockDocument {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub current: DateTime<Utc>,
    pub range: ClockRange,
    pub multiplier: f64,
    pub should_animate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3<f64>> for Cartesian {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Quaternion in `x, y, z, w` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct QuaternionDocument {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl From<&UnitQuaternion<f64>> for QuaternionDocument {
    fn from(q: &UnitQuaternion<f64>) -> Self {
        Self {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PositionSampleDocument {
    pub time: DateTime<Utc>,
    #[serde(flatten)]
    pub cartesian: Cartesian,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PositionDocument {
    Fixed { cartesian: Cartesian },
    Sampled { samples: Vec<PositionSampleDocument> },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct OrientationIntervalDocument {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub quaternion: QuaternionDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrientationDocument {
    Default,
    Intervals { intervals: Vec<OrientationIntervalDocument> },
    AlongVelocity,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FlightModeIntervalDocument {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub mode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SetpointIntervalDocument {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub setpoint: ControlSetpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EntityDocument {
    pub name: String,
    pub availability: Option<AnimationWindow>,
    pub position: PositionDocument,
    pub orientation: OrientationDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billboard: Option<BillboardStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathStyle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flight_modes: Vec<FlightModeIntervalDocument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub setpoints: Vec<SetpointIntervalDocument>,
}

impl Renderer for SceneDocument {
    fn set_clock_window(&mut self, window: &AnimationWindow, clock: &ClockSettings) {
        self.clock = Some(ClockDocument {
            start: window.start,
            stop: window.stop,
            current: window.start,
            range: clock.range,
            multiplier: clock.multiplier,
            should_animate: clock.should_animate,
        });
    }

    fn set_playback_presets(&mut self, presets: &[f64]) {
        self.shuttle_ring = presets.to_vec();
    }

    fn set_time_formatter(&mut self, formatter: ElapsedTimeFormatter) {
        self.time_formatter = Some(formatter);
    }

    fn attach_entity(&mut self, entity: EntitySpec) {
        self.entities.push(EntityDocument::from(entity));
    }
}

impl From<EntitySpec> for EntityDocument {
    fn from(entity: EntitySpec) -> Self {
        let position = match entity.position {
            EntityPosition::Fixed(geodetic) => PositionDocument::Fixed {
                cartesian: geodetic.to_ecef().into(),
            },
            EntityPosition::Sampled(track) => PositionDocument::Sampled {
                samples: track
                    .samples()
                    .iter()
                    .map(|s| PositionSampleDocument {
                        time: s.timestamp,
                        cartesian: s.value.to_ecef().into(),
                    })
                    .collect(),
            },
        };

        let orientation = match entity.orientation {
            EntityOrientation::Default => OrientationDocument::Default,
            EntityOrientation::AlongVelocity => OrientationDocument::AlongVelocity,
            EntityOrientation::Intervals(track) => OrientationDocument::Intervals {
                intervals: track
                    .intervals()
                    .iter()
                    .map(|iv| OrientationIntervalDocument {
                        start: iv.start,
                        stop: iv.stop,
                        quaternion: (&iv.value).into(),
                    })
                    .collect(),
            },
        };

        let (model, billboard) = match entity.graphics {
            Graphics::Model(model) => (Some(model), None),
            Graphics::Billboard(billboard) => (None, Some(billboard)),
        };

        EntityDocument {
            name: entity.name,
            availability: entity.availability,
            position,
            orientation,
            model,
            billboard,
            path: entity.path,
            flight_modes: entity
                .flight_modes
                .map(|track| {
                    track
                        .intervals()
                        .iter()
                        .map(|iv| FlightModeIntervalDocument {
                            start: iv.start,
                            stop: iv.stop,
                            mode: iv.value.to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            setpoints: entity
                .setpoints
                .map(setpoint_intervals)
                .unwrap_or_default(),
        }
    }
}

fn setpoint_intervals(track: StepTrack<ControlSetpoint>) -> Vec<SetpointIntervalDocument> {
    track
        .intervals()
        .iter()
        .map(|iv| SetpointIntervalDocument {
            start: iv.start,
            stop: iv.stop,
            setpoint: iv.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{build_position_track, Geodetic, Interval};
    use crate::dataset::PositionRow;

    #[test]
    fn sampled_position_serializes_as_ecef_samples() {
        let track = build_position_track(
            &[
                PositionRow("2019-05-13T16:38:49Z".into(), 0.0, 0.0, 0.0),
                PositionRow("2019-05-13T16:38:59Z".into(), 90.0, 0.0, 0.0),
            ],
            0.0,
        )
        .unwrap();
        let mut scene = SceneDocument::default();
        scene.attach_entity(EntitySpec::new(
            "vehicle",
            EntityPosition::Sampled(track),
            Graphics::Model(ModelAsset::aircraft()),
        ));

        let json = serde_json::to_value(&scene).unwrap();
        let position = &json["entities"][0]["position"];
        assert_eq!(position["type"], "sampled");
        assert_eq!(position["samples"][0]["x"], 6_378_137.0);
        assert_eq!(position["samples"][0]["time"], "2019-05-13T16:38:49Z");
        assert!(position["samples"][1]["y"].as_f64().unwrap() > 6_378_136.0);
        assert_eq!(json["entities"][0]["orientation"]["type"], "default");
        assert!(json["entities"][0].get("billboard").is_none());
    }

    #[test]
    fn orientation_intervals_use_xyzw() {
        let q = UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(0.5, 0.5, 0.5, 0.5));
        let doc = QuaternionDocument::from(&q);
        assert_eq!((doc.x, doc.y, doc.z, doc.w), (0.5, 0.5, 0.5, 0.5));

        let start = crate::timeline::parse_timestamp("2019-05-13T16:38:49Z").unwrap();
        let stop = crate::timeline::parse_timestamp("2019-05-13T16:38:50Z").unwrap();
        let track = StepTrack::from_samples(vec![
            crate::timeline::Sample { timestamp: start, value: q },
            crate::timeline::Sample { timestamp: stop, value: q },
        ])
        .unwrap();
        assert_eq!(
            track.intervals(),
            &[Interval {
                start,
                stop,
                value: q
            }]
        );

        let mut spec = EntitySpec::new(
            "vehicle",
            EntityPosition::Fixed(Geodetic::new(0.0, 0.0, 0.0)),
            Graphics::Model(ModelAsset::aircraft()),
        );
        spec.orientation = EntityOrientation::Intervals(track);
        let entity = EntityDocument::from(spec);
        assert_eq!(
            entity.orientation,
            OrientationDocument::Intervals {
                intervals: vec![OrientationIntervalDocument {
                    start,
                    stop,
                    quaternion: doc
                }]
            }
        );
    }
}
