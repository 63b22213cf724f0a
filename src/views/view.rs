use chrono::{DateTime, Utc};

use super::error::ViewError;
use super::types::{FlightPathConfig, ReplayConfig, ViewConfig, ViewKind};
use crate::dataset::FlightLog;
use crate::playback::{ClockSettings, ElapsedTimeFormatter, PlaybackClockConfigurator};
use crate::scene::{
    EntityOrientation, EntityPosition, EntitySpec, Graphics, Renderer, SceneDocument,
};
use crate::timeline::{
    AnimationWindow, Geodetic, PositionTrack, Sample, Timeline, TimelineState,
};

#[derive(Debug, Clone)]
pub struct View {
    config: ViewConfig,
    content: ViewContent,
}

#[derive(Debug, Clone)]
enum ViewContent {
    Replay(Timeline),
    Fixed(Geodetic),
    FlightPath {
        track: PositionTrack,
        window: AnimationWindow,
    },
}

impl View {
    /// Builds every track the view needs. `now` anchors views whose window
    /// starts when they are opened.
    pub fn build(config: ViewConfig, now: DateTime<Utc>) -> Result<Self, ViewError> {
        let content = match &config.kind {
            ViewKind::Replay(replay) => ViewContent::Replay(build_replay(replay)?),
            ViewKind::StaticModel(placement) => ViewContent::Fixed(placement.position),
            ViewKind::Billboard(billboard) => ViewContent::Fixed(billboard.position),
            ViewKind::FlightPath(path) => {
                let (track, window) = build_flight_path(path, now)?;
                ViewContent::FlightPath { track, window }
            }
        };
        Ok(Self { config, content })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn window(&self) -> Option<AnimationWindow> {
        match &self.content {
            ViewContent::Replay(timeline) => timeline.window,
            ViewContent::FlightPath { window, .. } => Some(*window),
            ViewContent::Fixed(_) => None,
        }
    }

    pub fn clock(&self) -> Option<ClockSettings> {
        match &self.config.kind {
            ViewKind::Replay(replay) => Some(replay.clock),
            ViewKind::FlightPath(path) => Some(path.clock),
            ViewKind::StaticModel(_) | ViewKind::Billboard(_) => None,
        }
    }

    /// Formatter for the clock's elapsed-time label: relative to the boot
    /// time when one is configured, else to the start of the window.
    pub fn time_formatter(&self) -> Option<ElapsedTimeFormatter> {
        let window = self.window()?;
        let boot = match &self.config.kind {
            ViewKind::Replay(replay) => replay.boot_time,
            _ => None,
        };
        Some(ElapsedTimeFormatter::new(boot.unwrap_or(window.start)))
    }

    pub fn is_ready(&self) -> bool {
        match &self.content {
            ViewContent::Replay(timeline) => timeline.is_ready(),
            ViewContent::Fixed(_) | ViewContent::FlightPath { .. } => true,
        }
    }

    pub fn state_at(&self, time: DateTime<Utc>) -> TimelineState {
        match &self.content {
            ViewContent::Replay(timeline) => timeline.state_at(time),
            ViewContent::Fixed(position) => TimelineState {
                time,
                position: Some(position.to_ecef()),
                orientation: None,
                flight_mode: None,
                setpoint: None,
            },
            ViewContent::FlightPath { track, .. } => TimelineState {
                time,
                position: track.position_at(time),
                orientation: None,
                flight_mode: None,
                setpoint: None,
            },
        }
    }

    /// Hands the view to `renderer`. Returns `false` and touches nothing when
    /// the view is not ready.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> bool {
        if !self.is_ready() {
            log::debug!("view {} is not ready, nothing to render", self.name());
            return false;
        }

        match (&self.config.kind, &self.content) {
            (ViewKind::Replay(replay), ViewContent::Replay(timeline)) => {
                render_replay(self.name(), replay, timeline, renderer)
            }
            (ViewKind::StaticModel(placement), ViewContent::Fixed(position)) => {
                renderer.attach_entity(EntitySpec::new(
                    self.name(),
                    EntityPosition::Fixed(*position),
                    Graphics::Model(placement.model.clone()),
                ));
                true
            }
            (ViewKind::Billboard(billboard), ViewContent::Fixed(position)) => {
                renderer.attach_entity(EntitySpec::new(
                    self.name(),
                    EntityPosition::Fixed(*position),
                    Graphics::Billboard(billboard.billboard.clone()),
                ));
                true
            }
            (ViewKind::FlightPath(path), ViewContent::FlightPath { track, window }) => {
                PlaybackClockConfigurator::new(path.clock).configure(renderer, window);
                let mut entity = EntitySpec::new(
                    self.name(),
                    EntityPosition::Sampled(track.clone()),
                    Graphics::Model(path.model.clone()),
                );
                entity.orientation = EntityOrientation::AlongVelocity;
                entity.availability = Some(*window);
                entity.path = path.path.clone();
                renderer.attach_entity(entity);
                true
            }
            _ => false,
        }
    }

    pub fn scene(&self) -> Option<SceneDocument> {
        let mut scene = SceneDocument::default();
        self.render(&mut scene).then_some(scene)
    }
}

fn build_replay(config: &ReplayConfig) -> Result<Timeline, ViewError> {
    let log = FlightLog::load(config.dataset.as_deref())?;
    Ok(Timeline::build(
        &log,
        config.origin.as_ref(),
        config.altitude.offset_m(),
        config.window,
    )?)
}

fn render_replay<R: Renderer + ?Sized>(
    name: &str,
    config: &ReplayConfig,
    timeline: &Timeline,
    renderer: &mut R,
) -> bool {
    let (Some(window), Some(orientation)) = (timeline.window, timeline.orientation.as_ref())
    else {
        return false;
    };

    PlaybackClockConfigurator::new(config.clock)
        .with_boot(config.boot_time)
        .configure(renderer, &window);

    let mut entity = EntitySpec::new(
        name,
        EntityPosition::Sampled(timeline.position.clone()),
        Graphics::Model(config.model.clone()),
    );
    entity.orientation = EntityOrientation::Intervals(orientation.clone());
    entity.availability = Some(window);
    entity.path = config.path.clone();
    entity.flight_modes = Some(timeline.flight_modes.clone());
    entity.setpoints = Some(timeline.setpoints.clone());
    renderer.attach_entity(entity);
    true
}

fn build_flight_path(
    config: &FlightPathConfig,
    now: DateTime<Utc>,
) -> Result<(PositionTrack, AnimationWindow), ViewError> {
    let start = config.start.unwrap_or(now);
    let window = AnimationWindow::starting_at(
        start,
        chrono::Duration::from_std(config.window_length)?,
    )?;

    let origin = Geodetic {
        altitude_m: 0.0,
        ..config.origin
    };
    let destination = Geodetic {
        longitude_deg: origin.longitude_deg + config.longitude_delta_deg,
        ..origin
    };
    let track = PositionTrack::from_samples(vec![
        Sample {
            timestamp: start,
            value: origin,
        },
        Sample {
            timestamp: start + chrono::Duration::from_std(config.leg)?,
            value: destination,
        },
    ])?;

    Ok((track, window))
}
