use chrono::{DateTime, Utc};

use super::clock::{ClockSettings, SHUTTLE_RING_TICKS};
use super::format::ElapsedTimeFormatter;
use crate::scene::Renderer;
use crate::timeline::AnimationWindow;

/// Pushes the replay window, transport presets and time label format to a
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClockConfigurator {
    pub clock: ClockSettings,
    pub presets: Vec<f64>,
    /// Reference for the elapsed-time label; the window start when unset.
    pub boot: Option<DateTime<Utc>>,
}

impl PlaybackClockConfigurator {
    pub fn new(clock: ClockSettings) -> Self {
        Self {
            clock,
            presets: SHUTTLE_RING_TICKS.to_vec(),
            boot: None,
        }
    }

    pub fn with_boot(mut self, boot: Option<DateTime<Utc>>) -> Self {
        self.boot = boot;
        self
    }

    pub fn configure<R: Renderer + ?Sized>(&self, renderer: &mut R, window: &AnimationWindow) {
        renderer.set_clock_window(window, &self.clock);
        renderer.set_playback_presets(&self.presets);
        renderer.set_time_formatter(ElapsedTimeFormatter::new(
            self.boot.unwrap_or(window.start),
        ));
    }
}
