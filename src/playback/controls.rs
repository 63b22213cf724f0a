use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use super::clock::ClockSettings;

pub const RATE_STEP: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Spacebar" => Some(Key::Space),
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

/// Transport state of the active view. Direction is the sign of the
/// multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PlaybackState {
    pub multiplier: f64,
    pub should_animate: bool,
}

impl PlaybackState {
    pub fn new(clock: &ClockSettings) -> Self {
        Self {
            multiplier: clock.multiplier,
            should_animate: clock.should_animate,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.multiplier < 0.0
    }

    pub fn apply(&mut self, key: Key) {
        match key {
            Key::Space => self.should_animate = !self.should_animate,
            Key::ArrowLeft => self.multiplier = -self.multiplier.abs(),
            Key::ArrowRight => self.multiplier = self.multiplier.abs(),
            Key::ArrowUp => self.multiplier *= RATE_STEP,
            Key::ArrowDown => self.multiplier /= RATE_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state() -> PlaybackState {
        PlaybackState::new(&ClockSettings::default())
    }

    #[test]
    fn space_toggles_play_pause() {
        let mut s = state();
        assert!(!s.should_animate);
        s.apply(Key::Space);
        assert!(s.should_animate);
        s.apply(Key::Space);
        assert!(!s.should_animate);
    }

    #[test]
    fn arrows_force_direction_and_keep_magnitude() {
        let mut s = state();
        s.multiplier = 4.0;
        s.apply(Key::ArrowLeft);
        assert_eq!(s.multiplier, -4.0);
        assert!(s.is_reversed());
        s.apply(Key::ArrowLeft);
        assert_eq!(s.multiplier, -4.0);
        s.apply(Key::ArrowRight);
        assert_eq!(s.multiplier, 4.0);
    }

    #[test]
    fn up_and_down_scale_the_rate() {
        let mut s = state();
        s.apply(Key::ArrowUp);
        s.apply(Key::ArrowUp);
        assert_relative_eq!(s.multiplier, 2.25);
        s.apply(Key::ArrowDown);
        assert_relative_eq!(s.multiplier, 1.5);

        s.apply(Key::ArrowLeft);
        s.apply(Key::ArrowUp);
        assert_relative_eq!(s.multiplier, -2.25);
    }

    #[test]
    fn dom_key_names() {
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(Key::from_dom_key("Enter"), None);
        assert_eq!(Key::ArrowUp.to_string(), "arrow_up");
    }
}
