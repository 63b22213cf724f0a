use std::sync::{Arc, Mutex, PoisonError};

use super::clock::ClockSettings;
use super::controls::PlaybackState;
use super::keyboard::{KeyboardHub, KeyboardSubscription};

/// Playback of the active view. Owns the view's keyboard subscription, so the
/// key handler lives exactly as long as the session.
pub struct PlaybackSession {
    view: String,
    state: Arc<Mutex<PlaybackState>>,
    _keys: KeyboardSubscription,
}

impl PlaybackSession {
    pub fn start(view: &str, clock: &ClockSettings, hub: &Arc<KeyboardHub>) -> Self {
        let state = Arc::new(Mutex::new(PlaybackState::new(clock)));
        let handler_state = Arc::clone(&state);
        let view_name = view.to_string();

        let keys = hub.subscribe(move |key| {
            let mut state = handler_state.lock().unwrap_or_else(PoisonError::into_inner);
            state.apply(key);
            log::debug!(
                "{}: {} -> multiplier {}, animating {}",
                view_name,
                key,
                state.multiplier,
                state.should_animate
            );
        });

        log::info!("Playback session started for view {}", view);
        Self {
            view: view.to_string(),
            state,
            _keys: keys,
        }
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn state(&self) -> PlaybackState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        log::info!("Playback session ended for view {}", self.view);
    }
}
