use std::sync::Arc;
use tokio::sync::Mutex;

use crate::playback::{KeyboardHub, PlaybackSession};
use crate::views::{View, ViewRegistry};

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub views: Arc<ViewRegistry>,
    pub keyboard: Arc<KeyboardHub>,
    /// The active view's playback; replacing it releases the previous
    /// view's keyboard subscription.
    pub session: Arc<Mutex<Option<PlaybackSession>>>,
}

impl AppState {
    pub fn new(config: Config, views: ViewRegistry) -> Self {
        Self {
            config: Arc::new(config),
            views: Arc::new(views),
            keyboard: KeyboardHub::new(),
            session: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts a playback session for `view`, ending the current one.
    /// Returns `false` for views without a clock.
    pub async fn activate(&self, view: &View) -> bool {
        let Some(clock) = view.clock() else {
            return false;
        };
        let mut session = self.session.lock().await;
        // End the old session first so only one listener is ever attached.
        *session = None;
        *session = Some(PlaybackSession::start(view.name(), &clock, &self.keyboard));
        true
    }
}
