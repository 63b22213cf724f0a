mod clock;
mod configurator;
mod controls;
mod format;
mod keyboard;
mod session;

pub use clock::{ClockRange, ClockSettings, SHUTTLE_RING_TICKS};
pub use configurator::PlaybackClockConfigurator;
pub use controls::{Key, PlaybackState, RATE_STEP};
pub use format::{format_elapsed, ElapsedTimeFormatter};
pub use keyboard::{KeyboardHub, KeyboardSubscription};
pub use session::PlaybackSession;
