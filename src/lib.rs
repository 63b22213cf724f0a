//! Flight-log replay on a 3D globe: builds time-indexed position, attitude,
//! flight-mode and setpoint tracks from a vehicle log and serves them, with
//! playback control, to a browser-side globe renderer.

pub mod dataset;
pub mod playback;
pub mod scene;
pub mod timeline;
pub mod views;
pub mod web;
