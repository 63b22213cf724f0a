mod error;
mod registry;
mod types;
mod view;

pub use error::ViewError;
pub use registry::ViewRegistry;
pub use types::{
    AltitudeConfig, BillboardConfig, FlightPathConfig, ModelPlacementConfig, ReplayConfig,
    ViewConfig, ViewKind,
};
pub use view::View;
