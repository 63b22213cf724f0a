mod document;
mod graphics;
mod renderer;

pub use document::{
    Cartesian, ClockDocument, EntityDocument, FlightModeIntervalDocument, OrientationDocument,
    OrientationIntervalDocument, PositionDocument, PositionSampleDocument, QuaternionDocument,
    SceneDocument, SetpointIntervalDocument,
};
pub use graphics::{BillboardStyle, ModelAsset, PathStyle};
pub use renderer::{EntityOrientation, EntityPosition, EntitySpec, Graphics, Renderer};
