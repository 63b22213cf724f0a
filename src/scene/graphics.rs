use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ModelAsset {
    pub uri: String,
    #[serde(default)]
    pub minimum_pixel_size: u32,
    #[serde(default = "one")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_scale: Option<f64>,
}

impl ModelAsset {
    pub fn aircraft() -> Self {
        Self {
            uri: "/assets/models/Cesium_Air.glb".into(),
            minimum_pixel_size: 8,
            scale: 1.0,
            maximum_scale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct BillboardStyle {
    pub image: String,
    #[serde(default = "one")]
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub clamp_to_ground: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PathStyle {
    #[serde(default = "one")]
    pub resolution: f64,
    #[serde(default = "default_path_color")]
    pub color: String,
    #[serde(default = "default_path_width")]
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_power: Option<f64>,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            resolution: one(),
            color: default_path_color(),
            width: default_path_width(),
            glow_power: None,
        }
    }
}

fn one() -> f64 {
    1.0
}

fn default_path_color() -> String {
    "yellow".into()
}

fn default_path_width() -> f64 {
    10.0
}
