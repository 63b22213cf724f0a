use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scene::{Cartesian, QuaternionDocument, SceneDocument};
use crate::timeline::{AnimationWindow, ControlSetpoint};
use crate::views::View;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewSummary {
    pub name: String,
    pub title: String,
    pub kind: String,
    pub ready: bool,
    pub window: Option<AnimationWindow>,
}

impl From<&View> for ViewSummary {
    fn from(view: &View) -> Self {
        Self {
            name: view.name().to_string(),
            title: view.config().title().to_string(),
            kind: view.config().kind.to_string(),
            ready: view.is_ready(),
            window: view.window(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StateQuery {
    #[serde(deserialize_with = "deserialize_datetime")]
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StateResponse {
    pub time: DateTime<Utc>,
    pub label: Option<String>,
    pub position: Option<Cartesian>,
    pub orientation: Option<QuaternionDocument>,
    pub flight_mode: Option<String>,
    pub setpoint: Option<ControlSetpoint>,
}

#[utoipa::path(
    get,
    path = "/api/views",
    responses(
        (status = 200, description = "Configured views", body = Vec<ViewSummary>)
    ),
    tag = "views"
)]
pub async fn list_views(State(state): State<AppState>) -> Json<Vec<ViewSummary>> {
    Json(state.views.iter().map(ViewSummary::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/views/{name}/scene",
    params(
        ("name" = String, Path, description = "View name")
    ),
    responses(
        (status = 200, description = "Scene for the globe renderer", body = SceneDocument),
        (status = 404, description = "Unknown view", body = ErrorResponse),
        (status = 409, description = "View data incomplete", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn get_scene(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<SceneDocument>> {
    let view = find_view(&state, &name)?;
    let scene = view.scene().ok_or(ApiError::Conflict("view_not_ready"))?;
    Ok(Json(scene))
}

#[utoipa::path(
    get,
    path = "/api/views/{name}/state",
    params(
        ("name" = String, Path, description = "View name"),
        ("time" = String, Query, description = "Instant to sample (RFC3339)")
    ),
    responses(
        (status = 200, description = "Track values at the instant", body = StateResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 404, description = "Unknown view", body = ErrorResponse)
    ),
    tag = "views"
)]
pub async fn get_state(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<StateQuery>,
) -> ApiResult<Json<StateResponse>> {
    let view = find_view(&state, &name)?;
    let sampled = view.state_at(query.time);

    Ok(Json(StateResponse {
        time: sampled.time,
        label: view.time_formatter().map(|f| f.format(query.time)),
        position: sampled.position.map(Cartesian::from),
        orientation: sampled.orientation.as_ref().map(QuaternionDocument::from),
        flight_mode: sampled.flight_mode.map(|mode| mode.to_string()),
        setpoint: sampled.setpoint,
    }))
}

pub(super) fn find_view<'a>(state: &'a AppState, name: &str) -> ApiResult<&'a View> {
    state.views.get(name).ok_or(ApiError::NotFound("view_not_found"))
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
