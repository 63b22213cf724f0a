use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::playback::{Key, PlaybackState};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::api::views::find_view;
use crate::web::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct KeyRequest {
    pub key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaybackStatus {
    pub view: String,
    pub state: PlaybackState,
    pub reversed: bool,
}

#[utoipa::path(
    post,
    path = "/api/playback/activate/{name}",
    params(
        ("name" = String, Path, description = "View name")
    ),
    responses(
        (status = 200, description = "View is now active", body = PlaybackStatus),
        (status = 404, description = "Unknown view", body = ErrorResponse),
        (status = 409, description = "View has no clock", body = ErrorResponse)
    ),
    tag = "playback"
)]
pub async fn activate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<PlaybackStatus>> {
    let view = find_view(&state, &name)?;
    if !state.activate(view).await {
        return Err(ApiError::Conflict("view_has_no_clock"));
    }
    current_status(&state).await.map(Json)
}

#[utoipa::path(
    post,
    path = "/api/playback/key",
    request_body = KeyRequest,
    responses(
        (status = 200, description = "Key applied to the active view", body = PlaybackStatus),
        (status = 400, description = "Unsupported key", body = ErrorResponse),
        (status = 409, description = "No active view", body = ErrorResponse)
    ),
    tag = "playback"
)]
pub async fn press_key(
    State(state): State<AppState>,
    Json(request): Json<KeyRequest>,
) -> ApiResult<Json<PlaybackStatus>> {
    let key = Key::from_dom_key(&request.key)
        .ok_or_else(|| ApiError::Validation(format!("unsupported key {:?}", request.key)))?;

    // Hold the session while dispatching so activation cannot swap it mid-press.
    let session = state.session.lock().await;
    if session.is_none() {
        return Err(ApiError::Conflict("no_active_view"));
    }
    let delivered = state.keyboard.dispatch(key);
    log::debug!("{} delivered to {} subscriber(s)", key, delivered);
    drop(session);

    current_status(&state).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/playback",
    responses(
        (status = 200, description = "Active view playback", body = PlaybackStatus),
        (status = 409, description = "No active view", body = ErrorResponse)
    ),
    tag = "playback"
)]
pub async fn status(State(state): State<AppState>) -> ApiResult<Json<PlaybackStatus>> {
    current_status(&state).await.map(Json)
}

async fn current_status(state: &AppState) -> ApiResult<PlaybackStatus> {
    let session = state.session.lock().await;
    let session = session
        .as_ref()
        .ok_or(ApiError::Conflict("no_active_view"))?;
    let playback = session.state();
    Ok(PlaybackStatus {
        view: session.view().to_string(),
        state: playback,
        reversed: playback.is_reversed(),
    })
}
