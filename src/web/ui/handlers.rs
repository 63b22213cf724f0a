use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::web::state::AppState;

use super::templates::{IndexTemplate, ViewLink, ViewerTemplate};

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let active = state
        .session
        .lock()
        .await
        .as_ref()
        .map(|s| s.view().to_string());
    let views = state
        .views
        .iter()
        .map(|view| ViewLink {
            name: view.name().to_string(),
            title: view.config().title().to_string(),
            kind: view.config().kind.to_string(),
            ready: view.is_ready(),
        })
        .collect();
    IndexTemplate { views, active }
}

pub async fn viewer(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ViewerTemplate, StatusCode> {
    let view = state.views.get(&name).ok_or(StatusCode::NOT_FOUND)?;
    Ok(ViewerTemplate {
        name: view.name().to_string(),
        title: view.config().title().to_string(),
    })
}
