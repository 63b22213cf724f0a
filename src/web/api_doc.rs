use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::playback::{KeyRequest, PlaybackStatus};
use super::api::views::{StateResponse, ViewSummary};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::views::list_views,
        super::api::views::get_scene,
        super::api::views::get_state,
        super::api::playback::activate,
        super::api::playback::press_key,
        super::api::playback::status,
    ),
    components(
        schemas(
            ViewSummary,
            StateResponse,
            KeyRequest,
            PlaybackStatus,
            ErrorResponse,
            crate::scene::SceneDocument,
            crate::playback::PlaybackState,
            crate::playback::ClockRange,
        )
    ),
    info(
        title = "Flight Replay API",
        description = "Scenes, track state and playback control for flight-log replay views",
        version = "0.1.0"
    ),
    tags(
        (name = "views", description = "Configured views and their tracks"),
        (name = "playback", description = "Active view and keyboard transport")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/views",
            "/api/views/{name}/scene",
            "/api/views/{name}/state",
            "/api/playback/activate/{name}",
            "/api/playback/key",
            "/api/playback",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
