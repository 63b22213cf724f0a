use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::views::ViewRegistry;

use super::api::playback as playback_handlers;
use super::api::views as view_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets_dir = state.config.web.assets_dir.clone();

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::index))
        .route("/viewer/{name}", get(ui_handlers::viewer))
        // View API endpoints
        .route("/api/views", get(view_handlers::list_views))
        .route("/api/views/{name}/scene", get(view_handlers::get_scene))
        .route("/api/views/{name}/state", get(view_handlers::get_state))
        // Playback API endpoints
        .route("/api/playback", get(playback_handlers::status))
        .route(
            "/api/playback/activate/{name}",
            post(playback_handlers::activate),
        )
        .route("/api/playback/key", post(playback_handlers::press_key))
        // Models and icons
        .nest_service("/assets", ServeDir::new(assets_dir))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let views = ViewRegistry::load(&config.views, chrono::Utc::now());
    log::info!("Loaded {} of {} views", views.len(), config.views.len());

    let default_view = config.default_view.clone();
    let state = AppState::new(config, views);

    if let Some(name) = default_view {
        match state.views.get(&name) {
            Some(view) => {
                if !state.activate(view).await {
                    log::warn!("Default view {} has no clock, nothing activated", name);
                }
            }
            None => log::warn!("Default view {} failed to load", name),
        }
    }

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
