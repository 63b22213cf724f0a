pub mod error;
pub mod playback;
pub mod views;

#[cfg(test)]
pub(crate) fn test_state() -> crate::web::state::AppState {
    use crate::views::ViewRegistry;
    use crate::web::config::Config;

    let config = Config::from_str(include_str!("../../../config.example.yaml")).unwrap();
    let views = ViewRegistry::load(&config.views, chrono::Utc::now());
    crate::web::state::AppState::new(config, views)
}
