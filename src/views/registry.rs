use chrono::{DateTime, Utc};

use super::error::ViewError;
use super::types::ViewConfig;
use super::view::View;

#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: Vec<View>,
}

impl ViewRegistry {
    /// Builds each configured view. Views that fail are logged and skipped
    /// so one bad dataset does not take the others down.
    pub fn load(configs: &[ViewConfig], now: DateTime<Utc>) -> Self {
        let mut registry = ViewRegistry::default();

        for config in configs {
            let name = config.name.clone();
            match registry.insert(config.clone(), now) {
                Ok(()) => log::info!("Loaded view {} ({})", name, config.kind),
                Err(e) => log::warn!("Failed to load view {}: {}", name, e),
            }
        }

        registry
    }

    pub fn insert(&mut self, config: ViewConfig, now: DateTime<Utc>) -> Result<(), ViewError> {
        if self.get(&config.name).is_some() {
            return Err(ViewError::Duplicate(config.name));
        }
        let view = View::build(config, now)?;
        if !view.is_ready() {
            log::warn!("View {} is not ready and will render nothing", view.name());
        }
        self.views.push(view);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs(yaml: &str) -> Vec<ViewConfig> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn duplicate_and_broken_views_are_skipped() {
        let views = configs(
            r#"
- name: replay
  kind: replay
  origin: { longitude_deg: 151.210757, latitude_deg: -33.861338 }
- name: replay
  kind: replay
- name: broken
  kind: replay
  dataset: /nonexistent/log.yaml
- name: marker
  kind: billboard
  position: { longitude_deg: 151.210757, latitude_deg: -33.861338, altitude_m: 800 }
  billboard: { image: /assets/icons/rover.svg, scale: 0.1, width: 400, height: 400, clamp_to_ground: true }
"#,
        );
        let registry = ViewRegistry::load(&views, Utc::now());

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["replay", "marker"]);
        assert!(registry.get("replay").unwrap().is_ready());
        assert!(registry.get("broken").is_none());
    }

    #[test]
    fn insert_reports_duplicates() {
        let views = configs("- name: replay\n  kind: replay\n");
        let mut registry = ViewRegistry::load(&views, Utc::now());
        assert!(matches!(
            registry.insert(views[0].clone(), Utc::now()),
            Err(ViewError::Duplicate(name)) if name == "replay"
        ));
    }
}
