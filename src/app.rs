//! App core for searchpane.
//!
//! Application-lifecycle root: owns the settings and hands configuration to
//! the components built at startup.

use tracing::info;

use crate::managers::navigation_controller::{NavigationConfig, TabNavigationController};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::surface::BrowsingSurface;
use crate::types::settings::ShellSettings;

pub struct App {
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates the app and loads settings from `config_path`, or from the
    /// platform config directory when `None`. Unreadable settings fall back
    /// to defaults.
    pub fn new(config_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load_or_default();
        info!(path = settings_engine.get_config_path(), "settings loaded");
        Self { settings_engine }
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    pub fn navigation_config(&self) -> NavigationConfig {
        let general = &self.settings().general;
        NavigationConfig {
            home_url: general.home_url.clone(),
            search_endpoint: general.search_endpoint.clone(),
        }
    }

    /// Builds the tab controller over `surface`; this loads the first tab.
    pub fn controller<S: BrowsingSurface>(&self, surface: S) -> TabNavigationController<S> {
        TabNavigationController::new(surface, self.navigation_config())
    }
}
