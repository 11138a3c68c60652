use serde::{Deserialize, Serialize};

/// Top-level shell settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShellSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub tray: TraySettings,
}

/// Where new tabs start and where search queries go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub home_url: String,
    /// Query URL prefix; the percent-encoded query is appended verbatim.
    pub search_endpoint: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_endpoint: "https://www.google.com/search?q=".to_string(),
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Closing the window hides it to the tray instead of quitting.
    pub hide_on_close: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Searchpane".to_string(),
            width: 900,
            height: 670,
            hide_on_close: true,
        }
    }
}

/// System tray icon settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraySettings {
    pub enabled: bool,
    pub tooltip: String,
}

impl Default for TraySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            tooltip: "Searchpane".to_string(),
        }
    }
}
