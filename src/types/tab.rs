use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title shown until the page reports its own.
pub const PLACEHOLDER_TITLE: &str = "New Tab";

/// Opaque tab identifier. Generated once per tab and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One browsing session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub unread: bool,
}

impl Tab {
    pub fn new(url: &str) -> Self {
        Self {
            id: TabId::generate(),
            url: url.to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            unread: false,
        }
    }
}
