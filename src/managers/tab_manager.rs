use tracing::debug;

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabId};

/// What happened to the active tab as a result of a close.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    /// A background tab was closed; the active tab is untouched.
    Unchanged,
    /// The active tab was closed and this sibling took over.
    ActivatedSibling(TabId),
    /// The last tab was closed and replaced by this fresh default tab.
    Replaced(TabId),
}

/// Trait defining the tab collection interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>) -> TabId;
    fn close_tab(&mut self, tab_id: &TabId) -> Result<CloseOutcome, TabError>;
    fn switch_tab(&mut self, tab_id: &TabId) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &TabId) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &TabId;
    fn tab_count(&self) -> usize;
    fn update_tab_url(&mut self, tab_id: &TabId, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &TabId, title: &str) -> Result<(), TabError>;
    fn mark_unread(&mut self, tab_id: &TabId) -> Result<(), TabError>;
}

/// In-memory tab collection in insertion order.
///
/// Never empty, and `active` always names a tab in `tabs`.
pub struct TabManager {
    tabs: Vec<Tab>,
    active: TabId,
    default_url: String,
}

impl TabManager {
    /// Starts with a single active tab at `default_url`.
    pub fn new(default_url: &str) -> Self {
        let first = Tab::new(default_url);
        let active = first.id.clone();
        Self {
            tabs: vec![first],
            active,
            default_url: default_url.to_string(),
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    fn find_index(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == tab_id)
    }

    fn tab_mut(&mut self, tab_id: &TabId) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| &t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

impl TabManagerTrait for TabManager {
    /// Appends a tab and makes it active. Returns the new tab's ID.
    fn create_tab(&mut self, url: Option<&str>) -> TabId {
        let tab = Tab::new(url.unwrap_or(&self.default_url));
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.active = id.clone();
        debug!(tab = %id, count = self.tabs.len(), "tab created");
        id
    }

    /// Removes a tab.
    ///
    /// Closing the active tab activates the previous sibling, or the next one
    /// when the closed tab was first. Closing the last tab replaces it with a
    /// fresh default tab.
    fn close_tab(&mut self, tab_id: &TabId) -> Result<CloseOutcome, TabError> {
        let idx = self
            .find_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        self.tabs.remove(idx);
        debug!(tab = %tab_id, remaining = self.tabs.len(), "tab closed");

        if self.tabs.is_empty() {
            let replacement = Tab::new(&self.default_url);
            let id = replacement.id.clone();
            self.tabs.push(replacement);
            self.active = id.clone();
            return Ok(CloseOutcome::Replaced(id));
        }

        if &self.active != tab_id {
            return Ok(CloseOutcome::Unchanged);
        }

        let sibling = idx.saturating_sub(1);
        let tab = &mut self.tabs[sibling];
        tab.unread = false;
        self.active = tab.id.clone();
        Ok(CloseOutcome::ActivatedSibling(self.active.clone()))
    }

    /// Makes `tab_id` active and clears its unread flag.
    fn switch_tab(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        let tab = self.tab_mut(tab_id)?;
        tab.unread = false;
        self.active = tab_id.clone();
        Ok(())
    }

    fn get_tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> &Tab {
        // `active` is kept in `tabs` by every mutation above.
        self.get_tab(&self.active)
            .unwrap_or_else(|| &self.tabs[0])
    }

    fn active_tab_id(&self) -> &TabId {
        &self.active
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_url(&mut self, tab_id: &TabId, url: &str) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.url = url.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &TabId, title: &str) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.title = title.to_string();
        Ok(())
    }

    /// Flags a background tab whose content changed. The active tab is never
    /// marked.
    fn mark_unread(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        let is_active = &self.active == tab_id;
        let tab = self.tab_mut(tab_id)?;
        if !is_active {
            tab.unread = true;
        }
        Ok(())
    }
}
