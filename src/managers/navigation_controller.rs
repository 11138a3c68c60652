//! Tab and navigation controller.
//!
//! Mediates between UI actions (click a tab, close a tab, submit the address
//! bar, back/forward/reload) and a single shared [`BrowsingSurface`] that
//! shows the active tab. Surface commands are fire-and-forget; their effects
//! come back through [`TabNavigationController::on_surface_event`].

use tracing::{debug, warn};

use crate::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};
use crate::services::address::normalize_input;
use crate::surface::BrowsingSurface;
use crate::types::errors::SurfaceError;
use crate::types::surface::{NavigationState, SurfaceEvent};
use crate::types::tab::{Tab, TabId};

/// Addresses the controller needs from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub home_url: String,
    pub search_endpoint: String,
}

pub struct TabNavigationController<S: BrowsingSurface> {
    surface: S,
    tabs: TabManager,
    search_endpoint: String,
    state: NavigationState,
}

impl<S: BrowsingSurface> TabNavigationController<S> {
    /// Creates the controller with one default tab and loads it.
    pub fn new(surface: S, config: NavigationConfig) -> Self {
        let mut controller = Self {
            surface,
            tabs: TabManager::new(&config.home_url),
            search_endpoint: config.search_endpoint,
            state: NavigationState::default(),
        };
        let home = controller.tabs.default_url().to_string();
        controller.issue("load", |s| s.load_address(&home));
        controller
    }

    /// Opens a new tab at the default address and switches to it.
    pub fn create_tab(&mut self) -> TabId {
        let id = self.tabs.create_tab(None);
        let home = self.tabs.default_url().to_string();
        self.issue("load", |s| s.load_address(&home));
        id
    }

    /// Opens `url` in a new active tab. Used for pages that ask for a new window.
    pub fn open_tab(&mut self, url: &str) -> TabId {
        let id = self.tabs.create_tab(Some(url));
        self.issue("load", |s| s.load_address(url));
        id
    }

    /// Switches to `id` and reloads its stored address. Unknown ids are ignored.
    pub fn switch_tab(&mut self, id: &TabId) {
        if let Err(e) = self.tabs.switch_tab(id) {
            debug!(error = %e, "switch ignored");
            return;
        }
        let url = self.tabs.get_active_tab().url.clone();
        self.issue("load", |s| s.load_address(&url));
    }

    /// Closes `id`. Unknown ids are ignored.
    pub fn close_tab(&mut self, id: &TabId) {
        match self.tabs.close_tab(id) {
            Ok(CloseOutcome::Unchanged) => {}
            Ok(CloseOutcome::ActivatedSibling(_)) | Ok(CloseOutcome::Replaced(_)) => {
                let url = self.tabs.get_active_tab().url.clone();
                self.issue("load", |s| s.load_address(&url));
            }
            Err(e) => debug!(error = %e, "close ignored"),
        }
    }

    /// Loads address bar input in the active tab and returns the resolved
    /// address. The tab's url changes only once the load stops.
    pub fn navigate(&mut self, raw_input: &str) -> Option<String> {
        let address = normalize_input(raw_input, &self.search_endpoint)?;
        debug!(input = raw_input, %address, "navigate");
        self.issue("load", |s| s.load_address(&address));
        Some(address)
    }

    /// Goes back if the surface currently can. Returns whether a command was issued.
    pub fn go_back(&mut self) -> bool {
        if !self.surface.can_go_back() {
            return false;
        }
        self.issue("back", |s| s.go_back());
        true
    }

    /// Goes forward if the surface currently can. Returns whether a command was issued.
    pub fn go_forward(&mut self) -> bool {
        if !self.surface.can_go_forward() {
            return false;
        }
        self.issue("forward", |s| s.go_forward());
        true
    }

    pub fn refresh(&mut self) {
        self.issue("reload", |s| s.reload());
    }

    /// Applies an event fired by the surface for the displayed tab.
    pub fn on_surface_event(&mut self, event: SurfaceEvent) {
        let active = self.tabs.active_tab_id().clone();
        match event {
            SurfaceEvent::Ready => {
                self.state.loading = false;
                self.refresh_capabilities();
            }
            SurfaceEvent::TitleChanged(title) => {
                if let Err(e) = self.tabs.update_tab_title(&active, &title) {
                    debug!(error = %e, "title dropped");
                }
            }
            SurfaceEvent::LoadStarted => {
                self.state.loading = true;
            }
            SurfaceEvent::LoadStopped => {
                self.state.loading = false;
                if let Some(address) = self.surface.current_address() {
                    if let Err(e) = self.tabs.update_tab_url(&active, &address) {
                        debug!(error = %e, "address dropped");
                    }
                }
                self.refresh_capabilities();
            }
        }
    }

    /// Applies an event that names the tab it came from.
    ///
    /// Events from the active tab behave like [`on_surface_event`](Self::on_surface_event).
    /// A background tab only picks up its title and the unread flag; the
    /// shared surface cannot tell its address. Unknown tabs are ignored.
    pub fn on_tab_event(&mut self, origin: &TabId, event: SurfaceEvent) {
        if origin == self.tabs.active_tab_id() {
            self.on_surface_event(event);
            return;
        }
        if self.tabs.get_tab(origin).is_none() {
            debug!(tab = %origin, "event for unknown tab ignored");
            return;
        }
        match event {
            SurfaceEvent::TitleChanged(title) => {
                let result = self
                    .tabs
                    .update_tab_title(origin, &title)
                    .and_then(|_| self.tabs.mark_unread(origin));
                if let Err(e) = result {
                    debug!(error = %e, "background title dropped");
                }
            }
            SurfaceEvent::LoadStopped => {
                if let Err(e) = self.tabs.mark_unread(origin) {
                    debug!(error = %e, "background load dropped");
                }
            }
            SurfaceEvent::Ready | SurfaceEvent::LoadStarted => {}
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.get_all_tabs()
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs.get_active_tab()
    }

    pub fn active_tab_id(&self) -> &TabId {
        self.tabs.active_tab_id()
    }

    pub fn navigation_state(&self) -> NavigationState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn refresh_capabilities(&mut self) {
        self.state.can_go_back = self.surface.can_go_back();
        self.state.can_go_forward = self.surface.can_go_forward();
    }

    fn issue<F>(&mut self, command: &str, f: F)
    where
        F: FnOnce(&mut S) -> Result<(), SurfaceError>,
    {
        if let Err(e) = f(&mut self.surface) {
            warn!(command = command, error = %e, "surface command failed");
        }
    }
}
