//! In-memory surface with no widget behind it.
//!
//! Each command completes synchronously: loads commit to the session history
//! at once and the lifecycle events a real webview would fire are queued for
//! the host loop to drain with [`HeadlessSurface::take_events`].

use std::collections::VecDeque;

use crate::services::address::display_host;
use crate::surface::history::SessionHistory;
use crate::surface::BrowsingSurface;
use crate::types::errors::SurfaceError;
use crate::types::surface::{SurfaceCommand, SurfaceEvent};

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    history: SessionHistory,
    commands: Vec<SurfaceCommand>,
    pending: VecDeque<SurfaceEvent>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command issued so far, oldest first.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Drains the queued lifecycle events.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        self.pending.drain(..).collect()
    }

    fn complete_load(&mut self, url: &str) {
        self.history.commit(url);
        self.pending.push_back(SurfaceEvent::LoadStarted);
        self.pending.push_back(SurfaceEvent::TitleChanged(display_host(url)));
        self.pending.push_back(SurfaceEvent::LoadStopped);
    }
}

impl BrowsingSurface for HeadlessSurface {
    fn load_address(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::LoadAddress(url.to_string()));
        self.history.cancel_traversal();
        self.complete_load(url);
        Ok(())
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::Reload);
        if let Some(url) = self.history.current().map(str::to_string) {
            self.complete_load(&url);
        }
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::GoBack);
        let url = self
            .history
            .back()
            .map(str::to_string)
            .ok_or(SurfaceError::NoHistoryEntry("back"))?;
        self.complete_load(&url);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(SurfaceCommand::GoForward);
        let url = self
            .history
            .forward()
            .map(str::to_string)
            .ok_or(SurfaceError::NoHistoryEntry("forward"))?;
        self.complete_load(&url);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn current_address(&self) -> Option<String> {
        self.history.current().map(str::to_string)
    }
}
