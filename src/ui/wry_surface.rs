//! [`BrowsingSurface`] over a `wry::WebView`.
//!
//! wry exposes no history query API, so back/forward are served from a
//! [`SessionHistory`] fed by page-load-finished events.

use wry::WebView;

use crate::surface::history::SessionHistory;
use crate::surface::BrowsingSurface;
use crate::types::errors::SurfaceError;

pub struct WrySurface {
    webview: WebView,
    history: SessionHistory,
}

impl WrySurface {
    pub fn new(webview: WebView) -> Self {
        Self {
            webview,
            history: SessionHistory::new(),
        }
    }

    /// Records a page that finished loading.
    pub fn commit(&mut self, url: &str) {
        self.history.commit(url);
    }

    pub fn evaluate_script(&self, js: &str) -> Result<(), SurfaceError> {
        self.webview.evaluate_script(js).map_err(command_failed)
    }
}

fn command_failed(e: wry::Error) -> SurfaceError {
    SurfaceError::CommandFailed(e.to_string())
}

impl BrowsingSurface for WrySurface {
    fn load_address(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.history.cancel_traversal();
        self.webview.load_url(url).map_err(command_failed)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.webview.reload().map_err(command_failed)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        let target = self
            .history
            .back()
            .map(str::to_string)
            .ok_or(SurfaceError::NoHistoryEntry("back"))?;
        self.webview.load_url(&target).map_err(command_failed)
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        let target = self
            .history
            .forward()
            .map(str::to_string)
            .ok_or(SurfaceError::NoHistoryEntry("forward"))?;
        self.webview.load_url(&target).map_err(command_failed)
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
