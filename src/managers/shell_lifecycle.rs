//! Window and tray behaviour of the shell.
//!
//! The window is an explicit object owned here and handed in at startup; the
//! tray handler reaches it through this struct instead of a global.

use tracing::info;

/// Visibility control over the main window.
pub trait WindowHandle {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// Entries of the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayMenuAction {
    Open,
    Quit,
}

/// What the host event loop should do after a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Continue,
    Exit,
}

pub struct ShellLifecycle<W: WindowHandle> {
    window: W,
    hide_on_close: bool,
}

impl<W: WindowHandle> ShellLifecycle<W> {
    pub fn new(window: W, hide_on_close: bool) -> Self {
        Self {
            window,
            hide_on_close,
        }
    }

    pub fn set_hide_on_close(&mut self, hide_on_close: bool) {
        self.hide_on_close = hide_on_close;
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// The window starts hidden and is shown once its content is ready.
    pub fn on_ready_to_show(&self) {
        self.window.show();
    }

    /// Closing the window hides it when configured to, otherwise quits.
    pub fn on_close_requested(&self) -> LifecycleAction {
        if self.hide_on_close {
            info!("window closed, hiding to tray");
            self.window.hide();
            LifecycleAction::Continue
        } else {
            LifecycleAction::Exit
        }
    }

    /// A click on the tray icon toggles window visibility.
    pub fn on_tray_click(&self) {
        if self.window.is_visible() {
            self.window.hide();
        } else {
            self.window.show();
        }
    }

    pub fn on_tray_menu(&self, action: TrayMenuAction) -> LifecycleAction {
        match action {
            TrayMenuAction::Open => {
                self.window.show();
                LifecycleAction::Continue
            }
            TrayMenuAction::Quit => {
                info!("quit requested from tray");
                LifecycleAction::Exit
            }
        }
    }
}
