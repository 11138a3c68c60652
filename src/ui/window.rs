use tao::window::Window;

use crate::managers::shell_lifecycle::WindowHandle;

/// The main tao window, owned by the lifecycle root.
pub struct ShellWindow(Window);

impl ShellWindow {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl WindowHandle for ShellWindow {
    fn show(&self) {
        self.0.set_visible(true);
        self.0.set_focus();
    }

    fn hide(&self) {
        self.0.set_visible(false);
    }

    fn is_visible(&self) -> bool {
        self.0.is_visible()
    }
}
