/// Lifecycle events fired by an embedded browsing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Ready,
    TitleChanged(String),
    LoadStarted,
    LoadStopped,
}

/// A command issued to a surface. Recorded by the headless surface so callers
/// can observe what the controller asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    LoadAddress(String),
    Reload,
    GoBack,
    GoForward,
}

/// Snapshot the toolbar renders from. Recomputed from the surface whenever an
/// event is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
