//! Embedded browsing surface abstraction.
//!
//! The controller never touches a platform widget directly. It issues
//! fire-and-forget commands through [`BrowsingSurface`] and learns about
//! their effects later through [`SurfaceEvent`](crate::types::surface::SurfaceEvent)s
//! delivered by the host event loop.

pub mod headless;
pub mod history;

use crate::types::errors::SurfaceError;

/// Commands and capability queries offered by an embedded browsing surface.
pub trait BrowsingSurface {
    fn load_address(&mut self, url: &str) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
    fn go_forward(&mut self) -> Result<(), SurfaceError>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    /// Address of the committed page, if any page has committed yet.
    fn current_address(&self) -> Option<String>;
}
