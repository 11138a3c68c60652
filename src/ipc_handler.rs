//! Toolbar IPC handler.
//!
//! The injected toolbar posts JSON messages of the form `{"cmd": "...", ...}`.
//! `handle_message` dispatches them to the tab controller; `render_script`
//! builds the script that pushes tab and navigation state back to the page.
//! Kept free of any webview type so it can be unit-tested.

use serde_json::{json, Value};
use tracing::debug;

use crate::managers::navigation_controller::TabNavigationController;
use crate::surface::BrowsingSurface;
use crate::types::surface::SurfaceEvent;
use crate::types::tab::TabId;

/// Parses a raw IPC message and dispatches it.
pub fn handle_message<S: BrowsingSurface>(
    controller: &mut TabNavigationController<S>,
    message: &str,
) -> Result<(), String> {
    let msg: Value = serde_json::from_str(message).map_err(|e| format!("invalid message: {}", e))?;
    let cmd = msg
        .get("cmd")
        .and_then(|v| v.as_str())
        .ok_or("missing cmd")?;
    handle_method(controller, cmd, &msg)
}

/// Dispatches one toolbar command to the controller.
pub fn handle_method<S: BrowsingSurface>(
    controller: &mut TabNavigationController<S>,
    cmd: &str,
    params: &Value,
) -> Result<(), String> {
    debug!(cmd = cmd, "toolbar command");
    match cmd {
        // The toolbar script runs once the DOM is ready.
        "ui_ready" => controller.on_surface_event(SurfaceEvent::Ready),
        "new_tab" => {
            controller.create_tab();
        }
        "close_tab" => controller.close_tab(&tab_id(params)?),
        "switch_tab" => controller.switch_tab(&tab_id(params)?),
        "navigate" => {
            let input = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            controller.navigate(input);
        }
        "back" => {
            controller.go_back();
        }
        "forward" => {
            controller.go_forward();
        }
        "reload" => controller.refresh(),
        other => return Err(format!("unknown command: {}", other)),
    }
    Ok(())
}

fn tab_id(params: &Value) -> Result<TabId, String> {
    params
        .get("id")
        .and_then(|v| v.as_str())
        .map(TabId::from)
        .ok_or_else(|| "missing id".to_string())
}

/// State the toolbar renders: tabs in order, the active id, the active url
/// and the navigation flags.
pub fn render_state<S: BrowsingSurface>(controller: &TabNavigationController<S>) -> Value {
    let tabs: Vec<Value> = controller
        .tabs()
        .iter()
        .map(|t| json!({"id": t.id, "title": t.title, "url": t.url, "unread": t.unread}))
        .collect();
    let nav = controller.navigation_state();
    json!({
        "tabs": tabs,
        "activeId": controller.active_tab_id(),
        "url": controller.active_tab().url,
        "loading": nav.loading,
        "canGoBack": nav.can_go_back,
        "canGoForward": nav.can_go_forward,
    })
}

pub fn render_script<S: BrowsingSurface>(controller: &TabNavigationController<S>) -> String {
    format!(
        "if(window.__sp_render)__sp_render({})",
        render_state(controller)
    )
}
