use serde_json::json;

use searchpane::ipc_handler::{handle_message, render_script, render_state};
use searchpane::managers::navigation_controller::{NavigationConfig, TabNavigationController};
use searchpane::surface::headless::HeadlessSurface;
use searchpane::types::surface::SurfaceCommand;

const HOME: &str = "https://www.google.com";

fn controller() -> TabNavigationController<HeadlessSurface> {
    let mut c = TabNavigationController::new(
        HeadlessSurface::new(),
        NavigationConfig {
            home_url: HOME.to_string(),
            search_endpoint: "https://www.google.com/search?q=".to_string(),
        },
    );
    pump(&mut c);
    c.surface_mut().clear_commands();
    c
}

fn pump(c: &mut TabNavigationController<HeadlessSurface>) {
    for event in c.surface_mut().take_events() {
        c.on_surface_event(event);
    }
}

#[test]
fn test_navigate_message() {
    let mut c = controller();
    handle_message(&mut c, r#"{"cmd":"navigate","url":"example.com"}"#).unwrap();
    assert_eq!(
        c.surface().commands(),
        [SurfaceCommand::LoadAddress("https://example.com".to_string())]
    );
    pump(&mut c);
    assert_eq!(c.active_tab().url, "https://example.com");
}

#[test]
fn test_tab_messages() {
    let mut c = controller();
    let first = c.active_tab_id().clone();
    handle_message(&mut c, r#"{"cmd":"new_tab"}"#).unwrap();
    assert_eq!(c.tabs().len(), 2);

    let msg = json!({"cmd": "switch_tab", "id": first}).to_string();
    handle_message(&mut c, &msg).unwrap();
    assert_eq!(c.active_tab_id(), &first);

    let msg = json!({"cmd": "close_tab", "id": first}).to_string();
    handle_message(&mut c, &msg).unwrap();
    assert_eq!(c.tabs().len(), 1);
    assert_ne!(c.active_tab_id(), &first);
}

#[test]
fn test_history_and_reload_messages() {
    let mut c = controller();
    handle_message(&mut c, r#"{"cmd":"back"}"#).unwrap();
    handle_message(&mut c, r#"{"cmd":"forward"}"#).unwrap();
    assert!(c.surface().commands().is_empty());

    handle_message(&mut c, r#"{"cmd":"reload"}"#).unwrap();
    assert_eq!(c.surface().commands(), [SurfaceCommand::Reload]);
}

#[test]
fn test_rejected_messages() {
    let mut c = controller();
    assert!(handle_message(&mut c, "not json").is_err());
    assert_eq!(
        handle_message(&mut c, r#"{"url":"x"}"#),
        Err("missing cmd".to_string())
    );
    assert_eq!(
        handle_message(&mut c, r#"{"cmd":"navigate"}"#),
        Err("missing url".to_string())
    );
    assert_eq!(
        handle_message(&mut c, r#"{"cmd":"close_tab"}"#),
        Err("missing id".to_string())
    );
    assert_eq!(
        handle_message(&mut c, r#"{"cmd":"print"}"#),
        Err("unknown command: print".to_string())
    );
    assert!(c.surface().commands().is_empty());
}

#[test]
fn test_render_state_shape() {
    let mut c = controller();
    handle_message(&mut c, r#"{"cmd":"ui_ready"}"#).unwrap();
    let state = render_state(&c);
    assert_eq!(state["tabs"].as_array().map(Vec::len), Some(1));
    assert_eq!(state["activeId"], json!(c.active_tab_id()));
    assert_eq!(state["tabs"][0]["title"], "google.com");
    assert_eq!(state["url"], HOME);
    assert_eq!(state["loading"], false);
    assert_eq!(state["canGoBack"], false);
    assert_eq!(state["canGoForward"], false);

    assert!(render_script(&c).starts_with("if(window.__sp_render)__sp_render({"));
}
