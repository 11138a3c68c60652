//! searchpane, a minimal desktop shell around a search engine.
//!
//! Entry point: opens the main window with the embedded search page.
//! When built without the `gui` feature, runs a console demo against the
//! headless surface.

use searchpane::app::App;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("searchpane=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let app = App::new(None);
    searchpane::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn main() {
    use searchpane::managers::navigation_controller::TabNavigationController;
    use searchpane::surface::headless::HeadlessSurface;

    fn pump(controller: &mut TabNavigationController<HeadlessSurface>) {
        for event in controller.surface_mut().take_events() {
            controller.on_surface_event(event);
        }
    }

    fn show(controller: &TabNavigationController<HeadlessSurface>, step: &str) {
        let nav = controller.navigation_state();
        println!("── {}", step);
        for tab in controller.tabs() {
            let marker = if &tab.id == controller.active_tab_id() { '*' } else { ' ' };
            let unread = if tab.unread { " (unread)" } else { "" };
            println!("  {} {:<20} {}{}", marker, tab.title, tab.url, unread);
        }
        println!(
            "  back={} forward={} loading={}",
            nav.can_go_back, nav.can_go_forward, nav.loading
        );
    }

    init_tracing();
    println!("searchpane v{} (headless demo)", env!("CARGO_PKG_VERSION"));

    let app = App::new(None);
    let mut controller = app.controller(HeadlessSurface::new());
    pump(&mut controller);
    show(&controller, "startup");

    controller.navigate("rust ownership");
    pump(&mut controller);
    show(&controller, "search \"rust ownership\"");

    controller.navigate("docs.rs");
    pump(&mut controller);
    show(&controller, "open docs.rs");

    controller.go_back();
    pump(&mut controller);
    show(&controller, "back");

    controller.create_tab();
    pump(&mut controller);
    show(&controller, "new tab");

    let active = controller.active_tab_id().clone();
    controller.close_tab(&active);
    pump(&mut controller);
    show(&controller, "close active tab");
}
