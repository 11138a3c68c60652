//! WebView-based shell using `wry` + `tao`.
//!
//! Architecture:
//! - One shared webview shows the active tab; `TabNavigationController`
//!   drives it through `WrySurface`.
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar on every page.
//! - wry callbacks never touch state: they forward `UserEvent`s through the
//!   event loop proxy, and the tao loop owns the controller, the window and
//!   the tray.

use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use tray_icon::menu::MenuId;
use wry::{PageLoadEvent, WebViewBuilder};

use crate::app::App;
use crate::ipc_handler;
use crate::managers::navigation_controller::TabNavigationController;
use crate::managers::shell_lifecycle::{LifecycleAction, ShellLifecycle};
use crate::types::surface::SurfaceEvent;
use crate::ui::tray::{self, ShellTray};
use crate::ui::window::ShellWindow;
use crate::ui::wry_surface::WrySurface;

#[derive(Debug)]
pub enum UserEvent {
    /// Raw toolbar IPC message.
    Ipc(String),
    LoadStarted,
    /// Page finished loading at this address.
    LoadFinished(String),
    TitleChanged(String),
    /// Page asked for a new window; opened as a new tab instead.
    OpenInNewTab(String),
    TrayClick,
    TrayMenu(MenuId),
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

fn handle_user_event(
    controller: &mut TabNavigationController<WrySurface>,
    lifecycle: &ShellLifecycle<ShellWindow>,
    tray: Option<&ShellTray>,
    event: UserEvent,
) -> LifecycleAction {
    match event {
        UserEvent::Ipc(body) => {
            let preview: String = body.chars().take(200).collect();
            debug!(%preview, "ipc");
            if let Err(e) = ipc_handler::handle_message(controller, &body) {
                warn!(error = %e, "ipc message rejected");
            }
        }
        UserEvent::LoadStarted => controller.on_surface_event(SurfaceEvent::LoadStarted),
        UserEvent::LoadFinished(url) => {
            controller.surface_mut().commit(&url);
            controller.on_surface_event(SurfaceEvent::LoadStopped);
        }
        UserEvent::TitleChanged(title) => {
            controller.on_surface_event(SurfaceEvent::TitleChanged(title))
        }
        UserEvent::OpenInNewTab(url) => {
            controller.open_tab(&url);
        }
        UserEvent::TrayClick => lifecycle.on_tray_click(),
        UserEvent::TrayMenu(id) => {
            if let Some(action) = tray.and_then(|t| t.menu_action(&id)) {
                return lifecycle.on_tray_menu(action);
            }
        }
    }
    LifecycleAction::Continue
}

fn push_state(controller: &TabNavigationController<WrySurface>) {
    let script = ipc_handler::render_script(controller);
    if let Err(e) = controller.surface().evaluate_script(&script) {
        warn!(error = %e, "failed to push toolbar state");
    }
}

// ─── Main entry point ───

pub fn run(app: App) -> Result<(), Box<dyn std::error::Error>> {
    let settings = app.settings().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(LogicalSize::new(
            f64::from(settings.window.width),
            f64::from(settings.window.height),
        ))
        .with_visible(false)
        .build(&event_loop)?;

    let ipc_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let title_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(TOOLBAR_JS)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::Ipc(msg.body().clone()));
        })
        .with_on_page_load_handler(move |event, url| {
            let user_event = match event {
                PageLoadEvent::Started => UserEvent::LoadStarted,
                PageLoadEvent::Finished => UserEvent::LoadFinished(url),
            };
            let _ = load_proxy.send_event(user_event);
        })
        .with_document_title_changed_handler(move |title| {
            let _ = title_proxy.send_event(UserEvent::TitleChanged(title));
        })
        .with_new_window_req_handler(move |url, _features| {
            debug!(%url, "new window request");
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::OpenInNewTab(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    let mut controller = app.controller(WrySurface::new(webview));
    let mut lifecycle = ShellLifecycle::new(ShellWindow::new(window), settings.window.hide_on_close);
    let mut tray: Option<ShellTray> = None;

    info!("shell started");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            // The tray must be created once the loop is running (macOS).
            Event::NewEvents(StartCause::Init) => {
                if settings.tray.enabled {
                    match ShellTray::build(&settings.tray.tooltip) {
                        Ok(t) => {
                            tray::forward_events(proxy.clone());
                            tray = Some(t);
                        }
                        Err(e) => warn!(error = %e, "tray icon unavailable"),
                    }
                }
                // Without a tray a hidden window could never come back.
                lifecycle.set_hide_on_close(settings.window.hide_on_close && tray.is_some());
                lifecycle.on_ready_to_show();
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if lifecycle.on_close_requested() == LifecycleAction::Exit {
                    info!("shell exiting");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::UserEvent(user_event) => {
                let action =
                    handle_user_event(&mut controller, &lifecycle, tray.as_ref(), user_event);
                if action == LifecycleAction::Exit {
                    info!("shell exiting");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                push_state(&controller);
            }

            _ => {}
        }
    })
}
