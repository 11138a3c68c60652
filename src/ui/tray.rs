//! System tray icon with an Open / Quit menu.
//!
//! tray-icon delivers its events on static channels; `forward_events` pushes
//! them into the tao loop through the event loop proxy.

use tao::event_loop::EventLoopProxy;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

use crate::managers::shell_lifecycle::TrayMenuAction;
use crate::ui::webview_app::UserEvent;

const ICON_SIZE: u32 = 22;

pub struct ShellTray {
    _tray: TrayIcon,
    open_id: MenuId,
    quit_id: MenuId,
}

impl ShellTray {
    pub fn build(tooltip: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let open = MenuItem::new("Open", true, None);
        let quit = MenuItem::new("Quit", true, None);
        let menu = Menu::new();
        menu.append(&open)?;
        menu.append(&quit)?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(tooltip)
            .with_icon(default_icon()?)
            .build()?;

        Ok(Self {
            _tray: tray,
            open_id: open.id().clone(),
            quit_id: quit.id().clone(),
        })
    }

    pub fn menu_action(&self, id: &MenuId) -> Option<TrayMenuAction> {
        if id == &self.open_id {
            Some(TrayMenuAction::Open)
        } else if id == &self.quit_id {
            Some(TrayMenuAction::Quit)
        } else {
            None
        }
    }
}

/// A plain blue disc.
fn default_icon() -> Result<Icon, Box<dyn std::error::Error>> {
    let center = ICON_SIZE as f32 / 2.0;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let alpha = if dx * dx + dy * dy <= center * center { 255 } else { 0 };
            rgba.extend_from_slice(&[26, 115, 232, alpha]);
        }
    }
    Ok(Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)?)
}

pub fn forward_events(proxy: EventLoopProxy<UserEvent>) {
    let click_proxy = proxy.clone();
    TrayIconEvent::set_event_handler(Some(move |event| {
        if let TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            let _ = click_proxy.send_event(UserEvent::TrayClick);
        }
    }));
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = proxy.send_event(UserEvent::TrayMenu(event.id));
    }));
}
