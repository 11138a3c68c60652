//! searchpane UI layer.
//!
//! Uses `wry` for the embedded browsing surface and `tao` for the window and
//! event loop:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar (tab strip, navigation buttons, address bar) is injected into
//! every page as a script and talks to Rust over wry IPC. The tray icon comes
//! from `tray-icon`.

pub mod tray;
pub mod webview_app;
pub mod window;
pub mod wry_surface;
