//! searchpane: a minimal desktop shell that embeds a search engine in a
//! native window, with tabs, navigation controls and a tray icon.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod managers;
pub mod platform;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
