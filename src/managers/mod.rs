// searchpane state managers
// Managers handle stateful operations: tabs, navigation, window lifecycle.

pub mod navigation_controller;
pub mod shell_lifecycle;
pub mod tab_manager;
