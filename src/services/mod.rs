// searchpane services
// Stateless helpers and the settings engine.

pub mod address;
pub mod settings_engine;
