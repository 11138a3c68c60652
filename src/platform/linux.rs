// searchpane platform paths for Linux
// Config: ~/.config/searchpane

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/searchpane` if set, otherwise `~/.config/searchpane`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("searchpane"),
        _ => home_dir().join(".config").join("searchpane"),
    }
}
