// NovaNav platform paths for Linux
// Config: ~/.config/novanav
// Data:   ~/.local/share/novanav

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "novanav";

/// Joins the app directory onto an XDG base, falling back to `$HOME/<fallback>`.
fn xdg_dir(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg {
        Some(base) if !base.is_empty() => PathBuf::from(base).join(APP_DIR),
        _ => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            for part in fallback {
                path.push(part);
            }
            path.join(APP_DIR)
        }
    }
}

/// Uses `$XDG_CONFIG_HOME/novanav` if set, otherwise `~/.config/novanav`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_CONFIG_HOME").ok(),
        env::var("HOME").ok(),
        &[".config"],
    )
}

/// Uses `$XDG_DATA_HOME/novanav` if set, otherwise `~/.local/share/novanav`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_DATA_HOME").ok(),
        env::var("HOME").ok(),
        &[".local", "share"],
    )
}
