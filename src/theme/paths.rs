use std::env;
use std::path::PathBuf;

/// Directory name used under the XDG config base.
const APP_DIR: &str = "localnews";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for localnews, `$XDG_CONFIG_HOME/localnews` or
/// `$HOME/.config/localnews` (ensured to exist on a best-effort basis).
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf` inside the config directory.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Path of the optional `theme.conf` color overrides.
pub fn theme_path() -> PathBuf {
    config_dir().join("theme.conf")
}
