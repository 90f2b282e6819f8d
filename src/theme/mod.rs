//! Configuration and palette for localnews.
//!
//! Settings come from `settings.conf`, colors from the optional `theme.conf`, both in
//! the XDG config directory.

/// Value parsing shared by the config files.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// `settings.conf` loading.
mod settings;
/// Theme store and overrides.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path, theme_path};
pub use settings::{SETTINGS_SKELETON_CONTENT, load_settings, load_settings_from, parse_settings};
pub use store::{apply_theme_overrides, theme};
pub use types::{Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers lock it around changes to `HOME`/`XDG_CONFIG_HOME`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
