use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::parsing::{parse_bool, strip_inline_comment};
use super::paths::settings_path;
use super::types::Settings;
use crate::state::GlobalRowPolicy;
use crate::util::config::{ConfigLine, classify_line};

/// Content written to `settings.conf` on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# localnews settings
# Lines are `key = value`; `#` or `//` start a comment.

# Origin of the news API (no trailing slash).
api_base_url = http://localhost:8080

# News items per page and server-side sort order.
page_size = 5
news_sort = id,desc

# Global aggregate row in city search results:
#   synthesize         add a client-side Global row only when the server omits it
#   server             never add one; show what the server returns
#   always_synthesize  ignore the server's row and always compute it locally
global_row = synthesize

# Network timeouts in seconds.
connect_timeout_secs = 15
request_timeout_secs = 30

show_keybinds_footer = true
";

/// What: Apply `settings.conf` content on top of `settings`.
///
/// Inputs:
/// - `content`: Full file content.
/// - `settings`: Settings to update in place (usually defaults).
///
/// Output:
/// - Human-readable warnings for values that could not be parsed; the previous value is
///   kept for those keys.
///
/// Details:
/// - Keys are case-insensitive; `.`/`-`/space are treated as `_`.
/// - Unknown keys are ignored with a debug log so newer files still load.
pub fn parse_settings(content: &str, settings: &mut Settings) -> Vec<String> {
    let mut warnings = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let (key, raw_val) = match classify_line(line) {
            ConfigLine::Blank => continue,
            ConfigLine::Malformed => {
                warnings.push(format!("settings.conf line {}: missing '='", lineno + 1));
                continue;
            }
            ConfigLine::Entry { key, value } => (key, value),
        };
        let val = strip_inline_comment(raw_val);
        let mut invalid = || warnings.push(format!("settings.conf: invalid value for {key}: {val}"));
        match key.as_str() {
            "api_base_url" | "api_url" | "base_url" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    settings.api_base_url = val.to_string();
                } else {
                    invalid();
                }
            }
            "page_size" => match val.parse::<u32>() {
                Ok(v) if v > 0 => settings.page_size = v,
                _ => invalid(),
            },
            "news_sort" | "sort" => {
                if val.is_empty() {
                    invalid();
                } else {
                    settings.news_sort = val.to_string();
                }
            }
            "global_row" | "global_row_policy" => match GlobalRowPolicy::from_config_key(val) {
                Some(p) => settings.global_row = p,
                None => invalid(),
            },
            "connect_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.connect_timeout_secs = v,
                _ => invalid(),
            },
            "request_timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => invalid(),
            },
            "show_keybinds_footer" | "keybinds_visible" => {
                settings.show_keybinds_footer = parse_bool(val);
            }
            _ => debug!(key = %key, "[Config] ignoring unknown settings key"),
        }
    }
    normalize(settings);
    warnings
}

/// Canonicalize values that have several equivalent spellings.
fn normalize(settings: &mut Settings) {
    while settings.api_base_url.ends_with('/') {
        settings.api_base_url.pop();
    }
}

/// What: Load settings from `path`, writing the skeleton first when the file is absent.
///
/// Inputs:
/// - `path`: Location of `settings.conf`.
///
/// Output:
/// - Parsed settings (defaults for anything missing) and any parse warnings.
///
/// Details:
/// - An unreadable file is not fatal: defaults are used and a warning is returned.
pub fn load_settings_from(path: &Path) -> (Settings, Vec<String>) {
    let mut out = Settings::default();
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => info!(path = %path.display(), "[Config] wrote default settings.conf"),
            Err(e) => warn!(path = %path.display(), error = %e, "[Config] could not write settings.conf"),
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            let warnings = parse_settings(&content, &mut out);
            for w in &warnings {
                warn!(warning = %w, "[Config] settings problem");
            }
            (out, warnings)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf missing or unreadable, using defaults"
            );
            (
                out,
                vec![format!("could not read {}: {e}", path.display())],
            )
        }
    }
}

/// Load settings from the default location in the config directory.
pub fn load_settings() -> (Settings, Vec<String>) {
    load_settings_from(&settings_path())
}
