use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::parse_color_value;
use super::paths::theme_path;
use super::types::Theme;
use crate::util::config::{ConfigLine, classify_line};

/// Process-wide theme, loaded once on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `theme.conf` overrides on top of `base`.
///
/// Inputs:
/// - `content`: File content with `name = color` lines.
/// - `base`: Palette to start from.
///
/// Output:
/// - Resulting palette and the names of keys that were unknown or unparsable.
///
/// Details:
/// - Colors may be `#RRGGBB`, `RRGGBB` or `R,G,B`; a bad entry keeps the base color.
pub fn apply_theme_overrides(content: &str, base: Theme) -> (Theme, Vec<String>) {
    let mut t = base;
    let mut rejected = Vec::new();
    for line in content.lines() {
        let ConfigLine::Entry { key, value } = classify_line(line) else {
            continue;
        };
        let Some(color) = parse_color_value(value) else {
            rejected.push(key);
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background_base" => &mut t.base,
            "mantle" => &mut t.mantle,
            "crust" => &mut t.crust,
            "surface1" => &mut t.surface1,
            "surface2" => &mut t.surface2,
            "overlay1" => &mut t.overlay1,
            "overlay2" => &mut t.overlay2,
            "text" | "text_primary" => &mut t.text,
            "subtext0" => &mut t.subtext0,
            "subtext1" => &mut t.subtext1,
            "sapphire" | "accent_interactive" => &mut t.sapphire,
            "mauve" | "accent_heading" => &mut t.mauve,
            "green" | "semantic_success" => &mut t.green,
            "yellow" | "semantic_warning" => &mut t.yellow,
            "red" | "semantic_error" => &mut t.red,
            "lavender" | "accent_emphasis" => &mut t.lavender,
            _ => {
                rejected.push(key);
                continue;
            }
        };
        *slot = color;
    }
    (t, rejected)
}

/// Load the palette from `path`, falling back to the built-in palette when absent.
fn load_theme_from(path: &Path) -> Theme {
    let Ok(content) = fs::read_to_string(path) else {
        return Theme::default();
    };
    let (t, rejected) = apply_theme_overrides(&content, Theme::default());
    if rejected.is_empty() {
        tracing::info!(path = %path.display(), "loaded theme overrides");
    } else {
        tracing::warn!(
            path = %path.display(),
            keys = ?rejected,
            "theme.conf entries ignored"
        );
    }
    t
}

/// Return the application's theme palette.
///
/// Catppuccin Mocha unless `<config>/theme.conf` overrides individual colors.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| load_theme_from(&theme_path()))
}
