//! Small helpers shared by the UI, the runtime and the config loaders.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment variable that switches the runtime into headless mode.
pub const HEADLESS_ENV: &str = "LOCALNEWS_TEST_HEADLESS";

/// Frames of the busy spinner, advanced once per tick.
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// What: Report whether the process runs without a terminal.
///
/// Output:
/// - `true` when `LOCALNEWS_TEST_HEADLESS=1`.
///
/// Details:
/// - Headless mode skips raw mode, the alternate screen, mouse capture and the event
///   thread so the runtime can be driven from tests.
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// Spinner glyph for the given frame counter.
#[must_use]
pub const fn spinner_glyph(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// What: Shorten `s` so it fits in `max_width` terminal cells.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max_width`: Available cells.
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix followed by `…`.
///
/// Details:
/// - Widths come from `unicode-width`, so wide glyphs count as two cells.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Locate the end of `text` as a (row, column) pair in terminal cells.
///
/// Inputs:
/// - `text`: Possibly multi-line field content.
///
/// Output:
/// - Zero-based line index of the last line and its display width.
///
/// Details:
/// - Used to place the cursor after the last character of an input field.
#[must_use]
pub fn text_end_position(text: &str) -> (usize, usize) {
    let row = text.matches('\n').count();
    let last = text.rsplit('\n').next().unwrap_or_default();
    (row, last.width())
}
