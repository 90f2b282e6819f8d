use ratatui::style::Color;

/// What: Remove an inline comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - A comment starts at `#` or `//` preceded by whitespace, so URLs (`http://`) and
///   leading `#RRGGBB` colors survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let cut = s
        .match_indices('#')
        .chain(s.match_indices("//"))
        .filter(|(i, _)| *i > 0 && bytes[*i - 1].is_ascii_whitespace())
        .map(|(i, _)| i)
        .min()
        .unwrap_or(s.len());
    s[..cut].trim()
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(s: &str) -> bool {
    let lv = s.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB`, `RRGGBB`, and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are stripped without damaging URLs or hex colors.
    ///
    /// Inputs:
    /// - A URL, a value with a `#` comment, a value with a `//` comment, a hex color.
    ///
    /// Output:
    /// - URL and color unchanged; comments removed.
    fn strip_inline_comment_keeps_urls_and_colors() {
        assert_eq!(
            strip_inline_comment("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(strip_inline_comment("id,desc   # newest first"), "id,desc");
        assert_eq!(strip_inline_comment("5 // per page"), "5");
        assert_eq!(strip_inline_comment("#1e1e2e"), "#1e1e2e");
        assert_eq!(strip_inline_comment("#1e1e2e # base"), "#1e1e2e");
    }

    #[test]
    /// What: Color parsing accepts hex and decimal triplets and rejects garbage.
    fn parse_color_value_formats() {
        assert_eq!(parse_color_value("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color_value("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color_value("0, 0, 255"), Some(Color::Rgb(0, 0, 255)));
        assert_eq!(parse_color_value("256,0,0"), None);
        assert_eq!(parse_color_value("blue"), None);
        assert_eq!(parse_color_value(""), None);
    }

    #[test]
    /// What: Truthy spellings map to `true`, everything else to `false`.
    fn parse_bool_spellings() {
        for v in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_bool(v), "{v}");
        }
        for v in ["false", "0", "no", "off", "maybe"] {
            assert!(!parse_bool(v), "{v}");
        }
    }
}
