//! Line-level parsing shared by `settings.conf` and `theme.conf`.

/// One classified line of a `key = value` config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine<'a> {
    /// Empty line or a full-line comment (`#`, `//`, `;`).
    Blank,
    /// `key = value` with the key normalized and the raw value trimmed.
    Entry {
        /// Lowercase key with `.`, `-` and spaces folded to `_`.
        key: String,
        /// Text after the first `=`, trimmed; inline comments are still attached.
        value: &'a str,
    },
    /// Non-blank line without an `=`.
    Malformed,
}

/// What: Classify a config line.
///
/// Inputs:
/// - `line`: Raw line from the file.
///
/// Output:
/// - [`ConfigLine`] describing the line.
///
/// Details:
/// - Splits on the first `=` only, so values may contain `=`.
pub fn classify_line(line: &str) -> ConfigLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
    {
        return ConfigLine::Blank;
    }
    match trimmed.split_once('=') {
        Some((key, value)) => ConfigLine::Entry {
            key: normalize_key(key),
            value: value.trim(),
        },
        None => ConfigLine::Malformed,
    }
}

/// Lowercase a key and fold `.`, `-` and spaces to `_`.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comments, entries and malformed lines are told apart.
    fn classify_line_variants() {
        assert_eq!(classify_line("   "), ConfigLine::Blank);
        assert_eq!(classify_line("# note"), ConfigLine::Blank);
        assert_eq!(classify_line("// note"), ConfigLine::Blank);
        assert_eq!(classify_line("; note"), ConfigLine::Blank);
        assert_eq!(
            classify_line(" Page-Size = 5 "),
            ConfigLine::Entry {
                key: "page_size".into(),
                value: "5"
            }
        );
        assert_eq!(
            classify_line("news_sort = a=b"),
            ConfigLine::Entry {
                key: "news_sort".into(),
                value: "a=b"
            }
        );
        assert_eq!(classify_line("no equals here"), ConfigLine::Malformed);
    }
}
