//! Line-oriented INI parser.
//!
//! Dialect: `[section]` headers, `key=value` pairs, `;` and `#` comments
//! (full-line or inline, backslash-escapable inline), an optional single
//! outer pair of double quotes around a value, and aggressive whitespace
//! handling (every whitespace character is stripped from each line before
//! it is interpreted).

use log::trace;

use super::{ConfigError, ConfigMap};
use crate::utils::string::strip_whitespace;

/// Parse a full INI document into a section/key/value map.
///
/// Empty input is a usage error. Lines before the first section header are
/// discarded, as are lines without `=` and entries whose key or processed
/// value comes out empty.
pub(crate) fn parse_document(text: &str) -> Result<ConfigMap, ConfigError> {
    if text.is_empty() {
        return Err(ConfigError::InvalidInput("text is empty".to_string()));
    }

    let mut config = ConfigMap::new();
    let mut current_section = String::new();

    for raw in text.lines() {
        let line = strip_whitespace(raw);
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        // Section header. A `[]` header has an empty name, which is not a
        // storable section, so it leaves no active target.
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].to_string();
            continue;
        }

        if current_section.is_empty() {
            trace!("discarding line outside any section: '{}'", line);
            continue;
        }

        let eq = match line.find('=') {
            Some(pos) => pos,
            None => {
                trace!("discarding line without '=': '{}'", line);
                continue;
            }
        };
        let key = &line[..eq];
        let value = &line[eq + 1..];

        let value = strip_inline_comment(value, ';');
        let value = strip_inline_comment(&value, '#');
        let value = unquote(&value);

        // Empty keys and empty values are not storable states.
        if key.is_empty() || value.is_empty() {
            trace!("discarding entry with empty key or value: '{}'", line);
            continue;
        }

        config
            .entry(current_section.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    Ok(config)
}

/// Truncate `value` at the first unescaped occurrence of `marker`.
///
/// A marker directly preceded by a backslash is literal: the backslash is
/// consumed and the marker kept. A marker at position 0 has nothing escaping
/// it and truncates the value to empty.
fn strip_inline_comment(value: &str, marker: char) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        if c == marker {
            if out.ends_with('\\') {
                out.pop();
                out.push(c);
                continue;
            }
            break;
        }
        out.push(c);
    }

    out
}

/// Strip exactly one outer pair of double quotes, if present.
///
/// The length check also guards the empty value, which must not be probed
/// for quote characters at all.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(matches!(
            parse_document(""),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_basic_section_and_pair() {
        let config = parse_document("[a]\nx=1\n").unwrap();
        assert_eq!(config["a"]["x"], "1");
    }

    #[test]
    fn test_lines_before_any_header_are_discarded() {
        let config = parse_document("y=2\n[a]\nx=1\n").unwrap();
        assert_eq!(config.len(), 1);
        assert!(!config["a"].contains_key("y"));
    }

    #[test]
    fn test_empty_section_name_leaves_no_target() {
        let config = parse_document("[]\nx=1\n[a]\ny=2\n").unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config["a"]["y"], "2");
    }

    #[test]
    fn test_header_alone_creates_no_section() {
        let config = parse_document("[a]\n[b]\nx=1\n").unwrap();
        assert!(!config.contains_key("a"));
        assert_eq!(config["b"]["x"], "1");
    }

    #[test]
    fn test_line_without_equals_is_skipped() {
        let config = parse_document("[a]\nnotapair\nx=1\n").unwrap();
        assert_eq!(config["a"].len(), 1);
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("1;comment", ';'), "1");
        assert_eq!(strip_inline_comment("1", ';'), "1");
        assert_eq!(strip_inline_comment(";comment", ';'), "");
        assert_eq!(strip_inline_comment("1\\;still", ';'), "1;still");
        assert_eq!(strip_inline_comment("a\\;b;c", ';'), "a;b");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"hello\""), "hello");
        assert_eq!(unquote("\"hello"), "\"hello");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote(""), "");
        assert_eq!(unquote("\"\"x\"\""), "\"x\"");
    }
}
