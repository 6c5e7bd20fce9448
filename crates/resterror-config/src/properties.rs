//! Order-preserving properties tokenizer
//!
//! Turns configuration text into an ordered key/value mapping:
//!
//! - blank lines and lines starting with `#` or `;` are skipped
//! - a line ending in an odd number of `\` continues on the next line;
//!   comment lines inside a continuation are skipped and a continuation
//!   left open at end of input is dropped
//! - the key ends at the first unescaped whitespace, `:` or `=`

use std::io::Read;

use indexmap::IndexMap;

use crate::ConfigError;

/// Escape character for separators and line continuation
pub const ESCAPE: char = '\\';

/// Raw key/value pairs in declaration order
pub type Properties = IndexMap<String, String>;

/// Parse properties text
///
/// A key declared twice keeps its first position and takes the last value.
///
/// # Errors
///
/// Returns [`ConfigError::MissingKeyOrValue`] if a logical line has no key
/// or no value
pub fn parse(text: &str) -> Result<Properties, ConfigError> {
    let mut properties = Properties::new();
    let mut buffer = String::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if is_continued(line) {
            buffer.push_str(&line[..line.len() - ESCAPE.len_utf8()]);
            continue;
        }

        buffer.push_str(line);
        let logical = std::mem::take(&mut buffer);

        let (key, value) = split_key_value(&logical).ok_or(ConfigError::MissingKeyOrValue { line: index + 1 })?;
        properties.insert(key, value);
    }

    Ok(properties)
}

/// Read and parse properties from a UTF-8 stream
///
/// # Errors
///
/// Returns an I/O error if the stream cannot be read or is not UTF-8, or
/// any error from [`parse`]
pub fn parse_reader(mut reader: impl Read, resource: &str, location: &str) -> Result<Properties, ConfigError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| ConfigError::Io {
            resource: resource.to_owned(),
            location: location.to_owned(),
            source,
        })?;

    parse(&text)
}

/// Whether a trimmed line continues on the next one
///
/// An even run of trailing escapes is itself escaped. The first character
/// of the line never counts towards the run.
pub(crate) fn is_continued(line: &str) -> bool {
    let tail = line.char_indices().nth(1).map_or("", |(offset, _)| &line[offset..]);
    let trailing = tail.chars().rev().take_while(|&c| c == ESCAPE).count();
    trailing % 2 != 0
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == '='
}

/// Split a logical line into trimmed key and value
///
/// Returns `None` if either side is empty.
pub(crate) fn split_key_value(line: &str) -> Option<(String, String)> {
    let mut key = String::new();
    let mut value = String::new();
    let mut building_key = true;
    let mut previous = None;

    for c in line.trim().chars() {
        let separator = is_separator(c) && previous != Some(ESCAPE);

        if building_key {
            if separator {
                building_key = false;
            } else {
                key.push(c);
            }
        } else if !(separator && value.is_empty()) {
            value.push(c);
        }

        previous = Some(c);
    }

    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key.to_owned(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_value() {
        let properties = parse("key=value").unwrap();

        assert_eq!(properties.len(), 1);
        assert_eq!(properties["key"], "value");
    }

    #[test]
    fn all_separators_are_accepted() {
        let properties = parse("a=1\nb:2\nc 3\nd = 4\ne\t : = 5").unwrap();

        let pairs: Vec<(&str, &str)> = properties.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")]);
    }

    #[test]
    fn value_keeps_later_separators() {
        let properties = parse("java.lang.IllegalArgumentException=status=400|Unknown file type").unwrap();

        assert_eq!(
            properties["java.lang.IllegalArgumentException"],
            "status=400|Unknown file type"
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = "# comment\n\n   ; another\n  key = value  \n";
        let properties = parse(text).unwrap();

        assert_eq!(properties.len(), 1);
        assert_eq!(properties["key"], "value");
    }

    #[test]
    fn continuation_joins_lines() {
        let properties = parse("key = first \\\n   second").unwrap();

        assert_eq!(properties["key"], "first second");
    }

    #[test]
    fn continuation_spans_several_lines() {
        let properties = parse("key = a\\\nb\\\nc\nother = d").unwrap();

        assert_eq!(properties["key"], "abc");
        assert_eq!(properties["other"], "d");
    }

    #[test]
    fn comment_inside_continuation_is_skipped() {
        let properties = parse("k = a\\\n# c\nb").unwrap();

        assert_eq!(properties.len(), 1);
        assert_eq!(properties["k"], "ab");
    }

    #[test]
    fn dangling_continuation_is_discarded() {
        let properties = parse("a = 1\nb = 2\\").unwrap();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a"]);
        assert_eq!(properties["a"], "1");
    }

    #[test]
    fn even_backslashes_do_not_continue() {
        let properties = parse("key = path\\\\\nnext = value").unwrap();

        assert_eq!(properties["key"], "path\\\\");
        assert_eq!(properties["next"], "value");
    }

    #[test]
    fn escaped_separator_stays_in_key() {
        let properties = parse("my\\ key = value").unwrap();

        assert_eq!(properties["my\\ key"], "value");
    }

    #[test]
    fn order_is_preserved_and_duplicates_overwrite() {
        let properties = parse("b = 1\na = 2\nb = 3").unwrap();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(properties["b"], "3");
    }

    #[test]
    fn key_without_value_is_rejected() {
        let err = parse("ok = 1\nlonely").unwrap_err();

        assert!(matches!(err, ConfigError::MissingKeyOrValue { line: 2 }));
    }

    #[test]
    fn key_with_only_separators_is_rejected() {
        let err = parse("key =   ").unwrap_err();

        assert!(matches!(err, ConfigError::MissingKeyOrValue { line: 1 }));
    }

    #[test]
    fn continued_line_detection() {
        assert!(is_continued("abc\\"));
        assert!(!is_continued("abc\\\\"));
        assert!(is_continued("abc\\\\\\"));
        assert!(!is_continued("abc"));
        assert!(!is_continued("\\"));
    }

    #[test]
    fn reader_input_is_parsed() {
        let properties = parse_reader("key = value".as_bytes(), "test", "memory").unwrap();

        assert_eq!(properties["key"], "value");
    }
}
