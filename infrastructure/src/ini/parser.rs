//! Line reader for the config text format
//!
//! # Format
//! - Sections: `[Name]`
//! - Entries: `key = value` (split at the first `=`, both sides trimmed)
//! - Comments: lines starting with `#` or `;`
//! - Blank lines are ignored
//!
//! Every entry must follow a section header. Each header opens its own
//! block, including a header repeated later in the file.

use rdesk_domain::{ConfigError, IniDocument, Result};

/// Decode raw file contents as UTF-8 text.
///
/// Invalid bytes are a syntax error on the line where they start.
pub fn decode_text(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
        syntax(line, "file is not valid UTF-8 text")
    })
}

/// Parse config text into a document.
pub fn parse_document(text: &str) -> Result<IniDocument> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut document = IniDocument::new();
    let mut current_section: Option<String> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| syntax(line_no, "unterminated section header"))?
                .trim();
            if name.is_empty() {
                return Err(syntax(line_no, "empty section name"));
            }
            document.start_section(name);
            current_section = Some(name.to_string());
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| syntax(line_no, "expected `key = value`"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(syntax(line_no, "empty key"));
        }

        let section = current_section
            .as_deref()
            .ok_or_else(|| syntax(line_no, "entry outside of any section"))?;
        document.push(section, key, value.trim());
    }

    Ok(document)
}

fn syntax(line: usize, message: &str) -> ConfigError {
    ConfigError::Syntax {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_entries() {
        let text = "[Server]\nHost = 10.0.0.5\nPort = 9312\n[Client]\nOrientation = Landscape\n";
        let doc = parse_document(text).unwrap();

        assert_eq!(doc.sections().len(), 2);
        assert_eq!(doc.get("Server", "Host"), Some("10.0.0.5"));
        assert_eq!(doc.get("Server", "Port"), Some("9312"));
        assert_eq!(doc.get("Client", "Orientation"), Some("Landscape"));
    }

    #[test]
    fn test_whitespace_and_comments() {
        let text = "\u{feff}# comment\n\n  [ Font ]  \n; note\n   Pattern   =   Sans Bold 12   \n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.get("Font", "Pattern"), Some("Sans Bold 12"));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let doc = parse_document("[Security]\nPassword = a=b=c\n").unwrap();
        assert_eq!(doc.get("Security", "Password"), Some("a=b=c"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let doc = parse_document("[Stats]\nFile =\n").unwrap();
        assert_eq!(doc.get("Stats", "File"), Some(""));
    }

    #[test]
    fn test_entries_keep_file_order() {
        let text = "[Shortcuts]\nZoomIn = Ctrl+Plus\nMoveUp = Up\nZoomIn = None\n";
        let doc = parse_document(text).unwrap();
        let keys: Vec<_> = doc.sections()[0]
            .entries
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(keys, vec!["ZoomIn", "MoveUp", "ZoomIn"]);
    }

    #[test]
    fn test_repeated_header_opens_new_block() {
        let text = "[Server]\nHost = a\n[Client]\nOrientation = Portrait\n[Server]\nPort = 1\n";
        let doc = parse_document(text).unwrap();

        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Server", "Client", "Server"]);
        assert_eq!(doc.section("Server").unwrap().entries.len(), 1);
        assert_eq!(doc.get("Server", "Port"), Some("1"));
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("[Server]\n".as_bytes()).unwrap(), "[Server]\n");

        let bytes = b"[Server]\nHost = caf\xe9\n";
        match decode_text(bytes).unwrap_err() {
            ConfigError::Syntax { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_syntax_errors_report_line() {
        let cases = [
            ("Host = a\n", 1),
            ("[Server]\nHost\n", 2),
            ("[Server\n", 1),
            ("[]\n", 1),
            ("[Server]\n\n = 5\n", 3),
        ];
        for (text, expected_line) in cases {
            match parse_document(text).unwrap_err() {
                ConfigError::Syntax { line, .. } => assert_eq!(line, expected_line, "{text:?}"),
                other => panic!("unexpected error for {text:?}: {other}"),
            }
        }
    }
}
