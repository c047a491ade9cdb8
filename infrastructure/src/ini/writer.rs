//! Line writer for the config text format

use rdesk_domain::IniDocument;

/// Render a document as config text.
///
/// Each section is written as a `[Name]` header followed by its
/// `key = value` lines, with a blank line between sections.
pub fn render_text(document: &IniDocument) -> String {
    let mut out = String::new();
    for (i, section) in document.sections().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", section.name));
        for entry in &section.entries {
            out.push_str(&format!("{} = {}\n", entry.key, entry.value));
        }
    }
    out
}
