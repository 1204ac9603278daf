//! Editor page rendering.
//!
//! The page is a static template with two placeholders: `{{note_id}}` (page
//! title, download file name) and `{{content}}` (textarea body). Content is
//! HTML-escaped before insertion; ids are validated and need no escaping,
//! but are escaped anyway so the renderer does not depend on that.

use notepad_core::NoteId;

const EDITOR_TEMPLATE: &str = include_str!("../templates/editor.html");

const NOTE_ID_SLOT: &str = "{{note_id}}";
const CONTENT_SLOT: &str = "{{content}}";

/// Escape text for embedding in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the editor page for `id` holding `content` (empty if absent).
pub fn render_editor(id: &NoteId, content: &str) -> String {
    // Fill the id slots first so note content can never introduce a slot.
    let page = EDITOR_TEMPLATE.replace(NOTE_ID_SLOT, &escape_html(id.as_str()));
    page.replacen(CONTENT_SLOT, &escape_html(content), 1)
}
