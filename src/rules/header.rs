//! The normalization header placed at the top of processing bodies.

use super::insertion::COMMENT_MARKER;
use crate::classify::Classification;
use itertools::Itertools;

/// Whether `body` already carries a header. Exact, case-sensitive match.
pub fn contains_marker(body: &str, marker: &str) -> bool {
    !marker.is_empty() && body.contains(marker)
}

/// Renders the header block without a trailing newline:
///
/// ```text
/// // 🛡️ SAFE HEADER - Reflink Message Standard
/// msg.action = msg.action || 'showAlarms';
/// msg.group = msg.group || 'Alarms';
/// ```
pub fn render_header(title: &str, classification: &Classification) -> String {
    header_lines(title, classification).join("\n")
}

pub fn header_lines(title: &str, classification: &Classification) -> Vec<String> {
    vec![
        format!("{} {}", COMMENT_MARKER, title),
        default_assignment("action", &classification.action),
        default_assignment("group", &classification.group),
    ]
}

/// `msg.<property> = msg.<property> || '<value>';`
fn default_assignment(property: &str, value: &str) -> String {
    format!(
        "msg.{p} = msg.{p} || '{v}';",
        p = property,
        v = escape_single_quoted(value)
    )
}

fn escape_single_quoted(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\\' => "\\\\".to_string(),
            '\'' => "\\'".to_string(),
            '\n' => "\\n".to_string(),
            other => other.to_string(),
        })
        .join("")
}
