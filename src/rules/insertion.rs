//! Finding where a generated header can go inside a free-form code body.

use itertools::Itertools;

/// Line comment prefix of the code bodies being edited.
pub const COMMENT_MARKER: &str = "//";

/// Where to put a header relative to the existing body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// The body does not open with a comment; the header goes first.
    Prepend,
    /// Insert before this zero-based line, the first code line after the leading
    /// comment block.
    BeforeLine(usize),
    /// The body is nothing but comments; the header goes last.
    End,
}

fn is_code_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

/// Locates the insertion point for `body`.
///
/// Blank lines and comment lines (decorative `// ═══` separators included) all belong
/// to the leading comment block.
pub fn find_insertion_point(body: &str) -> InsertionPoint {
    if !body.trim().starts_with(COMMENT_MARKER) {
        return InsertionPoint::Prepend;
    }
    body.split('\n')
        .position(is_code_line)
        .map_or(InsertionPoint::End, InsertionPoint::BeforeLine)
}

/// Inserts `header` into `body` at `point`, returning the whole new body.
///
/// `header` is a block of complete lines without a trailing newline. A blank line
/// separates it from the code that follows (or, at the end, from the comments before it).
pub fn splice(body: &str, header: &str, point: InsertionPoint) -> String {
    match point {
        InsertionPoint::Prepend => format!("{}\n\n{}", header, body),
        InsertionPoint::BeforeLine(index) => {
            let lines = body.split('\n').collect::<Vec<_>>();
            let index = index.min(lines.len());
            lines[..index]
                .iter()
                .copied()
                .chain(header.split('\n'))
                .chain(std::iter::once(""))
                .chain(lines[index..].iter().copied())
                .join("\n")
        }
        InsertionPoint::End => format!("{}\n\n{}\n", body.trim_end(), header),
    }
}
