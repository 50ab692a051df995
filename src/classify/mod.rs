//! Keyword classification of free-text node names.
//!
//! A [`MappingTable`] is an ordered list of `(keyword, action, group)` entries. Text is
//! classified by the first entry whose keyword occurs in it, compared case-insensitively,
//! so more specific keywords must be listed before the shorter keywords they contain.

pub mod defaults;
pub mod table;

pub use table::*;

/// Resolves `text` against `table`, returning the table's fallback when nothing matches.
pub fn classify(text: &str, table: &MappingTable) -> Classification {
    table.classify(text)
}
