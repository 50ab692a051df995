use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(action, group)` pair attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub action: String,
    pub group: String,
}

impl Classification {
    pub fn new(action: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            group: group.into(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.action, self.group)
    }
}

/// A single `(keyword, action, group)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub keyword: String,
    pub action: String,
    pub group: String,
}

impl MappingEntry {
    pub fn new(
        keyword: impl Into<String>,
        action: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            action: action.into(),
            group: group.into(),
        }
    }

    /// Case-insensitive substring test against already-lowercased text.
    fn matches_lowercase(&self, lowercase_text: &str) -> bool {
        !self.keyword.is_empty() && lowercase_text.contains(&self.keyword.to_lowercase())
    }

    pub fn classification(&self) -> Classification {
        Classification::new(&self.action, &self.group)
    }
}

/// An ordered keyword table with a fallback classification. First match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    pub entries: Vec<MappingEntry>,
    pub fallback: Classification,
}

impl MappingTable {
    pub fn new(entries: Vec<MappingEntry>, fallback: Classification) -> Self {
        Self { entries, fallback }
    }

    /// The first entry whose keyword occurs in `text`, if any.
    pub fn lookup(&self, text: &str) -> Option<&MappingEntry> {
        let lowercase = text.to_lowercase();
        self.entries.iter().find(|e| e.matches_lowercase(&lowercase))
    }

    pub fn classify(&self, text: &str) -> Classification {
        self.lookup(text)
            .map(MappingEntry::classification)
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Tries each candidate text in order and classifies by the first one that
    /// matches any entry. Falls back only when none of them match.
    pub fn classify_first<'a, I>(&self, candidates: I) -> Classification
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .find_map(|text| self.lookup(text))
            .map(MappingEntry::classification)
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
