/// The move table — an insertion-ordered, unique-key name→description mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::move_entry::MoveEntry;

/// Insertion-ordered mapping from move name to description.
///
/// Duplicate names overwrite: the later description wins and the entry
/// keeps its original position, so iteration order always follows first
/// insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveTable {
    entries: IndexMap<String, String>,
}

impl MoveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any existing description for the same
    /// name. Returns the displaced description, if any — callers that care
    /// about silent data loss (the linter does) can observe it here.
    pub fn insert(&mut self, entry: MoveEntry) -> Option<String> {
        self.entries.insert(entry.name, entry.description)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (name, description) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, desc)| (name.as_str(), desc.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(pairs: &[(&str, &str)]) -> MoveTable {
        let mut table = MoveTable::new();
        for (name, desc) in pairs {
            table.insert(MoveEntry::new(*name, *desc));
        }
        table
    }

    #[test]
    fn preserves_insertion_order() {
        let table = table_of(&[("Absorb", "a"), ("Acid", "b"), ("Ally Switch", "c")]);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Absorb", "Acid", "Ally Switch"]);
    }

    #[test]
    fn duplicate_name_keeps_later_description() {
        let mut table = table_of(&[("Absorb", "first"), ("Acid", "b")]);
        let displaced = table.insert(MoveEntry::new("Absorb", "second"));
        assert_eq!(displaced, Some("first".to_string()));
        assert_eq!(table.get("Absorb"), Some("second"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn duplicate_name_keeps_original_position() {
        let mut table = table_of(&[("Absorb", "a"), ("Acid", "b")]);
        table.insert(MoveEntry::new("Absorb", "z"));
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Absorb", "Acid"]);
    }

    #[test]
    fn fresh_insert_returns_none() {
        let mut table = MoveTable::new();
        assert_eq!(table.insert(MoveEntry::new("Absorb", "a")), None);
    }

    #[test]
    fn get_missing() {
        let table = table_of(&[("Absorb", "a")]);
        assert_eq!(table.get("Acid"), None);
    }
}
