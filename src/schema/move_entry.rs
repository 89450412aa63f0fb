use serde::{Deserialize, Serialize};

/// A single name/description pair parsed from one listing line.
///
/// Names may contain internal single spaces ("Dark Void", "Ally Switch");
/// descriptions are free text and may contain arbitrary punctuation and
/// non-ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub name: String,
    pub description: String,
}

impl MoveEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
