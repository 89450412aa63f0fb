use serde::{Deserialize, Serialize};
use std::fmt;

/// A single effect record destined for game import.
///
/// Renders as `name|appeal|jam|unused|effect`. There is no escaping
/// scheme: a `|` inside `name` or `effect` passes through verbatim, so
/// the field count of a rendered record is only reliable for clean
/// source data (the dataset linter flags collisions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub appeal: u8,
    pub jam: u8,
    pub unused: u8,
    pub effect: String,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.name, self.appeal, self.jam, self.unused, self.effect
        )
    }
}
