/// Output rules — the description→record rule table, loading, and matching.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::record::OutputRecord;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// What to emit for a move whose description matches a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Rule")]
pub struct OutputRule {
    pub appeal: u8,
    pub jam: u8,
    /// Third numeric field of the record; reserved by the import format.
    #[serde(default)]
    pub unused: u8,
    /// Replacement effect text. `None` emits the source description
    /// unchanged.
    #[serde(default)]
    pub rewrite: Option<String>,
}

/// A set of output rules keyed by exact description literal.
///
/// Matching is exact string equality — no normalization, no prefixes.
/// A description matched by no rule produces no record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: FxHashMap<String, OutputRule>,
}

impl RuleSet {
    /// The built-in rule table used by the shipped extraction run.
    pub fn builtin() -> RuleSet {
        let mut set = RuleSet::default();
        set.insert(
            "Quite an appealing move.",
            OutputRule {
                appeal: 4,
                jam: 0,
                unused: 0,
                rewrite: None,
            },
        );
        set.insert(
            "Badly startles Pokémon that the audience has high expectations of.",
            OutputRule {
                appeal: 2,
                jam: 1,
                unused: 0,
                rewrite: Some("Badly startles the Pokémon that performed first.".to_string()),
            },
        );
        set
    }

    /// Load a rule set from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<RuleSet, RuleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a rule set from a RON string.
    ///
    /// The format is a map from description literal to rule:
    ///
    /// ```ron
    /// {
    ///     "Quite an appealing move.": Rule(appeal: 4, jam: 0),
    /// }
    /// ```
    pub fn parse_ron(input: &str) -> Result<RuleSet, RuleError> {
        let rules: FxHashMap<String, OutputRule> = ron::from_str(input)?;
        Ok(RuleSet { rules })
    }

    /// Merge another rule set into this one. Rules from `other` override
    /// rules in `self` with the same description.
    pub fn merge(&mut self, other: RuleSet) {
        for (description, rule) in other.rules {
            self.rules.insert(description, rule);
        }
    }

    pub fn insert(&mut self, description: impl Into<String>, rule: OutputRule) {
        self.rules.insert(description.into(), rule);
    }

    /// Look up the rule for a description, if one matches exactly.
    pub fn matched(&self, description: &str) -> Option<&OutputRule> {
        self.rules.get(description)
    }

    /// Build the output record for a (name, description) pair, or `None`
    /// if no rule matches the description.
    pub fn apply(&self, name: &str, description: &str) -> Option<OutputRecord> {
        let rule = self.matched(description)?;
        Some(OutputRecord {
            name: name.to_string(),
            appeal: rule.appeal,
            jam: rule.jam,
            unused: rule.unused,
            effect: rule
                .rewrite
                .clone()
                .unwrap_or_else(|| description.to_string()),
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
