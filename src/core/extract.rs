/// The extraction pipeline: listing text → move table → effect records → file.

use std::path::Path;
use thiserror::Error;

use crate::core::emit::{self, RecordSeparator};
use crate::core::parser::{self, SkippedLine};
use crate::core::rules::{RuleError, RuleSet};
use crate::core::table::MoveTable;
use crate::schema::record::OutputRecord;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One extraction pass over a listing: the intermediate table, the lines
/// that could not be parsed, and the records that matched a rule.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: MoveTable,
    pub skipped: Vec<SkippedLine>,
    pub records: Vec<OutputRecord>,
}

/// Runs the parse → map → filter → write pipeline.
#[derive(Debug, Clone)]
pub struct Extractor {
    pub rules: RuleSet,
    pub separator: RecordSeparator,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            rules: RuleSet::builtin(),
            separator: RecordSeparator::None,
        }
    }
}

impl Extractor {
    /// An extractor with the built-in rules and the import-compatible
    /// (delimiterless) output layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            separator: RecordSeparator::None,
        }
    }

    /// An extractor whose rules are loaded from a RON file.
    pub fn with_rules_file(path: &Path) -> Result<Self, ExtractError> {
        let rules = RuleSet::load_from_ron(path)?;
        Ok(Self::with_rules(rules))
    }

    pub fn separator(mut self, separator: RecordSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// Run the in-memory part of the pipeline over a listing.
    ///
    /// Unparsable lines are collected, never fatal. Records come out in
    /// table insertion order.
    pub fn extract(&self, listing: &str) -> Extraction {
        let mut table = MoveTable::new();
        let mut skipped = Vec::new();

        for (idx, line) in listing.lines().enumerate() {
            match parser::split_line(line) {
                Ok(Some(entry)) => {
                    table.insert(entry);
                }
                Ok(None) => {}
                Err(_) => skipped.push(SkippedLine {
                    line_no: idx + 1,
                    text: line.trim().to_string(),
                }),
            }
        }

        let records = table
            .iter()
            .filter_map(|(name, description)| self.rules.apply(name, description))
            .collect();

        Extraction {
            table,
            skipped,
            records,
        }
    }

    /// Render the matched records with this extractor's separator policy.
    pub fn render(&self, extraction: &Extraction) -> String {
        emit::render(&extraction.records, self.separator)
    }

    /// Full pipeline: extract from `listing` and overwrite `dest` with the
    /// rendered records.
    pub fn run(&self, listing: &str, dest: &Path) -> Result<Extraction, ExtractError> {
        let extraction = self.extract(listing);
        emit::write_file(&extraction.records, dest, self.separator)?;
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
Absorb \t\t\t  \tQuite an appealing move.
Acid \t\t\t  \tBadly startles Pokémon that the audience has high expectations of.
Dark Void \t\t\t  \tMakes the remaining Pokémon nervous.

Unsplittable
Zen Headbutt \t\t\t  \tQuite an appealing move.
";

    #[test]
    fn extract_builds_table_in_order() {
        let extraction = Extractor::new().extract(LISTING);
        assert_eq!(extraction.table.len(), 4);
        let names: Vec<&str> = extraction.table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Absorb", "Acid", "Dark Void", "Zen Headbutt"]);
    }

    #[test]
    fn extract_collects_skipped_lines() {
        let extraction = Extractor::new().extract(LISTING);
        assert_eq!(
            extraction.skipped,
            vec![SkippedLine {
                line_no: 5,
                text: "Unsplittable".to_string(),
            }]
        );
    }

    #[test]
    fn unmatched_descriptions_are_dropped() {
        let extraction = Extractor::new().extract(LISTING);
        assert_eq!(extraction.records.len(), 3);
        assert!(extraction
            .records
            .iter()
            .all(|record| record.name != "Dark Void"));
    }

    #[test]
    fn render_is_delimiterless_by_default() {
        let extractor = Extractor::new();
        let extraction = extractor.extract(LISTING);
        assert_eq!(
            extractor.render(&extraction),
            "Absorb|4|0|0|Quite an appealing move.\
             Acid|2|1|0|Badly startles the Pokémon that performed first.\
             Zen Headbutt|4|0|0|Quite an appealing move."
        );
    }

    #[test]
    fn duplicate_name_uses_later_description() {
        let listing = "\
Absorb \t\tMakes the remaining Pokémon nervous.
Absorb \t\tQuite an appealing move.
";
        let extraction = Extractor::new().extract(listing);
        assert_eq!(extraction.table.len(), 1);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(
            extraction.records[0].to_string(),
            "Absorb|4|0|0|Quite an appealing move."
        );
    }

    #[test]
    fn duplicate_name_reverting_to_unmatched_drops_record() {
        let listing = "\
Absorb \t\tQuite an appealing move.
Absorb \t\tMakes the remaining Pokémon nervous.
";
        let extraction = Extractor::new().extract(listing);
        assert_eq!(extraction.table.len(), 1);
        assert!(extraction.records.is_empty());
    }

    #[test]
    fn run_overwrites_destination_and_is_idempotent() {
        let path = std::path::PathBuf::from("target/test_extract_run.txt");

        let extractor = Extractor::new();
        extractor.run(LISTING, &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        extractor.run(LISTING, &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("Absorb|4|0|0|Quite an appealing move."));
        assert!(!first.ends_with('\n'));

        // Cleanup
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn newline_separator_applies_to_run() {
        let path = std::path::PathBuf::from("target/test_extract_newline.txt");

        let extractor = Extractor::new().separator(RecordSeparator::Newline);
        extractor.run(LISTING, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);

        // Cleanup
        let _ = std::fs::remove_file(&path);
    }
}
