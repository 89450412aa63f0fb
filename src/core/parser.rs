/// Listing-line parsing — whitespace-run splitting of name/description pairs.

use thiserror::Error;

use crate::schema::move_entry::MoveEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no name/description separator (run of 2+ whitespace characters) in line: {0:?}")]
    MissingSeparator(String),
}

/// A non-blank listing line that could not be split into a
/// name/description pair. Collected by the pipeline and reported by the
/// tools; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the listing.
    pub line_no: usize,
    /// The offending line, trimmed.
    pub text: String,
}

/// Split one listing line into a name/description pair.
///
/// The line is trimmed as a whole, then split at the FIRST run of two or
/// more consecutive whitespace characters. Later runs stay inside the
/// description. Both parts are non-empty by construction.
///
/// Returns `Ok(None)` for lines that are empty after trimming, and
/// `ParseError::MissingSeparator` for non-blank lines with no qualifying
/// run.
pub fn split_line(line: &str) -> Result<Option<MoveEntry>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match find_separator(trimmed) {
        Some((run_start, run_end)) => Ok(Some(MoveEntry::new(
            &trimmed[..run_start],
            &trimmed[run_end..],
        ))),
        None => Err(ParseError::MissingSeparator(trimmed.to_string())),
    }
}

/// Find the byte range of the first run of 2+ whitespace characters.
///
/// The input must already be trimmed, so a qualifying run is always
/// followed by a non-whitespace character.
fn find_separator(s: &str) -> Option<(usize, usize)> {
    let mut run_start = None;
    let mut run_len = 0;

    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(i);
            }
            run_len += 1;
        } else {
            if run_len >= 2 {
                return Some((run_start.unwrap(), i));
            }
            run_start = None;
            run_len = 0;
        }
    }

    None
}
