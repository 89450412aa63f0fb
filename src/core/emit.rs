/// Record emission — rendering and destructive destination-file writes.

use std::path::Path;

use crate::schema::record::OutputRecord;

/// How consecutive records are joined in the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSeparator {
    /// Records run together with no delimiter and no trailing newline.
    /// Byte-compatible with the original import file.
    #[default]
    None,
    /// One newline between consecutive records.
    Newline,
}

impl RecordSeparator {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Newline => "\n",
        }
    }
}

/// Render records into the destination-file byte layout.
pub fn render(records: &[OutputRecord], separator: RecordSeparator) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push_str(separator.as_str());
        }
        out.push_str(&record.to_string());
    }
    out
}

/// Write records to `path`, destroying any prior content.
///
/// The write is not transactional: a failure mid-write leaves a partial
/// file with no backup.
pub fn write_file(
    records: &[OutputRecord],
    path: &Path,
    separator: RecordSeparator,
) -> std::io::Result<()> {
    std::fs::write(path, render(records, separator))
}
