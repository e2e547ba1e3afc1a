//! Extraction error types.

use std::fmt;

/// The three cells read from each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Id,
    Destination,
    Status,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowField::Id => "id",
            RowField::Destination => "destination",
            RowField::Status => "status",
        })
    }
}

/// A row lacked one of its cells. Fails the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {row} has no {field} cell")]
pub struct MalformedRowError {
    /// Zero-based index of the row within the document
    pub row: usize,
    pub field: RowField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MalformedRowError {
            row: 3,
            field: RowField::Status,
        };
        assert_eq!(err.to_string(), "row 3 has no status cell");
    }
}
