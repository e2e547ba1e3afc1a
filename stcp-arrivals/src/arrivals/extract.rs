//! Row extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::transport::ParsedDocument;

use super::error::{MalformedRowError, RowField};
use super::normalize::{normalize_destination, normalize_status};
use super::record::ArrivalRecord;

static ROWS: LazyLock<Selector> = LazyLock::new(|| selector(".overview .separa"));
static ID_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".Linha1"));
static DESTINATION_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".Linha2"));
static STATUS_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".Linha4"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Extract the arrival records listed in a widget document.
///
/// A document without rows yields an empty list. A row missing any of its
/// cells fails the whole extraction.
pub fn extract(document: &ParsedDocument) -> Result<Vec<ArrivalRecord>, MalformedRowError> {
    document
        .html()
        .select(&ROWS)
        .enumerate()
        .map(|(index, row)| extract_row(index, row))
        .collect()
}

fn extract_row(index: usize, row: ElementRef<'_>) -> Result<ArrivalRecord, MalformedRowError> {
    let id = cell_text(index, row, &ID_CELL, RowField::Id)?;
    let destination = cell_text(index, row, &DESTINATION_CELL, RowField::Destination)?;
    let status = cell_text(index, row, &STATUS_CELL, RowField::Status)?;

    Ok(ArrivalRecord {
        id,
        destination: normalize_destination(&destination),
        status: normalize_status(&status),
    })
}

/// Trimmed text content of the first element under `row` matching `cell`.
fn cell_text(
    index: usize,
    row: ElementRef<'_>,
    cell: &Selector,
    field: RowField,
) -> Result<String, MalformedRowError> {
    let element = row
        .select(cell)
        .next()
        .ok_or(MalformedRowError { row: index, field })?;

    Ok(element.text().collect::<String>().trim().to_string())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// One record per well-formed row, in row order
        #[test]
        fn output_matches_rows(ids in proptest::collection::vec("[0-9]{1,3}[A-Z]?", 0..8)) {
            let rows: String = ids
                .iter()
                .map(|id| format!(
                    r#"<tr class="separa"><td class="Linha1">{id}</td><td class="Linha2">PORTO</td><td class="Linha4">passou há 2 min</td></tr>"#
                ))
                .collect();
            let html = format!(r#"<div class="overview"><table>{rows}</table></div>"#);

            let records = extract(&ParsedDocument::parse(&html)).unwrap();
            let got: Vec<_> = records.into_iter().map(|r| r.id).collect();
            prop_assert_eq!(got, ids);
        }
    }
}
