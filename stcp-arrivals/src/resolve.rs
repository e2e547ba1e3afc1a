//! Resolving user-facing labels back to metadata records.
//!
//! Each selection list shows one label per record (line description,
//! direction description, stop name). Picking a label means finding the
//! record whose label is exactly that string. A miss is normal: it is what
//! the `---` placeholder resolves to.

use crate::stcp::{DirectionInfo, LineInfo, StopInfo};

/// Label shown before anything is selected.
pub const PLACEHOLDER: &str = "---";

/// A record shown in a selection list.
pub trait Labelled {
    fn label(&self) -> &str;
}

impl Labelled for LineInfo {
    fn label(&self) -> &str {
        &self.description
    }
}

impl Labelled for DirectionInfo {
    fn label(&self) -> &str {
        &self.descr_dir
    }
}

impl Labelled for StopInfo {
    fn label(&self) -> &str {
        &self.name
    }
}

/// First record whose label equals `label` exactly.
pub fn find_selected<'a, T: Labelled>(records: &'a [T], label: &str) -> Option<&'a T> {
    records.iter().find(|record| record.label() == label)
}

/// Which selection list a label was picked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Line,
    Direction,
    Stop,
}

/// A resolved selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selected<'a> {
    Line(&'a LineInfo),
    Direction(&'a DirectionInfo),
    Stop(&'a StopInfo),
}

/// The metadata currently loaded into the three selection lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub lines: Vec<LineInfo>,
    pub directions: Vec<DirectionInfo>,
    pub stops: Vec<StopInfo>,
}

impl Catalog {
    /// Resolve `label` against the list for `kind`.
    pub fn resolve(&self, kind: SelectionKind, label: &str) -> Option<Selected<'_>> {
        match kind {
            SelectionKind::Line => find_selected(&self.lines, label).map(Selected::Line),
            SelectionKind::Direction => {
                find_selected(&self.directions, label).map(Selected::Direction)
            }
            SelectionKind::Stop => find_selected(&self.stops, label).map(Selected::Stop),
        }
    }

    /// Labels of one list, placeholder first.
    pub fn labels(&self, kind: SelectionKind) -> Vec<&str> {
        let labels: Vec<&str> = match kind {
            SelectionKind::Line => self.lines.iter().map(Labelled::label).collect(),
            SelectionKind::Direction => self.directions.iter().map(Labelled::label).collect(),
            SelectionKind::Stop => self.stops.iter().map(Labelled::label).collect(),
        };
        std::iter::once(PLACEHOLDER).chain(labels).collect()
    }
}
