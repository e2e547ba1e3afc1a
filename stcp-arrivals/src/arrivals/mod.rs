//! Arrival extraction from the STCP widget document.
//!
//! The widget answers with an HTML page holding one `.separa` row per
//! incoming bus inside the `.overview` container. Each row has the line in
//! `.Linha1`, the destination in `.Linha2` and the waiting status in
//! `.Linha4`. Rows are emitted in document order.

mod error;
mod extract;
mod normalize;
mod record;

pub use error::{MalformedRowError, RowField};
pub use extract::extract;
pub use normalize::{normalize_destination, normalize_status};
pub use record::{ArrivalBoard, ArrivalRecord};
