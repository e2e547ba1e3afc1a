//! HTTP transport with a single request slot.
//!
//! Every fetch claims the slot when it is issued. Claiming the slot
//! supersedes whatever request held it before: the superseded request is
//! dropped (aborting the underlying HTTP exchange) and resolves to
//! [`Delivery::Superseded`] instead of its result or its error.
//!
//! Two fetch shapes share the slot:
//! - [`Transport::fetch_structured`] decodes a JSON body
//! - [`Transport::fetch_document`] parses an HTML body

mod charset;
mod client;
mod document;
mod error;
mod slot;

pub use client::Transport;
pub use document::ParsedDocument;
pub use error::NetworkError;
pub use slot::{Delivery, RequestSlot, Ticket};
