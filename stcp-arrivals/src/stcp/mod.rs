//! STCP endpoints and the requests the session issues against them.
//!
//! The metadata endpoint answers JSON (`lineslist`, `linedirslist`,
//! `linestops`); the arrival widget answers an HTML page. All requests go
//! through one [`Transport`](crate::transport::Transport), so each new
//! request supersedes the one before it, whatever its kind.

mod client;
mod endpoints;
mod types;

pub use client::{Completion, Reply, Request, StcpClient};
pub use endpoints::Endpoints;
pub use types::{DirectionInfo, LineInfo, Records, StopInfo};
