//! Real-time bus arrivals for the Porto STCP network.
//!
//! Looks up the buses due at a stop, entered directly or reached by picking
//! a line, a direction and a stop from the STCP metadata service.

pub mod arrivals;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolve;
pub mod session;
pub mod stcp;
pub mod transport;

#[cfg(test)]
mod test_server;
