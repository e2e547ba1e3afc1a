//! STCP client: turns session requests into fetches.

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::arrivals::{ArrivalBoard, extract};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{Delivery, Transport};

use super::endpoints::Endpoints;
use super::types::{DirectionInfo, LineInfo, Records, StopInfo};

/// A fetch the session wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Lines,
    Directions { line: String },
    Stops { line: String, direction: String },
    Arrivals { stop: String },
}

/// A delivered response, decoded and ready to apply to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<LineInfo>),
    Directions(Vec<DirectionInfo>),
    Stops(Vec<StopInfo>),
    Arrivals(ArrivalBoard),
}

/// How an issued request ended.
pub type Completion = Result<Delivery<Reply>, ClientError>;

/// Client for the STCP metadata and arrival endpoints.
#[derive(Debug)]
pub struct StcpClient {
    transport: Transport,
    endpoints: Endpoints,
}

impl StcpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            transport: Transport::new(config.timeout)?,
            endpoints: Endpoints::new(config)?,
        })
    }

    /// Issue `request`.
    ///
    /// The transport slot is claimed here, before the returned future is
    /// polled, so a later `execute` always supersedes an earlier one.
    pub fn execute(&self, request: Request) -> LocalBoxFuture<'_, Completion> {
        tracing::debug!(?request, "issuing request");

        match request {
            Request::Lines => {
                let fetch = self
                    .transport
                    .fetch_structured::<Records<LineInfo>>(self.endpoints.lines());
                async move { Ok::<_, ClientError>(fetch.await?.map(|r| Reply::Lines(r.records))) }
                    .boxed_local()
            }
            Request::Directions { line } => {
                let fetch = self
                    .transport
                    .fetch_structured::<Records<DirectionInfo>>(self.endpoints.directions(&line));
                async move { Ok::<_, ClientError>(fetch.await?.map(|r| Reply::Directions(r.records))) }
                    .boxed_local()
            }
            Request::Stops { line, direction } => {
                let fetch = self
                    .transport
                    .fetch_structured::<Records<StopInfo>>(self.endpoints.stops(&line, &direction));
                async move { Ok::<_, ClientError>(fetch.await?.map(|r| Reply::Stops(r.records))) }
                    .boxed_local()
            }
            Request::Arrivals { stop } => {
                let fetch = self.transport.fetch_document(self.endpoints.arrivals(&stop));
                async move {
                    let document = match fetch.await? {
                        Delivery::Delivered(document) => document,
                        Delivery::Superseded => return Ok(Delivery::Superseded),
                    };
                    let records = extract(&document)?;
                    let board = ArrivalBoard::new(stop, records);
                    Ok::<_, ClientError>(Delivery::Delivered(Reply::Arrivals(board)))
                }
                .boxed_local()
            }
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
