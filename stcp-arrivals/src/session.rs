//! Session state and the caller-facing operations.
//!
//! A [`Session`] holds what the user currently sees: the three selection
//! lists, the stop input and the arrival board. Every operation comes in two
//! halves so an event loop can keep accepting input while a request is in
//! flight:
//!
//! - `begin_*` updates the state synchronously and returns the [`Request`]
//!   to issue, or `None` when there is nothing to fetch
//! - [`Session::apply`] folds the request's [`Completion`] back in
//!
//! The `submit_stop`, `select_*` and `load_lines` methods chain both halves
//! for callers that simply await each operation.

use crate::arrivals::ArrivalBoard;
use crate::error::ClientError;
use crate::resolve::{Catalog, Selected, SelectionKind};
use crate::stcp::{Completion, Reply, Request, StcpClient};
use crate::transport::Delivery;

/// What an applied completion changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Nothing: no request was needed, or the request was superseded.
    Unchanged,
    Lines,
    Directions,
    Stops,
    Board,
}

/// State of one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    selected_line: Option<String>,
    stop_input: String,
    board: Option<ArrivalBoard>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The stop code last submitted.
    pub fn stop_input(&self) -> &str {
        &self.stop_input
    }

    /// The board of the last completed arrivals fetch for the current stop.
    pub fn board(&self) -> Option<&ArrivalBoard> {
        self.board.as_ref()
    }

    // ------------------------------------------------------------------
    // Begin
    // ------------------------------------------------------------------

    pub fn begin_load_lines(&mut self) -> Request {
        Request::Lines
    }

    /// Submit a stop code. Blank input is ignored.
    ///
    /// Clears the board right away: until the new fetch completes there is
    /// nothing to show for the new stop.
    pub fn begin_submit_stop(&mut self, id: &str) -> Option<Request> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        self.stop_input = id.to_string();
        self.board = None;
        Some(Request::Arrivals {
            stop: id.to_string(),
        })
    }

    /// Pick a line. Directions and stops of the previous line are dropped
    /// whether or not the label resolves.
    pub fn begin_select_line(&mut self, label: &str) -> Option<Request> {
        self.catalog.directions.clear();
        self.catalog.stops.clear();
        self.selected_line = Some(label.to_string());

        let Some(Selected::Line(line)) = self.catalog.resolve(SelectionKind::Line, label) else {
            return None;
        };
        Some(Request::Directions {
            line: line.code.clone(),
        })
    }

    /// Pick a direction of the selected line. Stops are dropped whether or
    /// not the label resolves.
    pub fn begin_select_direction(&mut self, label: &str) -> Option<Request> {
        self.catalog.stops.clear();

        let line_label = self.selected_line.as_deref()?;
        let Some(Selected::Line(line)) = self.catalog.resolve(SelectionKind::Line, line_label)
        else {
            return None;
        };
        let Some(Selected::Direction(direction)) =
            self.catalog.resolve(SelectionKind::Direction, label)
        else {
            return None;
        };

        Some(Request::Stops {
            line: line.code.clone(),
            direction: direction.dir.clone(),
        })
    }

    /// Pick a stop: its code becomes the stop input and is submitted.
    pub fn begin_select_stop(&mut self, label: &str) -> Option<Request> {
        let Some(Selected::Stop(stop)) = self.catalog.resolve(SelectionKind::Stop, label) else {
            return None;
        };
        let code = stop.code.clone();
        self.begin_submit_stop(&code)
    }

    // ------------------------------------------------------------------
    // Apply
    // ------------------------------------------------------------------

    /// Fold a completion into the state.
    ///
    /// Superseded completions change nothing. Failures change nothing and
    /// are handed back to the caller.
    pub fn apply(&mut self, completion: Completion) -> Result<Update, ClientError> {
        let reply = match completion? {
            Delivery::Delivered(reply) => reply,
            Delivery::Superseded => return Ok(Update::Unchanged),
        };

        Ok(match reply {
            Reply::Lines(lines) => {
                self.catalog.lines = lines;
                Update::Lines
            }
            Reply::Directions(directions) => {
                self.catalog.directions = directions;
                Update::Directions
            }
            Reply::Stops(stops) => {
                self.catalog.stops = stops;
                Update::Stops
            }
            Reply::Arrivals(board) => {
                if board.stop != self.stop_input {
                    tracing::debug!(stop = %board.stop, "dropping board for stale stop");
                    return Ok(Update::Unchanged);
                }
                self.board = Some(board);
                Update::Board
            }
        })
    }

    // ------------------------------------------------------------------
    // One-shot operations
    // ------------------------------------------------------------------

    pub async fn load_lines(&mut self, client: &StcpClient) -> Result<Update, ClientError> {
        let request = self.begin_load_lines();
        self.run(client, Some(request)).await
    }

    pub async fn submit_stop(
        &mut self,
        client: &StcpClient,
        id: &str,
    ) -> Result<Update, ClientError> {
        let request = self.begin_submit_stop(id);
        self.run(client, request).await
    }

    pub async fn select_line(
        &mut self,
        client: &StcpClient,
        label: &str,
    ) -> Result<Update, ClientError> {
        let request = self.begin_select_line(label);
        self.run(client, request).await
    }

    pub async fn select_direction(
        &mut self,
        client: &StcpClient,
        label: &str,
    ) -> Result<Update, ClientError> {
        let request = self.begin_select_direction(label);
        self.run(client, request).await
    }

    pub async fn select_stop(
        &mut self,
        client: &StcpClient,
        label: &str,
    ) -> Result<Update, ClientError> {
        let request = self.begin_select_stop(label);
        self.run(client, request).await
    }

    async fn run(
        &mut self,
        client: &StcpClient,
        request: Option<Request>,
    ) -> Result<Update, ClientError> {
        match request {
            Some(request) => {
                let completion = client.execute(request).await;
                self.apply(completion)
            }
            None => Ok(Update::Unchanged),
        }
    }
}
