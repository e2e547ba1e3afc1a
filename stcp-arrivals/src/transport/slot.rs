//! Single-slot request cancellation.

use std::future::Future;

use tokio::sync::watch;

/// Outcome of a fetch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery<T> {
    /// The request completed while it still held the slot.
    Delivered(T),
    /// A newer request claimed the slot first. The result was discarded.
    Superseded,
}

impl<T> Delivery<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Delivery<U> {
        match self {
            Delivery::Delivered(value) => Delivery::Delivered(f(value)),
            Delivery::Superseded => Delivery::Superseded,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Delivery::Superseded)
    }

    /// Returns the delivered value, if any.
    pub fn delivered(self) -> Option<T> {
        match self {
            Delivery::Delivered(value) => Some(value),
            Delivery::Superseded => None,
        }
    }
}

/// The one slot shared by every request a transport issues.
///
/// Holds a generation counter. Each claim bumps it, which wakes the
/// ticket of the previous holder.
#[derive(Debug)]
pub struct RequestSlot {
    generation: watch::Sender<u64>,
}

impl RequestSlot {
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation }
    }

    /// Claim the slot, superseding the current holder.
    pub fn claim(&self) -> Ticket {
        self.generation.send_modify(|g| *g = g.wrapping_add(1));
        let generation = self.generation.subscribe();
        tracing::debug!(generation = *generation.borrow(), "claimed request slot");
        Ticket { generation }
    }

    /// Number of claims made so far.
    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }
}

impl Default for RequestSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation token for one request.
///
/// Resolves as superseded as soon as a later claim is made on the same slot.
#[derive(Debug)]
pub struct Ticket {
    generation: watch::Receiver<u64>,
}

impl Ticket {
    /// Whether a later claim has already been made.
    pub fn is_superseded(&self) -> bool {
        self.generation.has_changed().unwrap_or(false)
    }

    /// Wait until a later claim is made.
    pub async fn superseded(&mut self) {
        if self.generation.changed().await.is_err() {
            // Slot dropped: nobody can claim it again.
            std::future::pending::<()>().await;
        }
    }

    /// Drive `request` to completion unless the slot is claimed again first.
    ///
    /// Supersession wins ties, so a result that is ready in the same poll as
    /// a newer claim is still discarded.
    pub async fn run<F: Future>(mut self, request: F) -> Delivery<F::Output> {
        tokio::select! {
            biased;
            () = self.superseded() => {
                tracing::debug!("request superseded");
                Delivery::Superseded
            }
            output = request => Delivery::Delivered(output),
        }
    }
}
