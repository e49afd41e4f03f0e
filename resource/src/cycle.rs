//! Request cycle bookkeeping.
//!
//! Every request a resource issues runs inside a [`Cycle`]. Starting a
//! cycle hands back a [`CancelHandle`] which the owner fires when the cycle
//! is superseded or when the owner is torn down. Independently of the
//! abort, a cycle only yields its result if it is still the latest one
//! started, so a transport that ignores cancellation still cannot publish
//! stale state.

use futures::future::{AbortHandle, AbortRegistration, Abortable, Aborted};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Hands out monotonically increasing cycle ids.
#[derive(Debug, Clone, Default)]
pub struct CycleTracker {
    latest: Rc<Cell<u64>>,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding any earlier one.
    pub fn start(&self) -> (CancelHandle, Cycle) {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        let (abort, registration) = AbortHandle::new_pair();
        (
            CancelHandle { id, abort },
            Cycle {
                id,
                registration,
                latest: self.latest.clone(),
            },
        )
    }

    /// Id of the most recently started cycle, 0 if none was started.
    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}

/// Owner-side handle of a cycle.
#[derive(Debug)]
pub struct CancelHandle {
    id: u64,
    abort: AbortHandle,
}

impl CancelHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Abort the cycle's in-flight work.
    pub fn cancel(self) {
        tracing::debug!(cycle = self.id, "Cancelling fetch cycle");
        self.abort.abort();
    }
}

/// Worker-side half of a cycle.
#[derive(Debug)]
pub struct Cycle {
    id: u64,
    registration: AbortRegistration,
    latest: Rc<Cell<u64>>,
}

impl Cycle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.get() == self.id
    }

    /// Drive `work` to completion unless the cycle is cancelled.
    ///
    /// Returns `None` if the cycle was cancelled or superseded before the
    /// work settled.
    pub async fn run<F: Future>(self, work: F) -> Option<F::Output> {
        let Cycle {
            id,
            registration,
            latest,
        } = self;

        match Abortable::new(work, registration).await {
            Ok(output) if latest.get() == id => Some(output),
            Ok(_) => {
                tracing::debug!(
                    cycle = id,
                    latest = latest.get(),
                    "Discarding result of superseded fetch cycle"
                );
                None
            }
            Err(Aborted) => {
                tracing::debug!(cycle = id, "Fetch cycle was cancelled");
                None
            }
        }
    }
}
