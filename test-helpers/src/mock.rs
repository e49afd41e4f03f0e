//! Scripted transport and sample data for resource tests.
//!
//! [`MockTransport`] answers each request with the next response queued for
//! its exact target. Responses can be released later through a [`Gate`],
//! which lets a test hold a request in flight while it cancels or
//! supersedes the cycle that issued it.

use futures::channel::oneshot;
use payloads::Item;
use resource::{RawResponse, RequestOptions, Transport, TransportError};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

type Outcome = Result<RawResponse, String>;

enum Scripted {
    Ready(Outcome),
    Gated(oneshot::Receiver<Outcome>),
}

/// A request the transport received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub target: String,
    pub options: RequestOptions,
}

#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<Recorded>>,
}

/// Releases a response that was scripted with
/// [`MockTransport::respond_later`].
pub struct Gate {
    sender: oneshot::Sender<Outcome>,
}

impl Gate {
    pub fn release(self, response: RawResponse) {
        // The receiver is gone if the request was never sent or was dropped
        let _ = self.sender.send(Ok(response));
    }

    pub fn fail(self, message: &str) {
        let _ = self.sender.send(Err(message.to_string()));
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` for the next request to `target`.
    pub fn respond(&self, target: &str, response: RawResponse) {
        self.push(target, Scripted::Ready(Ok(response)));
    }

    /// Queue a transport failure for the next request to `target`.
    pub fn fail(&self, target: &str, message: &str) {
        self.push(target, Scripted::Ready(Err(message.to_string())));
    }

    /// Queue a response for `target` that stays pending until the returned
    /// gate is released.
    pub fn respond_later(&self, target: &str) -> Gate {
        let (sender, receiver) = oneshot::channel();
        self.push(target, Scripted::Gated(receiver));
        Gate { sender }
    }

    /// Targets requested so far, oldest first.
    pub fn requested_targets(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.target.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    fn push(&self, target: &str, scripted: Scripted) {
        self.routes
            .borrow_mut()
            .entry(target.to_string())
            .or_default()
            .push_back(scripted);
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(Recorded {
            target: target.to_string(),
            options: options.clone(),
        });

        let scripted = self
            .routes
            .borrow_mut()
            .get_mut(target)
            .and_then(VecDeque::pop_front);

        let outcome = match scripted {
            None => Err(format!("No response scripted for {target}")),
            Some(Scripted::Ready(outcome)) => outcome,
            Some(Scripted::Gated(receiver)) => receiver
                .await
                .unwrap_or_else(|_| Err("Gate dropped".to_string())),
        };
        outcome.map_err(TransportError::Other)
    }
}

/// `count` items with ids starting at 1.
pub fn demo_items(count: u64) -> Vec<Item> {
    (1..=count)
        .map(|id| Item {
            id,
            name: format!("Item {id}"),
        })
        .collect()
}
