use futures::FutureExt;
use futures::future::LocalBoxFuture;
use payloads::ErrorBody;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    CancelHandle, Cycle, CycleTracker, RawResponse, RequestOptions,
    RequestState, Transport, TransportError,
};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A non-success status, with the message already resolved.
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Error text for a failed response: the body's `message` field if the
/// body is JSON carrying one, else a message synthesized from the status.
pub fn error_message(response: &RawResponse) -> String {
    serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| {
            format!("HTTP error! Status: {}", response.status.as_u16())
        })
}

fn decode<T: DeserializeOwned>(
    response: &RawResponse,
) -> Result<Option<T>, FetchError> {
    if !response.status.is_success() {
        return Err(FetchError::Http(error_message(response)));
    }
    if !response.is_json() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&response.body)?))
}

/// Turn a settled response into the state that ends its cycle.
pub fn settle<T: DeserializeOwned>(response: RawResponse) -> RequestState<T> {
    let meta = response.meta();
    match decode(&response) {
        Ok(data) => RequestState::succeeded(data, meta),
        Err(e) => {
            tracing::warn!(status = %meta.status, "Fetch failed: {e}");
            RequestState::failed(e.to_string(), Some(meta))
        }
    }
}

/// Issue one request inside `cycle`.
///
/// Returns `None` if the cycle was cancelled or superseded, in which case
/// the caller must leave its state untouched.
pub async fn run_cycle<T, Tr>(
    transport: &Tr,
    target: &str,
    options: &RequestOptions,
    cycle: Cycle,
) -> Option<RequestState<T>>
where
    T: DeserializeOwned,
    Tr: Transport,
{
    tracing::debug!(cycle = cycle.id(), url = target, "Starting fetch cycle");
    let outcome = cycle.run(transport.send(target, options)).await?;
    Some(match outcome {
        Ok(response) => settle(response),
        Err(e) => {
            let e = FetchError::from(e);
            tracing::warn!(url = target, "Fetch failed: {e}");
            RequestState::failed(e.to_string(), None)
        }
    })
}

type Listener<T> = Rc<dyn Fn(&RequestState<T>)>;

/// Stores published state and forwards it to the listener, if any.
struct Publisher<T> {
    state: Rc<RefCell<RequestState<T>>>,
    listener: Option<Listener<T>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            listener: self.listener.clone(),
        }
    }
}

impl<T: Clone> Publisher<T> {
    fn publish(&self, state: RequestState<T>) {
        self.state.replace(state.clone());
        // The listener may start a new cycle, which publishes again
        if let Some(listener) = &self.listener {
            listener(&state);
        }
    }
}

/// A target whose response is fetched on demand, with at most one request
/// in flight.
///
/// Nothing is fetched until [`FetchResource::refetch`] is called; a UI
/// binding calls it on mount. [`FetchResource::release`] must be called on
/// teardown to cancel the in-flight cycle.
pub struct FetchResource<T, Tr> {
    transport: Rc<Tr>,
    target: RefCell<String>,
    options: RequestOptions,
    tracker: CycleTracker,
    current: RefCell<Option<CancelHandle>>,
    publisher: Publisher<T>,
}

impl<T, Tr> FetchResource<T, Tr>
where
    T: DeserializeOwned + Clone + 'static,
    Tr: Transport + 'static,
{
    pub fn new(
        transport: Rc<Tr>,
        target: impl Into<String>,
        options: RequestOptions,
    ) -> Self {
        Self {
            transport,
            target: RefCell::new(target.into()),
            options,
            tracker: CycleTracker::new(),
            current: RefCell::new(None),
            publisher: Publisher {
                state: Rc::new(RefCell::new(RequestState::default())),
                listener: None,
            },
        }
    }

    /// Call `listener` with every state this resource publishes.
    pub fn with_listener(
        mut self,
        listener: impl Fn(&RequestState<T>) + 'static,
    ) -> Self {
        self.publisher.listener = Some(Rc::new(listener));
        self
    }

    pub fn state(&self) -> RequestState<T> {
        self.publisher.state.borrow().clone()
    }

    pub fn target(&self) -> String {
        self.target.borrow().clone()
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Start a new cycle for the current target.
    ///
    /// The previous cycle is cancelled and the loading state published
    /// before this returns; the returned future performs the request and
    /// publishes its outcome.
    pub fn refetch(&self) -> LocalBoxFuture<'static, ()> {
        let cycle = self.begin();
        let transport = self.transport.clone();
        let target = self.target();
        let options = self.options.clone();
        let publisher = self.publisher.clone();

        async move {
            if let Some(state) =
                run_cycle(&*transport, &target, &options, cycle).await
            {
                publisher.publish(state);
            }
        }
        .boxed_local()
    }

    /// Point the resource at a new target and start a cycle for it.
    pub fn set_target(
        &self,
        target: impl Into<String>,
    ) -> LocalBoxFuture<'static, ()> {
        self.target.replace(target.into());
        self.refetch()
    }

    /// Cancel the in-flight cycle, if any. The last published state is left
    /// as it is.
    pub fn release(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.cancel();
        }
    }

    fn begin(&self) -> Cycle {
        self.release();
        let (handle, cycle) = self.tracker.start();
        self.current.replace(Some(handle));
        self.publisher.publish(RequestState::loading());
        cycle
    }
}
