//! Cancellable fetch resources.
//!
//! A [`FetchResource`] owns at most one in-flight request and publishes a
//! [`RequestState`] as the request moves through its cycle. A
//! [`PaginatedResource`] layers page, filter and sort bookkeeping on top
//! of it. Neither type depends on a UI framework; the Yew hooks in the
//! `ui` crate are thin bindings over them.

pub mod cycle;
pub mod fetch;
pub mod options;
pub mod paginated;
pub mod state;
pub mod transport;

pub use cycle::{CancelHandle, Cycle, CycleTracker};
pub use fetch::{FetchError, FetchResource, error_message, run_cycle, settle};
pub use options::RequestOptions;
pub use paginated::{PaginatedResource, paginated_target};
pub use state::{RequestState, ResponseMeta};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
