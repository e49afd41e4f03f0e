use futures::future::LocalBoxFuture;
use payloads::{Filters, Paginated, PaginationParams, SortOrder};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{FetchResource, RequestOptions, RequestState, Transport};

/// `base` with `params` appended as a query string.
///
/// Falls back to `base` itself if the query cannot be encoded, which only
/// happens for values the encoder rejects outright.
pub fn paginated_target(base: &str, params: &PaginationParams) -> String {
    params.target(base).unwrap_or_else(|e| {
        tracing::error!(base, "Dropping pagination parameters: {e}");
        base.to_string()
    })
}

/// A paginated endpoint returning a [`Paginated`] envelope.
///
/// Every mutator derives the new target from the updated params and starts
/// a fresh cycle on the underlying [`FetchResource`]. As with that type,
/// the returned future performs the request; the param change, the
/// cancellation of the previous cycle and the loading state all take
/// effect before it is returned.
pub struct PaginatedResource<T, Tr> {
    base: String,
    params: RefCell<PaginationParams>,
    resource: FetchResource<Paginated<T>, Tr>,
}

impl<T, Tr> PaginatedResource<T, Tr>
where
    T: DeserializeOwned + Clone + 'static,
    Tr: Transport + 'static,
{
    pub fn new(
        transport: Rc<Tr>,
        base: impl Into<String>,
        initial: PaginationParams,
    ) -> Self {
        let base = base.into();
        let target = paginated_target(&base, &initial);
        Self {
            resource: FetchResource::new(
                transport,
                target,
                RequestOptions::default(),
            ),
            base,
            params: RefCell::new(initial),
        }
    }

    pub fn params(&self) -> PaginationParams {
        self.params.borrow().clone()
    }

    /// The unwrapped page payload.
    pub fn data(&self) -> Option<T> {
        self.resource.state().data.map(|envelope| envelope.data)
    }

    /// Total reported by the server, 0 while there is no envelope.
    pub fn total(&self) -> u64 {
        self.resource
            .state()
            .data
            .map_or(0, |envelope| envelope.total)
    }

    pub fn is_loading(&self) -> bool {
        self.resource.state().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.resource.state().error
    }

    /// State with the envelope already unwrapped.
    pub fn state(&self) -> RequestState<T> {
        self.resource.state().map(|envelope| envelope.data)
    }

    /// The target the current params derive.
    pub fn target(&self) -> String {
        paginated_target(&self.base, &self.params.borrow())
    }

    pub fn set_page(&self, page: u32) -> LocalBoxFuture<'static, ()> {
        self.update(|params| params.set_page(page))
    }

    pub fn next_page(&self) -> LocalBoxFuture<'static, ()> {
        self.update(PaginationParams::next_page)
    }

    pub fn previous_page(&self) -> LocalBoxFuture<'static, ()> {
        self.update(PaginationParams::previous_page)
    }

    pub fn set_filters(&self, filters: Filters) -> LocalBoxFuture<'static, ()> {
        self.update(|params| params.set_filters(filters))
    }

    pub fn set_sort(
        &self,
        field: impl Into<String>,
        order: SortOrder,
    ) -> LocalBoxFuture<'static, ()> {
        let field = field.into();
        self.update(|params| params.set_sort(field, order))
    }

    /// Re-issue the current target without touching the params.
    pub fn refetch(&self) -> LocalBoxFuture<'static, ()> {
        self.resource.set_target(self.target())
    }

    /// Cancel the in-flight cycle on teardown.
    pub fn release(&self) {
        self.resource.release();
    }

    fn update(
        &self,
        f: impl FnOnce(&mut PaginationParams),
    ) -> LocalBoxFuture<'static, ()> {
        f(&mut *self.params.borrow_mut());
        self.refetch()
    }
}
