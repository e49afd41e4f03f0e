use payloads::{Filters, Paginated, PaginationParams, SortOrder};
use resource::{ResponseMeta, paginated_target};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::use_fetch;
use super::use_fetch::render_state;

/// Hook return type for paginated endpoints
pub struct PaginatedFetchHookReturn<T> {
    /// The page payload, unwrapped from its envelope
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub response_meta: Option<ResponseMeta>,
    /// Total reported by the server; 0 until an envelope arrives
    pub total: u64,
    pub params: PaginationParams,
    pub set_page: Callback<u32>,
    pub next_page: Callback<()>,
    pub previous_page: Callback<()>,
    pub set_filters: Callback<Filters>,
    pub set_sort: Callback<(String, SortOrder)>,
    pub refetch: Callback<()>,
}

impl<T> PaginatedFetchHookReturn<T> {
    /// Same as [`FetchHookReturn::render`](super::FetchHookReturn::render)
    /// for the unwrapped page.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T) -> Html,
    {
        render_state(
            self.is_loading,
            self.data.as_ref(),
            self.error.as_deref(),
            context,
            render_fn,
        )
    }
}

/// Callback that applies `f` to the current params.
fn updater<A: 'static>(
    params: &UseStateHandle<PaginationParams>,
    f: impl Fn(&mut PaginationParams, A) + 'static,
) -> Callback<A> {
    let params = params.clone();
    Callback::from(move |arg: A| {
        let mut next = (*params).clone();
        f(&mut next, arg);
        params.set(next);
    })
}

/// Hook for a paginated endpoint returning `{data, total}`.
///
/// Params live in component state. Each mutator changes the params, the
/// derived target changes with them, and [`use_fetch`] starts a new cycle
/// for it, cancelling the one in flight.
#[hook]
pub fn use_paginated_fetch<T>(
    url: String,
    initial: PaginationParams,
) -> PaginatedFetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let params = use_state(move || initial);
    let target = paginated_target(&url, &params);
    let fetch = use_fetch::<Paginated<T>>(target);

    let total = fetch.data.as_ref().map_or(0, |envelope| envelope.total);

    PaginatedFetchHookReturn {
        data: fetch.data.map(|envelope| envelope.data),
        is_loading: fetch.is_loading,
        error: fetch.error,
        response_meta: fetch.response_meta,
        total,
        params: (*params).clone(),
        set_page: updater(&params, |p, page| p.set_page(page)),
        next_page: updater(&params, |p, ()| p.next_page()),
        previous_page: updater(&params, |p, ()| p.previous_page()),
        set_filters: updater(&params, |p, filters| p.set_filters(filters)),
        set_sort: updater(&params, |p, (field, order)| p.set_sort(field, order)),
        refetch: fetch.refetch,
    }
}
