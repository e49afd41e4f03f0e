use resource::{FetchResource, RequestOptions, RequestState, ResponseMeta};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_transport;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Status, status text and headers of the last completed response.
    pub response_meta: Option<ResponseMeta>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    fn from_state(state: &RequestState<T>, refetch: Callback<()>) -> Self {
        Self {
            data: state.data.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
            response_meta: state.response_meta.clone(),
            refetch,
        }
    }

    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - Loading: "Loading {context}..."
    /// - Error: "Error loading {context}: ..."
    /// - Data: calls `render_fn` with the data
    /// - Neither: "No {context} found", which is what a successful
    ///   non-JSON response looks like
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// items.render("items", |items| html! {
    ///     <ul>{for items.iter().map(|i| html! { <li>{&i.name}</li> })}</ul>
    /// })
    /// ```
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

pub(crate) fn render_state<T, F>(
    is_loading: bool,
    data: Option<&T>,
    error: Option<&str>,
    context: &str,
    render_fn: F,
) -> Html
where
    F: Fn(&T) -> Html,
{
    if is_loading {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("Loading {}...", context)}
                </p>
            </div>
        };
    }
    match (data, error) {
        (_, Some(error)) => html! {
            <div class="p-4 rounded-md bg-red-50 \
                       dark:bg-red-900/20 border \
                       border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 \
                          dark:text-red-400">
                    {format!("Error loading {}: {}", context, error)}
                </p>
            </div>
        },
        (Some(data), None) => render_fn(data),
        (None, None) => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("No {} found", context)}
                </p>
            </div>
        },
    }
}

/// Fetch `target` with a GET request. See [`use_fetch_with_options`].
#[hook]
pub fn use_fetch<T>(target: String) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    use_fetch_with_options(target, RequestOptions::default())
}

/// Fetch hook over a [`FetchResource`].
///
/// Fetches on mount and whenever `target` or `options` change. Each new
/// cycle cancels the previous one, and unmounting cancels whatever is in
/// flight, so a late response never lands in the state of a newer cycle or
/// of an unmounted component.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_profile(user: String) -> FetchHookReturn<Profile> {
///     use_fetch(format!("/api/users/{user}"))
/// }
/// ```
#[hook]
pub fn use_fetch_with_options<T>(
    target: String,
    options: RequestOptions,
) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    // Mounting always starts a cycle, so start out loading
    let state = use_state(RequestState::<T>::loading);

    let resource = {
        let setter = state.setter();
        use_memo((target.clone(), options.clone()), move |(target, options)| {
            FetchResource::new(
                Rc::new(get_transport()),
                target.clone(),
                options.clone(),
            )
            .with_listener(move |published: &RequestState<T>| {
                setter.set(published.clone())
            })
        })
    };

    // Fetch on mount and when the target changes; cancel on teardown
    {
        let resource = resource.clone();
        use_effect_with((target, options), move |_| {
            yew::platform::spawn_local(resource.refetch());
            move || resource.release()
        });
    }

    let refetch = Callback::from(move |_| {
        yew::platform::spawn_local(resource.refetch());
    });

    FetchHookReturn::from_state(&state, refetch)
}
