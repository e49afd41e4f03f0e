use resource::HttpTransport;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod pages;
pub mod utils;

mod logs;

pub use logs::init_logging;

use components::layout::MainLayout;
use pages::{DemoPage, HomePage, NotFoundPage};

/// Base address for relative fetch targets.
pub fn api_address() -> String {
    // Try environment variable first (set at build time)
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.to_string();
    }
    same_origin().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn same_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

// No browser window outside wasm; targets are used as given
#[cfg(not(target_arch = "wasm32"))]
fn same_origin() -> Option<String> {
    None
}

pub fn get_transport() -> HttpTransport {
    HttpTransport::new(api_address())
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/demo")]
    Demo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Demo => html! { <DemoPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}
