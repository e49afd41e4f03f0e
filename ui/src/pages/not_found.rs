use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400">{"Nothing lives at this address"}</p>
            <Link<Route> to={Route::Home} classes="text-sm underline text-neutral-600 dark:text-neutral-400">
                {"Back to the overview"}
            </Link<Route>>
        </div>
    }
}
