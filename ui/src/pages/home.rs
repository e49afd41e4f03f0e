use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="text-center space-y-8">
            <div>
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100 mb-4">
                    {"Data fetching hooks"}
                </h1>
                <p class="text-xl text-neutral-600 dark:text-neutral-400 mb-8">
                    {"Request state you can render, with stale responses dropped"}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mt-12">
                <div class="text-center">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"use_fetch"}
                    </h3>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Fetches a URL on mount and whenever it changes, exposing data, loading, error and response metadata. Lives in src/hooks."}
                    </p>
                </div>

                <div class="text-center">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"use_paginated_fetch"}
                    </h3>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Keeps page, page size, filters and sort in the query string and unwraps the data/total envelope. Lives in src/hooks."}
                    </p>
                </div>

                <div class="text-center">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Select"}
                    </h3>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"A dropdown with placeholder, required marker and validation message. Lives in src/components."}
                    </p>
                </div>
            </div>

            <Link<Route>
                to={Route::Demo}
                classes="inline-block px-4 py-2 rounded-md bg-neutral-900 dark:bg-neutral-100 text-white dark:text-neutral-900 text-sm font-medium"
            >
                {"Try the demo"}
            </Link<Route>>
        </div>
    }
}
