use payloads::{Item, PaginationParams, SortOrder};
use yew::prelude::*;

use crate::components::{PaginationControls, Select, SelectOption};
use crate::hooks::use_paginated_fetch;
use crate::utils::is_dev_mode;

const ITEMS_URL: &str = "/api/items";
const PAGE_SIZE: u32 = 10;

#[function_component]
pub fn DemoPage() -> Html {
    let items = use_paginated_fetch::<Vec<Item>>(
        ITEMS_URL.into(),
        PaginationParams::new(1, PAGE_SIZE),
    );

    let sort_options = vec![
        SelectOption::new("Oldest first", "asc"),
        SelectOption::new("Newest first", "desc"),
    ];
    let sort_value = items
        .params
        .sort
        .as_ref()
        .map(|sort| AttrValue::from(sort.order.to_string()));

    let on_sort = {
        let set_sort = items.set_sort.clone();
        Callback::from(move |value: String| {
            // Options only carry "asc" and "desc"
            if let Ok(order) = value.parse::<SortOrder>() {
                set_sort.emit(("id".to_string(), order));
            }
        })
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center justify-between gap-4">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Items"}
                </h1>
                <Select
                    class="w-48"
                    name="sort"
                    placeholder="Sort by"
                    options={sort_options}
                    value={sort_value}
                    onchange={on_sort}
                />
            </div>

            {items.render("items", |page: &Vec<Item>| html! {
                <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for page.iter().map(|item| html! {
                        <li key={item.id.to_string()} class="py-3 flex justify-between">
                            <span class="text-neutral-900 dark:text-neutral-100">
                                {&item.name}
                            </span>
                            <span class="text-sm text-neutral-500">
                                {format!("#{}", item.id)}
                            </span>
                        </li>
                    })}
                </ul>
            })}

            <PaginationControls
                page={items.params.page}
                page_size={items.params.page_size}
                total={items.total}
                is_loading={items.is_loading}
                on_previous={items.previous_page.clone()}
                on_next={items.next_page.clone()}
            />

            if is_dev_mode() {
                if let Some(meta) = &items.response_meta {
                    <p class="text-xs text-neutral-500 font-mono">
                        {format!("{} {}", meta.status.as_u16(), meta.status_text)}
                    </p>
                }
            }
        </div>
    }
}
