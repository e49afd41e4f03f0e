use payloads::{Item, PaginationParams};
use serde_json::Value;
use ui::hooks::{use_fetch, use_paginated_fetch};
use yew::prelude::*;

use crate::render;

#[function_component]
fn FetchProbe() -> Html {
    let fetch = use_fetch::<Value>("/api/anything".into());

    html! {
        <div>
            <span id="initial">{fetch.is_initial_loading().to_string()}</span>
            {fetch.render("things", |_| html! { <span>{"data"}</span> })}
        </div>
    }
}

#[function_component]
fn PaginatedProbe() -> Html {
    let items = use_paginated_fetch::<Vec<Item>>(
        "/api/items".into(),
        PaginationParams::new(2, 5),
    );

    html! {
        <p>
            {format!(
                "page={} size={} total={} loading={} error={}",
                items.params.page,
                items.params.page_size,
                items.total,
                items.is_loading,
                items.error.is_some(),
            )}
        </p>
    }
}

#[tokio::test]
async fn fetch_hook_starts_loading() -> anyhow::Result<()> {
    let html = render::<FetchProbe>(|| ()).await;

    assert!(html.contains("true"));
    assert!(html.contains("Loading things..."));
    assert!(!html.contains("data"));

    Ok(())
}

#[tokio::test]
async fn paginated_hook_initial_render() -> anyhow::Result<()> {
    let html = render::<PaginatedProbe>(|| ()).await;

    assert!(html.contains("page=2 size=5 total=0 loading=true error=false"));

    Ok(())
}
