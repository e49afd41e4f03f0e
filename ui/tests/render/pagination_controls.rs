use ui::components::PaginationControls;
use ui::components::pagination_controls::Props;
use yew::Callback;

use crate::render;

fn props(page: u32, total: u64) -> Props {
    Props {
        page,
        page_size: 10,
        total,
        on_previous: Callback::noop(),
        on_next: Callback::noop(),
        is_loading: false,
    }
}

fn button<'a>(html: &'a str, label: &str) -> &'a str {
    html.split("<button")
        .find(|segment| segment.contains(label))
        .unwrap_or_default()
}

#[tokio::test]
async fn first_page_disables_previous() -> anyhow::Result<()> {
    let html = render::<PaginationControls>(|| props(1, 25)).await;

    assert!(html.contains("Page 1 of 3"));
    assert!(button(&html, "Previous").contains("disabled"));
    assert!(!button(&html, "Next").contains("disabled"));

    Ok(())
}

#[tokio::test]
async fn last_page_disables_next() -> anyhow::Result<()> {
    let html = render::<PaginationControls>(|| props(3, 25)).await;

    assert!(html.contains("Page 3 of 3"));
    assert!(!button(&html, "Previous").contains("disabled"));
    assert!(button(&html, "Next").contains("disabled"));

    Ok(())
}

#[tokio::test]
async fn loading_disables_both() -> anyhow::Result<()> {
    let html = render::<PaginationControls>(|| Props {
        is_loading: true,
        ..props(2, 25)
    })
    .await;

    assert!(html.contains("Page 2 of 3"));
    assert!(button(&html, "Previous").contains("disabled"));
    assert!(button(&html, "Next").contains("disabled"));

    Ok(())
}

#[tokio::test]
async fn empty_result_renders_nothing() -> anyhow::Result<()> {
    let html = render::<PaginationControls>(|| props(1, 0)).await;

    assert!(!html.contains("Page"));
    assert!(!html.contains("<button"));

    Ok(())
}
