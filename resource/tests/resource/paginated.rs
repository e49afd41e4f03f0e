use payloads::{Filters, Item, PaginationParams, SortOrder};
use resource::PaginatedResource;
use serde_json::json;
use std::rc::Rc;
use test_helpers::{MockTransport, init_tracing, json_response};

const URL: &str = "https://api.example.com/data";

fn target(query: &str) -> String {
    format!("{URL}?{query}")
}

fn setup(
    page: u32,
) -> (Rc<MockTransport>, PaginatedResource<Vec<Item>, MockTransport>) {
    init_tracing();
    let transport = Rc::new(MockTransport::new());
    let resource = PaginatedResource::new(
        transport.clone(),
        URL,
        PaginationParams::new(page, 10),
    );
    (transport, resource)
}

fn page_of(ids: &[u64], total: u64) -> serde_json::Value {
    let data: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("Item {id}")}))
        .collect();
    json!({"data": data, "total": total})
}

#[tokio::test]
async fn unwraps_the_envelope() -> anyhow::Result<()> {
    let (transport, resource) = setup(1);
    transport.respond(
        &target("page=1&pageSize=10"),
        json_response(200, page_of(&[1], 100)),
    );

    // No envelope yet
    assert_eq!(resource.total(), 0);

    resource.refetch().await;

    assert!(!resource.is_loading());
    assert_eq!(resource.error(), None);
    assert_eq!(resource.total(), 100);
    assert_eq!(
        resource.data(),
        Some(vec![Item {
            id: 1,
            name: "Item 1".into()
        }])
    );
    assert_eq!(resource.state().data, resource.data());

    Ok(())
}

#[tokio::test]
async fn total_is_zero_on_error() -> anyhow::Result<()> {
    let (transport, resource) = setup(1);
    transport.respond(
        &target("page=1&pageSize=10"),
        json_response(500, json!({"message": "Fetch error"})),
    );

    resource.refetch().await;

    assert!(!resource.is_loading());
    assert_eq!(resource.error().as_deref(), Some("Fetch error"));
    assert_eq!(resource.data(), None);
    assert_eq!(resource.total(), 0);

    Ok(())
}

#[tokio::test]
async fn page_navigation() -> anyhow::Result<()> {
    let (transport, resource) = setup(1);
    for query in [
        "page=2&pageSize=10",
        "page=1&pageSize=10",
        "page=1&pageSize=10",
        "page=7&pageSize=10",
    ] {
        transport.respond(&target(query), json_response(200, page_of(&[], 0)));
    }

    resource.next_page().await;
    assert_eq!(resource.params().page, 2);

    resource.previous_page().await;
    assert_eq!(resource.params().page, 1);

    // Floors at the first page
    resource.previous_page().await;
    assert_eq!(resource.params().page, 1);

    resource.set_page(7).await;
    assert_eq!(resource.params().page, 7);

    assert_eq!(
        transport.requested_targets(),
        vec![
            target("page=2&pageSize=10"),
            target("page=1&pageSize=10"),
            target("page=1&pageSize=10"),
            target("page=7&pageSize=10"),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn set_filters_resets_page() -> anyhow::Result<()> {
    let (transport, resource) = setup(4);
    let expected = target("page=1&pageSize=10&name=Item+1");
    transport.respond(&expected, json_response(200, page_of(&[1], 1)));

    let filters = Filters::from([("name".to_string(), "Item 1".into())]);
    resource.set_filters(filters.clone()).await;

    let params = resource.params();
    assert_eq!(params.page, 1);
    assert_eq!(params.filters, Some(filters));
    assert_eq!(transport.requested_targets(), vec![expected]);
    assert_eq!(resource.total(), 1);

    Ok(())
}

#[tokio::test]
async fn set_sort_keeps_page() -> anyhow::Result<()> {
    let (transport, resource) = setup(3);
    let expected = target("page=3&pageSize=10&sortField=name&sortOrder=asc");
    transport.respond(&expected, json_response(200, page_of(&[21], 21)));

    resource.set_sort("name", SortOrder::Asc).await;

    let sort = resource.params().sort.expect("sort was set");
    assert_eq!(sort.field, "name");
    assert_eq!(sort.order, SortOrder::Asc);
    assert_eq!(resource.params().page, 3);
    assert_eq!(transport.requested_targets(), vec![expected]);

    Ok(())
}

#[tokio::test]
async fn refetch_reissues_current_target() -> anyhow::Result<()> {
    let (transport, resource) = setup(2);
    let expected = target("page=2&pageSize=10");
    transport.respond(&expected, json_response(200, page_of(&[11], 30)));
    transport.respond(&expected, json_response(200, page_of(&[11], 31)));

    resource.refetch().await;
    assert_eq!(resource.total(), 30);
    resource.refetch().await;
    assert_eq!(resource.total(), 31);

    assert_eq!(resource.params(), PaginationParams::new(2, 10));
    assert_eq!(transport.requested_targets(), vec![expected.clone(), expected]);

    Ok(())
}

#[tokio::test]
async fn page_change_cancels_previous_page() -> anyhow::Result<()> {
    let (transport, resource) = setup(1);
    let gate = transport.respond_later(&target("page=1&pageSize=10"));
    transport.respond(
        &target("page=2&pageSize=10"),
        json_response(200, page_of(&[11], 20)),
    );

    let mut first = resource.refetch();
    assert!(futures::poll!(&mut first).is_pending());

    let second = resource.next_page();
    gate.release(json_response(200, page_of(&[1], 20)));
    futures::join!(first, second);

    assert_eq!(resource.params().page, 2);
    assert_eq!(resource.data().map(|items| items[0].id), Some(11));

    Ok(())
}
