use payloads::{Filters, Item, PaginationParams, SortOrder};
use reqwest::{Method, StatusCode};
use resource::{
    FetchResource, HttpTransport, PaginatedResource, RequestOptions,
};
use serde_json::{Value, json};
use std::rc::Rc;
use test_helpers::spawn_stub_server;
use test_helpers::stub::{Echo, ITEM_COUNT};

#[tokio::test]
async fn http_transport_fetches_json() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let transport = Rc::new(HttpTransport::new(&app.address));
    let resource: FetchResource<Value, _> =
        FetchResource::new(transport, "/json", RequestOptions::default());

    resource.refetch().await;

    let state = resource.state();
    assert_eq!(state.error, None);
    assert_eq!(state.data, Some(json!({"message": "Success"})));
    let meta = state.response_meta.expect("meta after a response");
    assert_eq!(meta.status, StatusCode::OK);
    assert!(
        meta.headers["content-type"]
            .to_str()?
            .contains("application/json")
    );

    Ok(())
}

#[tokio::test]
async fn http_transport_error_bodies() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let transport = Rc::new(HttpTransport::new(&app.address));

    let missing: FetchResource<Value, _> = FetchResource::new(
        transport.clone(),
        "/missing",
        RequestOptions::default(),
    );
    missing.refetch().await;
    let state = missing.state();
    assert_eq!(state.data, None);
    assert_eq!(state.error.as_deref(), Some("Not Found"));
    assert_eq!(
        state.response_meta.map(|m| m.status),
        Some(StatusCode::NOT_FOUND)
    );

    let broken: FetchResource<Value, _> =
        FetchResource::new(transport, "/broken", RequestOptions::default());
    broken.refetch().await;
    let state = broken.state();
    assert_eq!(state.error.as_deref(), Some("HTTP error! Status: 500"));
    assert_eq!(
        state.response_meta.map(|m| m.status_text),
        Some("Internal Server Error".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn http_transport_plain_text_is_not_data() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let resource: FetchResource<Value, _> = FetchResource::new(
        Rc::new(HttpTransport::new("")),
        app.url("/text"),
        RequestOptions::default(),
    );

    resource.refetch().await;

    let state = resource.state();
    assert_eq!(state.data, None);
    assert_eq!(state.error, None);
    assert!(!state.is_loading);

    Ok(())
}

#[tokio::test]
async fn http_transport_connection_failure() -> anyhow::Result<()> {
    test_helpers::init_tracing();
    // Bind and drop to find a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port();
    let resource: FetchResource<Value, _> = FetchResource::new(
        Rc::new(HttpTransport::new(format!("http://127.0.0.1:{port}"))),
        "/json",
        RequestOptions::default(),
    );

    resource.refetch().await;

    let state = resource.state();
    assert!(!state.is_loading);
    assert_eq!(state.data, None);
    assert!(state.error.is_some_and(|e| !e.is_empty()));
    assert_eq!(state.response_meta, None);

    Ok(())
}

#[tokio::test]
async fn http_transport_passes_options() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let options =
        RequestOptions::new(Method::POST).json(&json!({"name": "new"}))?;
    let resource: FetchResource<Echo, _> = FetchResource::new(
        Rc::new(HttpTransport::new(&app.address)),
        "/echo",
        options,
    );

    resource.refetch().await;

    let echo = resource.state().data.expect("echo response");
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.content_type.as_deref(), Some("application/json"));
    assert_eq!(echo.body, r#"{"name":"new"}"#);

    Ok(())
}

#[tokio::test]
async fn paginated_resource_against_stub() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let resource: PaginatedResource<Vec<Item>, _> = PaginatedResource::new(
        Rc::new(HttpTransport::new(&app.address)),
        "/items",
        PaginationParams::new(1, 10),
    );

    let ids = |resource: &PaginatedResource<Vec<Item>, _>| -> Vec<u64> {
        resource
            .data()
            .unwrap_or_default()
            .iter()
            .map(|item| item.id)
            .collect()
    };

    resource.refetch().await;
    assert_eq!(resource.total(), ITEM_COUNT);
    assert_eq!(ids(&resource), (1..=10).collect::<Vec<_>>());

    resource.next_page().await;
    assert_eq!(ids(&resource), (11..=20).collect::<Vec<_>>());

    resource.set_sort("id", SortOrder::Desc).await;
    let first = resource.data().and_then(|items| items.first().cloned());
    assert_eq!(first.map(|i| i.id), Some(15));

    // "Item 2" matches 2 and 20 through 25
    resource
        .set_filters(Filters::from([("name".to_string(), "Item 2".into())]))
        .await;
    assert_eq!(resource.params().page, 1);
    assert_eq!(resource.total(), 7);

    Ok(())
}

#[tokio::test]
async fn paginated_resource_server_rejection() -> anyhow::Result<()> {
    let app = spawn_stub_server().await?;
    let resource: PaginatedResource<Vec<Item>, _> = PaginatedResource::new(
        Rc::new(HttpTransport::new(&app.address)),
        "/items",
        PaginationParams::new(1, 10),
    );

    resource.set_page(0).await;

    assert_eq!(
        resource.error().as_deref(),
        Some("page and pageSize must be at least 1")
    );
    assert_eq!(resource.total(), 0);

    Ok(())
}
