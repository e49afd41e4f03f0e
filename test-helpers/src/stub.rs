//! A local HTTP server with canned endpoints for end-to-end transport
//! tests.
//!
//! Routes:
//! - `GET /json`: `{"message": "Success"}` as JSON
//! - `GET /text`: a plain text body
//! - `GET /missing`: 404 with `{"message": "Not Found"}`
//! - `GET /broken`: 500 with a non-JSON body
//! - `GET /items`: paginated listing over [`demo_items`]; honours `page`,
//!   `pageSize`, `name` (substring filter), `sortField=name|id` and
//!   `sortOrder`
//! - `POST /echo`: echoes the method, content type and body back as JSON

use actix_web::dev::Server;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payloads::{Item, Paginated, SortOrder};
use serde::{Deserialize, Serialize};
use std::net::TcpListener;

use crate::demo_items;

/// Number of items served by `/items`.
pub const ITEM_COUNT: u64 = 25;

pub struct StubServer {
    pub port: u16,
    /// Base address, e.g. `http://127.0.0.1:40000`.
    pub address: String,
}

impl StubServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsQuery {
    page: Option<u32>,
    page_size: Option<u32>,
    name: Option<String>,
    sort_field: Option<String>,
    sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Echo {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

async fn json() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Success" }))
}

async fn text() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("plain text")
}

async fn missing() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Not Found" }))
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body("internal failure")
}

async fn items(query: web::Query<ItemsQuery>) -> HttpResponse {
    let query = query.into_inner();
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(10);
    if page == 0 || page_size == 0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "page and pageSize must be at least 1"
        }));
    }

    let mut rows: Vec<Item> = demo_items(ITEM_COUNT)
        .into_iter()
        .filter(|item| {
            query
                .name
                .as_ref()
                .is_none_or(|name| item.name.contains(name.as_str()))
        })
        .collect();

    match query.sort_field.as_deref() {
        Some("name") => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        Some("id") | None => {}
        Some(other) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": format!("Cannot sort by {other}")
            }));
        }
    }
    if query.sort_order == Some(SortOrder::Desc) {
        rows.reverse();
    }

    let total = rows.len() as u64;
    let data = rows
        .into_iter()
        .skip(((page - 1) * page_size) as usize)
        .take(page_size as usize)
        .collect::<Vec<_>>();

    HttpResponse::Ok().json(Paginated { data, total })
}

async fn echo(request: HttpRequest, body: String) -> HttpResponse {
    let content_type = request
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    HttpResponse::Ok().json(Echo {
        method: request.method().to_string(),
        content_type,
        body,
    })
}

/// Build the stub server on an OS-assigned port, but not await it.
pub fn build() -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(|| {
        App::new()
            .route("/json", web::get().to(json))
            .route("/text", web::get().to(text))
            .route("/missing", web::get().to(missing))
            .route("/broken", web::get().to(broken))
            .route("/items", web::get().to(items))
            .route("/echo", web::post().to(echo))
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}

/// Start the stub server in the background. Each call gets its own port,
/// so tests can run in parallel.
pub async fn spawn_stub_server() -> anyhow::Result<StubServer> {
    crate::init_tracing();
    let (server, port) = build()?;
    tokio::spawn(server);
    Ok(StubServer {
        port,
        address: format!("http://127.0.0.1:{port}"),
    })
}
