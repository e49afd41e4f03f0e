pub mod mock;
pub mod stub;

pub use mock::{Gate, MockTransport, demo_items};
pub use stub::{StubServer, spawn_stub_server};

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use resource::RawResponse;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    // Captured per test unless run with --nocapture
    let stderr = fmt::Layer::new().with_test_writer();
    Registry::default().with(env_filter).with(stderr)
}

/// Install a stderr subscriber for tests. Safe to call from every test;
/// only the first call has an effect. Override the filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = LogTracer::init();
    let _ = get_subscriber("error".into()).try_init();
}

/// A response carrying `body` as JSON.
pub fn json_response(status: u16, body: serde_json::Value) -> RawResponse {
    response(status, "application/json", body.to_string().into_bytes())
}

/// A response carrying `body` as plain text.
pub fn text_response(status: u16, body: &str) -> RawResponse {
    response(status, "text/plain; charset=utf-8", body.as_bytes().to_vec())
}

fn response(status: u16, content_type: &'static str, body: Vec<u8>) -> RawResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    RawResponse {
        status: StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        headers,
        body,
    }
}
