//! Test harness: the full router wired to a scripted catalog, driven
//! in-process with `tower::ServiceExt::oneshot`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::domains::events::{EventStore, IngestConfig};
use server_core::kernel::{BaseEventCatalog, MockEventCatalog};
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

/// Initialize tracing once; respects RUST_LOG.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default limits, no pacing sleep.
pub fn fast_config() -> IngestConfig {
    IngestConfig::default().without_pacing()
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<EventStore>,
    pub catalog: MockEventCatalog,
}

impl TestApp {
    pub fn new(catalog: MockEventCatalog) -> Self {
        Self::with_static_dir(catalog, &fixtures_dir())
    }

    pub fn with_static_dir(catalog: MockEventCatalog, static_dir: &Path) -> Self {
        init_tracing();
        let dyn_catalog: Arc<dyn BaseEventCatalog> = Arc::new(catalog.clone());
        let state = AppState::new(dyn_catalog, fast_config());
        let store = Arc::clone(&state.store);
        Self {
            router: build_app(state, static_dir),
            store,
            catalog,
        }
    }

    /// Send a request and return status plus the body parsed as JSON
    /// (`Value::Null` for an empty or non-JSON body).
    pub async fn request(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.request_raw(method, uri).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn request_raw(&self, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn ingest(&self, marketplace: &str) -> (StatusCode, Value) {
        self.request(Method::POST, &format!("/ingest/{marketplace}"))
            .await
    }

    pub async fn events(&self, marketplace: &str, query: &str) -> (StatusCode, Value) {
        let uri = if query.is_empty() {
            format!("/events/{marketplace}")
        } else {
            format!("/events/{marketplace}?{query}")
        };
        self.request(Method::GET, &uri).await
    }
}

/// Directory holding the static assets used by the static-file tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/static")
}
