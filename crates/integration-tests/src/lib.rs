//! Integration tests for Mercato.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercato-integration-tests
//! ```
//!
//! Tests drive the real router (routes, middleware, extractors) in-process
//! through `tower::ServiceExt::oneshot`; no socket is opened. Each
//! [`TestContext`] owns fresh stores seeded with the demo catalog.
//!
//! # Test Categories
//!
//! - `products` - Catalog listing, filtering, lookup, creation
//! - `users` - Registration and email uniqueness
//! - `orders` - Order placement, totals, per-user listing
//! - `service` - Root, health, request IDs, CORS

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

use mercato_api::{routes, state::AppState};

/// An in-process API instance with direct access to its stores.
///
/// Clones share the same stores.
#[derive(Clone)]
pub struct TestContext {
    app: Router,
    /// Shared state, for asserting on store contents.
    pub state: AppState,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build an app with the demo catalog and empty account/order stores.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new();
        Self {
            app: routes::app(state.clone()),
            state,
        }
    }

    /// Send an arbitrary request.
    ///
    /// # Panics
    ///
    /// Panics if the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// `GET uri`.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid request URI.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// `POST uri` with a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid request URI.
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, "application/json", &body.to_string())
            .await
    }

    /// `POST uri` with a raw body and content type.
    ///
    /// # Panics
    ///
    /// Panics if `uri` is not a valid request URI.
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_owned()))
            .expect("valid request");
        self.send(request).await
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Decode the body as JSON into `T`.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON for `T`.
    #[must_use]
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// The `detail` message of a JSON error body.
    ///
    /// # Panics
    ///
    /// Panics if the body has no string `detail` field.
    #[must_use]
    pub fn detail(&self) -> String {
        self.json::<Value>()["detail"]
            .as_str()
            .expect("error body has a detail string")
            .to_owned()
    }
}
