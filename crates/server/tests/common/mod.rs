//! Common test utilities for in-process API testing with mocks.
//!
//! The fixture builds the real router around a ticket service whose
//! collaborators are recording mocks, so tests can check both the HTTP
//! response and exactly what was reserved and charged.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use turnstile_core::testing::{MockSeatReservationService, MockTicketPaymentService};
use turnstile_core::{Config, TicketService};
use turnstile_server::state::AppState;

/// Test fixture with mock collaborators.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_purchase() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/api/v1/purchases", json!({
///         "account_id": 1,
///         "tickets": [{ "type": "ADULT", "count": 1 }, { "type": "INFANT", "count": 1 }]
///     })).await;
///
///     assert_eq!(response.status, 201);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock seat reservations - inspect what was booked
    pub reservations: Arc<MockSeatReservationService>,
    /// Mock payments - inspect what was charged
    pub payments: Arc<MockTicketPaymentService>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture with default config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture with a custom config.
    pub fn with_config(config: Config) -> Self {
        let reservations = Arc::new(MockSeatReservationService::new());
        let payments = Arc::new(MockTicketPaymentService::new());
        let tickets = TicketService::new(reservations.clone(), payments.clone());

        let state = Arc::new(AppState::new(config, tickets));
        let router = turnstile_server::api::create_router(state);

        Self {
            router,
            reservations,
            payments,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request_raw("GET", path, String::new(), None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request_raw("POST", path, body.to_string(), Some("application/json"))
            .await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        self.request_raw("POST", path, body.to_string(), Some("application/json"))
            .await
    }

    async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: String,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    /// Assert that neither collaborator was called.
    pub fn assert_no_side_effects(&self) {
        assert_eq!(self.reservations.reservation_count(), 0);
        assert_eq!(self.payments.payment_count(), 0);
    }
}
