/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures and body matchers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for apaczka-adapter tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use apaczka_adapter::{
    ApaczkaClient, ClientConfig, Credentials, REQUEST_VALIDITY_SECS, RequestSigner,
};
use chrono::Utc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use wiremock::{Match, MockServer, Request};

pub const TEST_APP_ID: &str = "app-1234";
pub const TEST_APP_SECRET: &str = "secret-5678";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials shared by all integration tests
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_APP_ID, TEST_APP_SECRET)
}

/// Client wired against the mock server
pub fn test_client(server: &MockServer) -> ApaczkaClient {
    ApaczkaClient::with_config_and_base_url(
        test_credentials(),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// Counts error-level tracing events.
///
/// Install it as a layer over a `Registry` with `set_default` to verify how
/// many diagnostics a call emitted.
#[derive(Clone, Default)]
pub struct ErrorEventCounter(Arc<AtomicUsize>);

impl ErrorEventCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

impl<S: Subscriber> Layer<S> for ErrorEventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Matches a fully signed form body for one route.
///
/// Checks the four fields in wire order, the expiry window and a signature
/// that verifies against the test secret.
pub struct SignedFormBody {
    route: &'static str,
    payload_json: String,
}

impl SignedFormBody {
    pub fn new(route: &'static str, payload_json: impl Into<String>) -> Self {
        Self {
            route,
            payload_json: payload_json.into(),
        }
    }
}

impl Match for SignedFormBody {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = std::str::from_utf8(&request.body) else {
            return false;
        };

        // Field order is part of the wire contract, so parse by prefix
        // rather than splitting on '&' (the JSON payload may contain one).
        let Some(rest) = body.strip_prefix(&format!("app_id={TEST_APP_ID}&request=")) else {
            return false;
        };
        let Some(rest) = rest.strip_prefix(&self.payload_json) else {
            return false;
        };
        let Some(rest) = rest.strip_prefix("&expires=") else {
            return false;
        };
        let Some((expires, signature)) = rest.split_once("&signature=") else {
            return false;
        };

        let Ok(expires) = expires.parse::<i64>() else {
            return false;
        };
        // Stamped before the request left the client, so at most a couple of
        // seconds behind now + validity and never ahead of it.
        let now = Utc::now().timestamp();
        if expires < now + REQUEST_VALIDITY_SECS - 2 || expires > now + REQUEST_VALIDITY_SECS {
            return false;
        }

        let signer = RequestSigner::new(test_credentials());
        signature == signer.sign(&signer.string_to_sign(self.route, &self.payload_json, expires))
    }
}
