//! # Mock Transport
//!
//! Utilities for testing clients without a network.
//!
//! Use [`MockTransport::expect`] to queue responses, run the client, then
//! [`MockTransport::verify`] to assert every expectation was consumed.
//! Requests are recorded in order, so a test can also assert that *no*
//! request was made - the pre-network failure paths depend on that.
//!
//! # Example
//! ```ignore
//! let mock = MockTransport::new();
//! mock.expect(HttpMethod::Post, "http://localhost:3000/api/posts/1/publish")
//!     .return_resource(json!({ "id": 1, "status": "PUBLISHED" }));
//!
//! let client = HateoasClient::new(mock.clone(), ApiBase::endpoint("http://localhost:3000"));
//! // Use client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::hal::HttpMethod;

use super::error::ClientError;
use super::transport::{HalRequest, HalResponse, ResponseBody, Transport};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One expected request and the response it should produce.
struct Expectation {
    method: HttpMethod,
    url: String,
    response: Result<HalResponse, ClientError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requests: Vec<HalRequest>,
}

/// A [`Transport`] fed by FIFO expectations.
///
/// Clones share the same state, so the copy handed to the client and the one
/// kept by the test observe the same traffic.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and fully resolved URL.
    pub fn expect(&self, method: HttpMethod, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder { method, url: url.into(), state: self.state.clone() }
    }

    /// Every request the transport has seen, in order.
    pub fn requests(&self) -> Vec<HalRequest> {
        self.state.lock().expect("mock state lock").requests.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().expect("mock state lock");
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }
}

/// Builder finishing one queued expectation.
pub struct ExpectationBuilder {
    method: HttpMethod,
    url: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    fn push(self, response: Result<HalResponse, ClientError>) {
        self.state.lock().expect("mock state lock").expectations.push_back(Expectation {
            method: self.method,
            url: self.url,
            response,
        });
    }

    /// Responds 200 with a HAL body.
    pub fn return_resource(self, body: Value) {
        self.push(Ok(HalResponse { status: 200, body: ResponseBody::Json(body) }));
    }

    /// Responds with an arbitrary status and JSON body.
    pub fn return_status(self, status: u16, body: Value) {
        self.push(Ok(HalResponse { status, body: ResponseBody::Json(body) }));
    }

    /// Responds with an arbitrary status and plain-text body.
    pub fn return_text(self, status: u16, body: impl Into<String>) {
        self.push(Ok(HalResponse { status, body: ResponseBody::Text(body.into()) }));
    }

    /// Responds 204 No Content.
    pub fn return_no_content(self) {
        self.push(Ok(HalResponse { status: 204, body: ResponseBody::Text(String::new()) }));
    }

    /// Fails the request at the transport level.
    pub fn return_error(self, error: ClientError) {
        self.push(Err(error));
    }
}

// =============================================================================
// TRANSPORT IMPLEMENTATION
// =============================================================================

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HalRequest) -> Result<HalResponse, ClientError> {
        let mut state = self.state.lock().expect("mock state lock");
        state.requests.push(request.clone());

        let Some(expectation) = state.expectations.pop_front() else {
            panic!("Unexpected request: {} {}", request.method, request.url);
        };
        if expectation.method != request.method || expectation.url != request.url {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.url, request.method, request.url
            );
        }
        expectation.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn expectations_are_consumed_in_order() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts/1")
            .return_resource(json!({ "id": 1 }));
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts/2")
            .return_status(404, json!({ "message": "not found" }));

        let first = mock
            .execute(HalRequest {
                method: HttpMethod::Get,
                url: "http://localhost:3000/api/posts/1".to_string(),
                body: None,
            })
            .await
            .unwrap();
        assert_eq!(first.status, 200);

        let second = mock
            .execute(HalRequest {
                method: HttpMethod::Get,
                url: "http://localhost:3000/api/posts/2".to_string(),
                body: None,
            })
            .await
            .unwrap();
        assert_eq!(second.status, 404);

        mock.verify();
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_panics_on_unmet_expectations() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts").return_no_content();
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Expectation mismatch")]
    async fn mismatched_requests_panic() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "http://localhost:3000/api/posts/1/publish")
            .return_no_content();

        let _ = mock
            .execute(HalRequest {
                method: HttpMethod::Get,
                url: "http://localhost:3000/api/posts/1".to_string(),
                body: None,
            })
            .await;
    }
}
