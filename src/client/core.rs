//! # Core Hypermedia Client
//!
//! [`HateoasClient`] bridges the pure parser to network execution. The parser
//! answers *what* a resource offers; this client follows it.
//!
//! # Architecture Note
//! There is exactly one request path, [`HateoasClient::execute_link`]; action
//! execution, entry-point fetches and navigation are thin layers over it.
//! Funneling everything through one place keeps the protocol policy - header
//! set, body attachment, status interpretation - from drifting apart between
//! operations.
//!
//! The client is stateless apart from its transport and base-URL policy; it
//! never caches a resource and never synthesizes a link. What the server
//! attached is what can be followed.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::hal::{parse_template_link, HttpMethod, Link, Resource, TemplateVars};

use super::config::ApiBase;
use super::error::ClientError;
use super::transport::{HalRequest, ResponseBody, Transport};

// =============================================================================
// 1. THE CLIENT
// =============================================================================

/// A generic HAL client over some [`Transport`].
pub struct HateoasClient<T: Transport> {
    transport: T,
    base: ApiBase,
}

impl<T: Transport> HateoasClient<T> {
    pub fn new(transport: T, base: ApiBase) -> Self {
        Self { transport, base }
    }

    /// The base-URL policy in use.
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    // =========================================================================
    // 2. PARSER DELEGATIONS (pure, no I/O)
    // =========================================================================

    /// Delegation to [`Resource::link`].
    pub fn get_link<'a>(&self, resource: &'a Resource, rel: &str) -> Option<&'a Link> {
        resource.link(rel)
    }

    /// `true` when the resource advertises `rel`.
    pub fn has_link(&self, resource: &Resource, rel: &str) -> bool {
        resource.has_link(rel)
    }

    /// The resource's action rels, in the order the server attached them.
    pub fn available_actions<'a>(&self, resource: &'a Resource) -> Vec<&'a str> {
        resource.action_rels()
    }

    /// Delegation to [`parse_template_link`].
    pub fn parse_template_link(&self, link: &Link, variables: &TemplateVars) -> String {
        parse_template_link(link, variables)
    }

    // =========================================================================
    // 3. EXECUTION (everything funnels through execute_link)
    // =========================================================================

    /// Executes the action advertised under `action_rel`.
    ///
    /// # Errors
    /// [`ClientError::ActionNotAvailable`] - before any request is issued -
    /// when the resource does not advertise the rel; the error carries the
    /// rels it does advertise so callers can explain *why*.
    #[instrument(skip_all, fields(action = action_rel))]
    pub async fn execute_action(
        &self,
        resource: &Resource,
        action_rel: &str,
        payload: Option<Value>,
    ) -> Result<Resource, ClientError> {
        let Some(link) = resource.link(action_rel) else {
            let available: Vec<String> =
                resource.action_rels().into_iter().map(str::to_owned).collect();
            warn!(?available, "action not advertised by the resource");
            return Err(ClientError::ActionNotAvailable {
                action: action_rel.to_string(),
                available,
            });
        };
        self.execute_link(link, payload).await
    }

    /// Fetches the resource behind an href (entry points, expanded
    /// templates).
    pub async fn fetch(&self, href: &str) -> Result<Resource, ClientError> {
        self.execute_link(&Link::new(href), None).await
    }

    /// Follows a navigational link, expanding its URI template with
    /// `variables` and issuing a GET.
    #[instrument(skip_all, fields(rel))]
    pub async fn follow(
        &self,
        resource: &Resource,
        rel: &str,
        variables: &TemplateVars,
    ) -> Result<Resource, ClientError> {
        let Some(link) = resource.link(rel) else {
            let available: Vec<String> =
                resource.action_rels().into_iter().map(str::to_owned).collect();
            return Err(ClientError::ActionNotAvailable { action: rel.to_string(), available });
        };
        let href = parse_template_link(link, variables);
        self.fetch(&href).await
    }

    /// Executes a single link: resolve the method and target, issue the
    /// request, interpret the response.
    ///
    /// A payload is attached only for POST/PUT/PATCH and only when it is
    /// present and non-null. A bare action (such as `archive`) must go out
    /// without a body; forcing an empty JSON object onto it is exactly the
    /// kind of request a strict server rejects.
    #[instrument(skip_all, fields(href = %link.href))]
    pub async fn execute_link(
        &self,
        link: &Link,
        payload: Option<Value>,
    ) -> Result<Resource, ClientError> {
        let method = link.method_or_default();
        let url = self.base.resolve(&link.href);
        let body = match method {
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => {
                payload.filter(|value| !value.is_null())
            }
            HttpMethod::Get | HttpMethod::Delete => None,
        };

        debug!(%method, %url, has_body = body.is_some(), "executing link");
        let response = self.transport.execute(HalRequest { method, url, body }).await?;

        if !response.is_success() {
            warn!(%method, status = response.status, "request failed");
            return Err(ClientError::Http { status: response.status, body: response.body });
        }
        if response.status == 204 || response.body.is_empty() {
            // Deletes answer 204 No Content.
            return Ok(Resource::default());
        }
        match response.body {
            ResponseBody::Json(value) => serde_json::from_value(value)
                .map_err(|error| ClientError::Decode(format!("response is not a HAL resource: {error}"))),
            ResponseBody::Text(_) => Err(ClientError::Decode(
                "expected an application/hal+json body".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use serde_json::json;

    fn resource(value: Value) -> Resource {
        serde_json::from_value(value).expect("test resource must deserialize")
    }

    fn client(mock: &MockTransport) -> HateoasClient<MockTransport> {
        HateoasClient::new(mock.clone(), ApiBase::endpoint("http://localhost:3000"))
    }

    fn draft_post() -> Resource {
        resource(json!({
            "id": 1,
            "status": "DRAFT",
            "_links": {
                "self": { "href": "/api/posts/1" },
                "publish": { "href": "/api/posts/1/publish", "method": "POST" },
                "update": { "href": "/api/posts/1", "method": "PUT" },
                "delete": { "href": "/api/posts/1", "method": "DELETE" }
            }
        }))
    }

    #[tokio::test]
    async fn execute_action_follows_the_advertised_link() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "http://localhost:3000/api/posts/1/publish")
            .return_resource(json!({
                "id": 1,
                "status": "PUBLISHED",
                "_links": { "self": { "href": "/api/posts/1" } }
            }));

        let published = client(&mock)
            .execute_action(&draft_post(), "publish", None)
            .await
            .unwrap();

        assert_eq!(published.state.get("status"), Some(&json!("PUBLISHED")));
        mock.verify();

        // A bare action carries no body.
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn execute_action_fails_before_the_network_when_rel_is_absent() {
        let mock = MockTransport::new();
        let error = client(&mock)
            .execute_action(&draft_post(), "archive", None)
            .await
            .unwrap_err();

        match error {
            ClientError::ActionNotAvailable { action, available } => {
                assert_eq!(action, "archive");
                assert_eq!(available, vec!["publish", "update", "delete"]);
            }
            other => panic!("expected ActionNotAvailable, got {other:?}"),
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn payload_rides_only_on_body_methods() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Put, "http://localhost:3000/api/posts/1")
            .return_resource(json!({ "id": 1, "title": "edited" }));
        mock.expect(HttpMethod::Delete, "http://localhost:3000/api/posts/1").return_no_content();

        let api = client(&mock);
        let post = draft_post();
        api.execute_action(&post, "update", Some(json!({ "title": "edited" }))).await.unwrap();
        // A payload on DELETE is dropped rather than sent.
        api.execute_action(&post, "delete", Some(json!({ "title": "x" }))).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].body, Some(json!({ "title": "edited" })));
        assert!(requests[1].body.is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn null_payload_is_not_a_body() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "http://localhost:3000/api/posts/1/publish")
            .return_resource(json!({ "id": 1 }));

        client(&mock)
            .execute_action(&draft_post(), "publish", Some(Value::Null))
            .await
            .unwrap();
        assert!(mock.requests()[0].body.is_none());
    }

    #[tokio::test]
    async fn method_defaults_to_get() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts/1")
            .return_resource(json!({ "id": 1 }));

        let post = resource(json!({
            "_links": { "self": { "href": "/api/posts/1" }, "preview": { "href": "/api/posts/1" } }
        }));
        client(&mock).execute_action(&post, "preview", None).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn non_2xx_carries_status_and_raw_body() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Post, "http://localhost:3000/api/posts/1/publish")
            .return_status(409, json!({ "message": "already published" }));

        let error = client(&mock)
            .execute_action(&draft_post(), "publish", None)
            .await
            .unwrap_err();

        match error {
            ClientError::Http { status, body } => {
                assert_eq!(status, 409);
                assert_eq!(body.as_json(), Some(&json!({ "message": "already published" })));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_fails_closed() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts/1")
            .return_resource(json!({ "id": 1, "_links": [] }));

        let error = client(&mock).fetch("/api/posts/1").await.unwrap_err();
        assert!(matches!(error, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn follow_expands_the_link_template() {
        let mock = MockTransport::new();
        mock.expect(HttpMethod::Get, "http://localhost:3000/api/posts?page=2&size=10")
            .return_resource(json!({ "_embedded": { "items": [] } }));

        let listing = resource(json!({
            "_links": {
                "self": { "href": "/api/posts?page=1&size=10" },
                "templated": { "href": "/api/posts{?page,size}", "templated": true }
            }
        }));
        let variables =
            TemplateVars::from([("page".to_string(), json!(2)), ("size".to_string(), json!(10))]);
        client(&mock).follow(&listing, "templated", &variables).await.unwrap();
        mock.verify();
    }

    #[test]
    fn delegations_agree_with_the_parser() {
        let mock = MockTransport::new();
        let api = client(&mock);
        let post = draft_post();

        assert!(api.has_link(&post, "publish"));
        assert!(!api.has_link(&post, "archive"));
        assert_eq!(api.get_link(&post, "self").unwrap().href, "/api/posts/1");
        assert_eq!(api.available_actions(&post), vec!["publish", "update", "delete"]);
    }
}
