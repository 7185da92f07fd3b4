//! # Post Client
//!
//! The domain-facing wrapper around [`HateoasClient`]. It knows the posts
//! entry point and the names of the lifecycle actions - nothing else. Every
//! state-changing call goes through the links the server attached to the
//! resource at hand; this client never builds an action URL of its own.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::hal::{Collection, HttpMethod, Link, Resource, TemplateVars};
use crate::model::{PostCreate, PostUpdate};

use super::core::HateoasClient;
use super::error::ClientError;
use super::transport::Transport;

/// Entry href of the posts listing, as published by the API root.
pub const POSTS_ENTRY: &str = "/api/posts";

/// Client for the post resource family.
pub struct PostClient<T: Transport> {
    api: HateoasClient<T>,
    entry: String,
}

impl<T: Transport> PostClient<T> {
    pub fn new(api: HateoasClient<T>) -> Self {
        Self::with_entry(api, POSTS_ENTRY)
    }

    /// Uses a non-default entry href (tests, mounted sub-APIs).
    pub fn with_entry(api: HateoasClient<T>, entry: impl Into<String>) -> Self {
        Self { api, entry: entry.into() }
    }

    /// Access the inner generic client.
    pub fn api(&self) -> &HateoasClient<T> {
        &self.api
    }

    /// Fetches one page of the posts listing through the templated entry
    /// link. Omitted parameters are left to the server's defaults.
    #[instrument(skip(self))]
    pub async fn list(&self, page: Option<u64>, size: Option<u64>) -> Result<Collection, ClientError> {
        let template = Link::new(format!("{}{{?page,size}}", self.entry)).templated();
        let mut variables = TemplateVars::new();
        if let Some(page) = page {
            variables.insert("page".to_string(), page.into());
        }
        if let Some(size) = size {
            variables.insert("size".to_string(), size.into());
        }
        let href = self.api.parse_template_link(&template, &variables);
        debug!(%href, "fetching posts page");
        let resource = self.api.fetch(&href).await?;
        Ok(Collection::from(resource))
    }

    /// Fetches a single post by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<Resource, ClientError> {
        let template = Link::new(format!("{}/{{id}}", self.entry)).templated();
        let variables = TemplateVars::from([("id".to_string(), id.into())]);
        let href = self.api.parse_template_link(&template, &variables);
        self.api.fetch(&href).await
    }

    /// Creates a post; the server answers with its DRAFT representation.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: &PostCreate) -> Result<Resource, ClientError> {
        let link = Link::new(self.entry.clone()).with_method(HttpMethod::Post);
        self.api.execute_link(&link, Some(encode(params)?)).await
    }

    /// DRAFT -> PUBLISHED, through the `publish` link.
    #[instrument(skip(self, resource))]
    pub async fn publish(&self, resource: &Resource) -> Result<Resource, ClientError> {
        self.api.execute_action(resource, "publish", None).await
    }

    /// PUBLISHED -> ARCHIVED, through the `archive` link.
    #[instrument(skip(self, resource))]
    pub async fn archive(&self, resource: &Resource) -> Result<Resource, ClientError> {
        self.api.execute_action(resource, "archive", None).await
    }

    /// ARCHIVED -> PUBLISHED, through the `republish` link.
    #[instrument(skip(self, resource))]
    pub async fn republish(&self, resource: &Resource) -> Result<Resource, ClientError> {
        self.api.execute_action(resource, "republish", None).await
    }

    /// Edits the post's content, through the `update` link.
    #[instrument(skip(self, resource, update))]
    pub async fn update(
        &self,
        resource: &Resource,
        update: &PostUpdate,
    ) -> Result<Resource, ClientError> {
        self.api.execute_action(resource, "update", Some(encode(update)?)).await
    }

    /// Deletes the post, through the `delete` link. The server answers with
    /// no content.
    #[instrument(skip(self, resource))]
    pub async fn delete(&self, resource: &Resource) -> Result<(), ClientError> {
        self.api.execute_action(resource, "delete", None).await?;
        Ok(())
    }

    /// Refetches the authoritative representation through the `self` link -
    /// the move to make after a conflicting concurrent transition surfaced
    /// as a non-2xx response.
    #[instrument(skip(self, resource))]
    pub async fn refresh(&self, resource: &Resource) -> Result<Resource, ClientError> {
        self.api.follow(resource, "self", &TemplateVars::new()).await
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, ClientError> {
    serde_json::to_value(payload)
        .map_err(|error| ClientError::Decode(format!("payload is not valid JSON: {error}")))
}
