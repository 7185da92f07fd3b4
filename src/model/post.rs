//! The blog post entity and its DTOs, as they travel on the wire.
//!
//! These are pure data shapes; the lifecycle rules that move a post between
//! statuses live in [`crate::lifecycle`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::hal::Resource;

/// Lifecycle status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    /// The wire form of the status (`DRAFT`, `PUBLISHED`, `ARCHIVED`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Published => "PUBLISHED",
            PostStatus::Archived => "ARCHIVED",
        }
    }
}

impl Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post.
///
/// `id` is positive, stable and assigned sequentially by the server.
/// `published_at` is set on the DRAFT -> PUBLISHED transition and reset on
/// every republish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Creates a post in DRAFT, the only status a post is ever born in.
    pub fn new(id: u64, params: PostCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: params.title,
            content: params.content,
            author: params.author,
            status: PostStatus::Draft,
            created_at,
            published_at: None,
        }
    }

    /// Reads the typed post out of a HAL resource, ignoring its hypermedia
    /// fields.
    pub fn from_resource(resource: &Resource) -> serde_json::Result<Self> {
        resource.deserialize_state()
    }
}

/// Payload for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Payload for editing a post. Unset fields are left untouched by the server
/// and stay off the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_uppercase_wire_form() {
        assert_eq!(serde_json::to_value(PostStatus::Draft).unwrap(), json!("DRAFT"));
        let status: PostStatus = serde_json::from_value(json!("ARCHIVED")).unwrap();
        assert_eq!(status, PostStatus::Archived);
    }

    #[test]
    fn new_posts_are_drafts() {
        let params = PostCreate {
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "alice".to_string(),
        };
        let post = Post::new(1, params, Utc::now());
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn from_resource_ignores_hypermedia_fields() {
        let resource: Resource = serde_json::from_value(json!({
            "id": 3,
            "title": "Hello",
            "content": "World",
            "author": "alice",
            "status": "DRAFT",
            "createdAt": "2024-01-10T09:00:00Z",
            "publishedAt": null,
            "_links": { "self": { "href": "/api/posts/3" } }
        }))
        .unwrap();

        let post = Post::from_resource(&resource).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
    }

    #[test]
    fn update_payload_keeps_unset_fields_off_the_wire() {
        let update = PostUpdate { title: Some("New".to_string()), content: None };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "title": "New" }));
    }
}
