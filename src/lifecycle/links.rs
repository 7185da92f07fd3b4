//! # Link Attachment
//!
//! The producer side of the lifecycle: rendering a [`Post`] into a HAL
//! resource whose action links advertise exactly what its status permits.
//! This is the [`expected_actions`](super::state_machine::expected_actions)
//! table in productive form - the consistency checker in
//! [`super::state_machine`] holds builders like these to account.
//!
//! Hrefs are emitted relative (`/api/posts/1/publish`), or absolute when a
//! non-empty `base_url` is supplied; resolution is the consuming client's
//! concern.

use serde_json::Value;

use crate::hal::{Collection, HttpMethod, Link, PageInfo, Resource, HAL_MEDIA_TYPE};
use crate::model::{Post, PostStatus};

/// Renders one post with its status-dependent action links.
pub fn post_resource(post: &Post, base_url: &str) -> Resource {
    let id = post.id;
    let mut resource = post_state(post)
        .with_link("self", Link::new(format!("{base_url}/api/posts/{id}")).with_media_type(HAL_MEDIA_TYPE));

    match post.status {
        PostStatus::Draft => {
            resource.add_link(
                "publish",
                Link::new(format!("{base_url}/api/posts/{id}/publish"))
                    .with_rel("publish")
                    .with_method(HttpMethod::Post),
            );
            resource.add_link(
                "update",
                Link::new(format!("{base_url}/api/posts/{id}"))
                    .with_rel("update")
                    .with_method(HttpMethod::Put),
            );
            resource.add_link(
                "delete",
                Link::new(format!("{base_url}/api/posts/{id}"))
                    .with_rel("delete")
                    .with_method(HttpMethod::Delete),
            );
        }
        PostStatus::Published => {
            resource.add_link(
                "archive",
                Link::new(format!("{base_url}/api/posts/{id}/archive"))
                    .with_rel("archive")
                    .with_method(HttpMethod::Post),
            );
            resource.add_link(
                "update",
                Link::new(format!("{base_url}/api/posts/{id}"))
                    .with_rel("update")
                    .with_method(HttpMethod::Put),
            );
        }
        PostStatus::Archived => {
            resource.add_link(
                "republish",
                Link::new(format!("{base_url}/api/posts/{id}/republish"))
                    .with_rel("republish")
                    .with_method(HttpMethod::Post),
            );
            resource.add_link(
                "delete",
                Link::new(format!("{base_url}/api/posts/{id}"))
                    .with_rel("delete")
                    .with_method(HttpMethod::Delete),
            );
        }
    }

    resource
}

/// Renders one page of posts as a HAL collection with pagination links.
pub fn posts_collection(
    posts: &[Post],
    page: u64,
    size: u64,
    total_elements: u64,
    base_url: &str,
) -> Collection {
    let total_pages = PageInfo::pages_for(total_elements, size);
    let items: Vec<Value> = posts
        .iter()
        .map(|post| to_value(&post_resource(post, base_url)))
        .collect();

    let mut resource = Resource::default()
        .with_link("self", Link::new(format!("{base_url}/api/posts?page={page}&size={size}")))
        .with_link("first", Link::new(format!("{base_url}/api/posts?page=1&size={size}")))
        .with_link("last", Link::new(format!("{base_url}/api/posts?page={total_pages}&size={size}")))
        .with_link("templated", Link::new(format!("{base_url}/api/posts{{?page,size}}")).templated());

    if page > 1 {
        resource.add_link("prev", Link::new(format!("{base_url}/api/posts?page={}&size={size}", page - 1)));
    }
    if page < total_pages {
        resource.add_link("next", Link::new(format!("{base_url}/api/posts?page={}&size={size}", page + 1)));
    }

    let resource = resource
        .with_embedded("items", Value::Array(items))
        .with_field("page", page.into())
        .with_field("size", size.into())
        .with_field("totalElements", total_elements.into())
        .with_field("totalPages", total_pages.into());

    Collection::from(resource)
}

fn post_state(post: &Post) -> Resource {
    Resource::default()
        .with_field("id", post.id.into())
        .with_field("title", post.title.clone().into())
        .with_field("content", post.content.clone().into())
        .with_field("author", post.author.clone().into())
        .with_field("status", post.status.as_str().into())
        .with_field("createdAt", post.created_at.to_rfc3339().into())
        .with_field(
            "publishedAt",
            post.published_at.map(|at| at.to_rfc3339().into()).unwrap_or(Value::Null),
        )
}

fn to_value(resource: &Resource) -> Value {
    serde_json::to_value(resource).expect("a resource serializes to plain JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::state_machine::{assess, expected_actions};
    use crate::model::PostCreate;
    use chrono::Utc;

    fn post(status: PostStatus) -> Post {
        let mut post = Post::new(
            7,
            PostCreate {
                title: "Hello".to_string(),
                content: "World".to_string(),
                author: "alice".to_string(),
            },
            Utc::now(),
        );
        match status {
            PostStatus::Draft => {}
            PostStatus::Published => post.publish(Utc::now()).unwrap(),
            PostStatus::Archived => {
                post.publish(Utc::now()).unwrap();
                post.archive().unwrap();
            }
        }
        post
    }

    #[test]
    fn every_status_advertises_exactly_its_table_row() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Archived] {
            let rendered = post_resource(&post(status), "");
            assert_eq!(rendered.action_rels(), expected_actions(status).to_vec());
            assert!(assess(status, &rendered).is_consistent());
        }
    }

    #[test]
    fn draft_links_carry_the_right_methods() {
        let rendered = post_resource(&post(PostStatus::Draft), "");

        assert_eq!(rendered.link("self").unwrap().href, "/api/posts/7");
        assert_eq!(
            rendered.link("self").unwrap().media_type.as_deref(),
            Some("application/hal+json")
        );
        assert_eq!(rendered.link("publish").unwrap().href, "/api/posts/7/publish");
        assert_eq!(rendered.link("publish").unwrap().method, Some(HttpMethod::Post));
        assert_eq!(rendered.link("update").unwrap().method, Some(HttpMethod::Put));
        assert_eq!(rendered.link("delete").unwrap().method, Some(HttpMethod::Delete));
    }

    #[test]
    fn rendered_state_round_trips_to_the_entity() {
        let original = post(PostStatus::Published);
        let rendered = post_resource(&original, "");
        let parsed = Post::from_resource(&rendered).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn base_url_prefixes_every_href() {
        let rendered = post_resource(&post(PostStatus::Draft), "https://blog.example.com");
        assert_eq!(rendered.link("self").unwrap().href, "https://blog.example.com/api/posts/7");
        assert_eq!(
            rendered.link("publish").unwrap().href,
            "https://blog.example.com/api/posts/7/publish"
        );
    }

    #[test]
    fn collection_carries_items_pagination_and_nav_links() {
        let posts = vec![post(PostStatus::Draft), post(PostStatus::Published)];
        let collection = posts_collection(&posts, 2, 2, 5, "");

        let info = collection.page_info().unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(info.total_elements, 5);
        assert_eq!(info.total_pages, 3);

        let items = collection.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].link("self").unwrap().href, "/api/posts/7");

        let listing = &collection.resource;
        assert_eq!(listing.link("self").unwrap().href, "/api/posts?page=2&size=2");
        assert_eq!(listing.link("first").unwrap().href, "/api/posts?page=1&size=2");
        assert_eq!(listing.link("last").unwrap().href, "/api/posts?page=3&size=2");
        assert_eq!(listing.link("prev").unwrap().href, "/api/posts?page=1&size=2");
        assert_eq!(listing.link("next").unwrap().href, "/api/posts?page=3&size=2");
        assert!(listing.link("templated").unwrap().is_templated());
    }

    #[test]
    fn boundary_pages_drop_prev_and_next() {
        let first = posts_collection(&[], 1, 10, 20, "").resource;
        assert!(first.link("prev").is_none());
        assert!(first.link("next").is_some());

        let last = posts_collection(&[], 2, 10, 20, "").resource;
        assert!(last.link("prev").is_some());
        assert!(last.link("next").is_none());
    }

    #[test]
    fn templated_listing_link_expands_to_concrete_pages() {
        use crate::hal::{parse_template_link, TemplateVars};
        use serde_json::json;

        let collection = posts_collection(&[], 1, 10, 0, "");
        let link = collection.resource.link("templated").unwrap().clone();
        let variables =
            TemplateVars::from([("page".to_string(), json!(4)), ("size".to_string(), json!(10))]);
        assert_eq!(parse_template_link(&link, &variables), "/api/posts?page=4&size=10");
    }
}
