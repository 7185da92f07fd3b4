//! # HAL Data Model
//!
//! This module defines the shapes of HAL (Hypertext Application Language)
//! documents: [`Link`], [`LinkValue`], [`Resource`] and [`Collection`].
//!
//! ## Key Types
//!
//! - [`Link`]: one entry of a `_links` object. Only `href` is required.
//! - [`LinkValue`]: HAL allows a relation to hold either a single link or an
//!   ordered array of links. The sum type models both, and every derived
//!   accessor goes through its normalization methods so no call site
//!   re-implements the branch.
//! - [`Resource`]: the reserved `_links`/`_embedded` objects plus an open map
//!   of domain fields.
//! - [`Collection`]: a resource whose `_embedded.items` holds the page of
//!   item resources, with pagination metadata.
//!
//! # Architecture Note
//! Reserved fields use [`IndexMap`] rather than a hash map: relation insertion
//! order is observable through [`Resource::action_rels`](crate::hal), and the
//! order a server attached its links in must survive a round trip. A document
//! whose `_links` or `_embedded` is present but not an object fails
//! deserialization outright - a malformed reserved field makes the whole value
//! "not a resource", never a half-usable one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};

/// Media type of HAL documents.
pub const HAL_MEDIA_TYPE: &str = "application/hal+json";

/// HTTP methods a HAL link may carry. Links without a `method` field are
/// treated as GET.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The wire form of the method (`GET`, `POST`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HAL link (an element of the `_links` object).
///
/// `href` is the only required field and may be a URI or a URI Template
/// (in which case `templated` is `true`). `type` is a media-type hint for the
/// target resource; the HTTP verb is carried by `method` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// URI of the target, or a URI Template when `templated` is set.
    pub href: String,

    /// Relation type, when it differs from the key in `_links`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// Media-type hint for the target resource.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// HTTP method for non-GET links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,

    /// `true` when `href` is a URI Template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Extension properties (`deprecation`, `name`, `profile`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Link {
    /// Creates a plain link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
            media_type: None,
            method: None,
            templated: None,
            title: None,
            extra: IndexMap::new(),
        }
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks the link's `href` as a URI Template.
    pub fn templated(mut self) -> Self {
        self.templated = Some(true);
        self
    }

    /// `true` only when the `templated` field is literally `true`.
    pub fn is_templated(&self) -> bool {
        self.templated == Some(true)
    }

    /// The link's HTTP method, defaulting to GET when unspecified.
    pub fn method_or_default(&self) -> HttpMethod {
        self.method.unwrap_or_default()
    }
}

/// The value stored under one relation in `_links`: a single link or an
/// ordered sequence of links. HAL permits both forms and consumers must treat
/// them uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    Single(Link),
    Multiple(Vec<Link>),
}

impl LinkValue {
    /// The first link of the sequence; `None` for an empty sequence.
    pub fn first(&self) -> Option<&Link> {
        match self {
            LinkValue::Single(link) => Some(link),
            LinkValue::Multiple(links) => links.first(),
        }
    }

    /// A uniform slice view: a single link reads as a one-element sequence.
    pub fn as_slice(&self) -> &[Link] {
        match self {
            LinkValue::Single(link) => std::slice::from_ref(link),
            LinkValue::Multiple(links) => links.as_slice(),
        }
    }

    /// A fresh owned sequence; mutating it never affects the resource.
    pub fn to_vec(&self) -> Vec<Link> {
        self.as_slice().to_vec()
    }
}

impl From<Link> for LinkValue {
    fn from(link: Link) -> Self {
        LinkValue::Single(link)
    }
}

impl From<Vec<Link>> for LinkValue {
    fn from(links: Vec<Link>) -> Self {
        LinkValue::Multiple(links)
    }
}

/// A HAL Resource Object: reserved `_links`/`_embedded` objects plus the
/// entity's own fields.
///
/// Both reserved fields are optional on the wire; a bare `{}` is a valid
/// (empty) resource. When present they must be genuine objects - an array or
/// primitive there fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Relations of the resource: rel -> link or sequence of links.
    #[serde(rename = "_links", default, skip_serializing_if = "IndexMap::is_empty")]
    pub links: IndexMap<String, LinkValue>,

    /// Nested resources, keyed by relation.
    #[serde(rename = "_embedded", default, skip_serializing_if = "IndexMap::is_empty")]
    pub embedded: IndexMap<String, Value>,

    /// The resource's own (domain) fields.
    #[serde(flatten)]
    pub state: IndexMap<String, Value>,
}

impl Resource {
    /// Appends a link under `rel`. An existing single link is promoted to a
    /// sequence, matching how HAL represents repeated relations. The
    /// relation keeps its original position in `_links`.
    pub fn add_link(&mut self, rel: impl Into<String>, link: Link) {
        let rel = rel.into();
        if let Some(value) = self.links.get_mut(&rel) {
            let links = match std::mem::replace(value, LinkValue::Multiple(Vec::new())) {
                LinkValue::Single(existing) => vec![existing, link],
                LinkValue::Multiple(mut links) => {
                    links.push(link);
                    links
                }
            };
            *value = LinkValue::Multiple(links);
        } else {
            self.links.insert(rel, LinkValue::Single(link));
        }
    }

    /// Builder form of [`Resource::add_link`].
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.add_link(rel, link);
        self
    }

    /// Sets one domain field.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.state.insert(name.into(), value);
    }

    /// Builder form of [`Resource::set_field`].
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set_field(name, value);
        self
    }

    /// Sets one embedded relation.
    pub fn with_embedded(mut self, key: impl Into<String>, value: Value) -> Self {
        self.embedded.insert(key.into(), value);
        self
    }
}

/// Pagination metadata of a [`Collection`], with all fields present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PageInfo {
    /// `ceil(total_elements / size)`; zero when `size` is zero.
    pub fn pages_for(total_elements: u64, size: u64) -> u64 {
        if size == 0 {
            return 0;
        }
        total_elements.div_ceil(size)
    }
}

/// A paginated HAL collection: a resource whose `_embedded.items` holds the
/// page of item resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(flatten)]
    pub resource: Resource,
}

impl Collection {
    /// The embedded `items` of the page, in order. Absent `items` is an empty
    /// page; a malformed item rejects the whole sequence.
    pub fn items(&self) -> serde_json::Result<Vec<Resource>> {
        match self.resource.embedded("items") {
            Some(value) => serde_json::from_value(value.clone()),
            None => Ok(Vec::new()),
        }
    }

    /// Typed pagination fields, when the collection carries all of them.
    pub fn page_info(&self) -> Option<PageInfo> {
        Some(PageInfo {
            page: self.resource.state.get("page")?.as_u64()?,
            size: self.resource.state.get("size")?.as_u64()?,
            total_elements: self.resource.state.get("totalElements")?.as_u64()?,
            total_pages: self.resource.state.get("totalPages")?.as_u64()?,
        })
    }
}

impl From<Resource> for Collection {
    fn from(resource: Resource) -> Self {
        Self { resource }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_value_normalizes_single_and_sequence() {
        let single = LinkValue::from(Link::new("/a"));
        assert_eq!(single.first().unwrap().href, "/a");
        assert_eq!(single.as_slice().len(), 1);

        let multiple = LinkValue::from(vec![Link::new("/a"), Link::new("/b")]);
        assert_eq!(multiple.first().unwrap().href, "/a");
        assert_eq!(multiple.as_slice().len(), 2);

        let empty = LinkValue::from(Vec::new());
        assert!(empty.first().is_none());
        assert!(empty.as_slice().is_empty());
    }

    #[test]
    fn add_link_promotes_single_to_sequence() {
        let mut resource = Resource::default();
        resource.add_link("item", Link::new("/a"));
        resource.add_link("item", Link::new("/b"));

        let links = resource.links_for("item");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "/a");
        assert_eq!(links[1].href, "/b");
    }

    #[test]
    fn resource_rejects_malformed_links() {
        assert!(serde_json::from_value::<Resource>(json!({ "_links": [] })).is_err());
        assert!(serde_json::from_value::<Resource>(json!({ "_links": null })).is_err());
        assert!(serde_json::from_value::<Resource>(json!({ "_links": "x" })).is_err());
        assert!(serde_json::from_value::<Resource>(json!({ "_embedded": [1, 2] })).is_err());
        assert!(serde_json::from_value::<Resource>(json!({})).is_ok());
    }

    #[test]
    fn method_defaults_to_get() {
        let link = Link::new("/posts/1");
        assert_eq!(link.method_or_default(), HttpMethod::Get);
        assert_eq!(
            Link::new("/x").with_method(HttpMethod::Delete).method_or_default(),
            HttpMethod::Delete
        );
    }

    #[test]
    fn link_round_trips_type_field() {
        let value = json!({ "href": "/posts/1", "type": "application/hal+json", "method": "PUT" });
        let link: Link = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(link.media_type.as_deref(), Some("application/hal+json"));
        assert_eq!(link.method, Some(HttpMethod::Put));
        assert_eq!(serde_json::to_value(&link).unwrap(), value);
    }

    #[test]
    fn collection_reads_items_and_page_info() {
        let collection: Collection = serde_json::from_value(json!({
            "_embedded": { "items": [{ "id": 1 }, { "id": 2 }] },
            "page": 1,
            "size": 10,
            "totalElements": 2,
            "totalPages": 1
        }))
        .unwrap();

        assert_eq!(collection.items().unwrap().len(), 2);
        let info = collection.page_info().unwrap();
        assert_eq!(info.page, 1);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn pages_for_rounds_up() {
        assert_eq!(PageInfo::pages_for(0, 10), 0);
        assert_eq!(PageInfo::pages_for(10, 10), 1);
        assert_eq!(PageInfo::pages_for(11, 10), 2);
        assert_eq!(PageInfo::pages_for(5, 0), 0);
    }
}
