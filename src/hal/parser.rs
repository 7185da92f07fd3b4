//! # HAL Parser
//!
//! Pure, side-effect-free readers over the [`Resource`] shape: link lookup,
//! embedded lookup and action-link classification.
//!
//! # Propagation Policy
//! Nothing in this module errors for missing or malformed optional data.
//! Absent relations answer `None` or an empty sequence; a value whose reserved
//! fields are malformed is simply not a resource ([`is_resource`] is `false`,
//! and [`Resource`] deserialization rejects it). Callers that need to fail do
//! so closed, on the whole value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{Link, LinkValue, Resource};

/// Relation names considered navigational rather than actions.
///
/// Fixed vocabulary of this domain; every other key in `_links` is treated as
/// a generic action rel.
pub const NAVIGATION_RELS: [&str; 7] =
    ["self", "author", "comments", "next", "prev", "first", "last"];

/// Checks that a value has the shape of a HAL Resource Object.
///
/// Any non-null JSON object qualifies, provided that `_links` and `_embedded`,
/// when present, are genuine objects (not arrays, not primitives, not null).
/// A bare `{}` is a valid resource.
pub fn is_resource(value: &Value) -> bool {
    let Value::Object(fields) = value else {
        return false;
    };
    for reserved in ["_links", "_embedded"] {
        if let Some(field) = fields.get(reserved) {
            if !field.is_object() {
                return false;
            }
        }
    }
    true
}

impl Resource {
    /// The link stored under `rel`.
    ///
    /// A sequence-valued relation answers its first element; an empty
    /// sequence, like an unknown relation, answers `None`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel).and_then(LinkValue::first)
    }

    /// All links stored under `rel`, always as a sequence.
    ///
    /// A single link is wrapped in a one-element vector; an absent relation
    /// yields an empty one. The vector is a fresh copy - mutating it never
    /// shows through a later accessor call.
    pub fn links_for(&self, rel: &str) -> Vec<Link> {
        self.links.get(rel).map(LinkValue::to_vec).unwrap_or_default()
    }

    /// `true` when [`Resource::link`] would answer a link for `rel`.
    pub fn has_link(&self, rel: &str) -> bool {
        self.link(rel).is_some()
    }

    /// The embedded value stored under `key`, or `None` when `_embedded` is
    /// absent or the key unknown.
    pub fn embedded(&self, key: &str) -> Option<&Value> {
        self.embedded.get(key)
    }

    /// Relation names of the resource's action links: every `_links` key not
    /// in [`NAVIGATION_RELS`], in insertion order.
    pub fn action_rels(&self) -> Vec<&str> {
        self.links
            .keys()
            .map(String::as_str)
            .filter(|rel| !NAVIGATION_RELS.contains(rel))
            .collect()
    }

    /// Deserializes the resource's domain fields into a typed entity.
    ///
    /// Reserved fields are serialized along and ignored by entity types,
    /// so the same document feeds both the hypermedia and the typed view.
    pub fn deserialize_state<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}
