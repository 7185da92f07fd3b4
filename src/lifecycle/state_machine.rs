//! # Affordance Derivation
//!
//! What a post can do next is derived purely from the `_links` the server
//! attached - never from a client-side transition table. The table below is
//! a declarative *shadow* of the server's lifecycle, kept for one purpose:
//! noticing when the server's advertised affordances and the assumed
//! lifecycle have drifted apart (a failing test, a stale cache). An
//! inconsistency is a diagnostic signal, never a license to synthesize the
//! missing links locally.

use serde_json::Value;

use crate::hal::Resource;
use crate::model::PostStatus;

/// The action rels each status is expected to advertise.
pub fn expected_actions(status: PostStatus) -> &'static [&'static str] {
    match status {
        PostStatus::Draft => &["publish", "update", "delete"],
        PostStatus::Published => &["archive", "update"],
        PostStatus::Archived => &["republish", "delete"],
    }
}

/// Outcome of checking a resource's advertised actions against the shadow
/// table for its status.
#[derive(Debug, Clone, PartialEq)]
pub struct StateAssessment {
    pub status: PostStatus,
    /// Action rels the server actually attached, in order.
    pub advertised: Vec<String>,
    /// Expected rels the server did not attach.
    pub missing: Vec<&'static str>,
}

impl StateAssessment {
    /// `true` when every expected rel for the status is advertised. Extra
    /// advertised rels are fine; the table only sets a lower bound.
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Checks `resource` against the shadow table for `status`.
pub fn assess(status: PostStatus, resource: &Resource) -> StateAssessment {
    let advertised: Vec<String> =
        resource.action_rels().into_iter().map(str::to_owned).collect();
    let missing = expected_actions(status)
        .iter()
        .copied()
        .filter(|rel| !advertised.iter().any(|advertised_rel| advertised_rel == rel))
        .collect();
    StateAssessment { status, advertised, missing }
}

/// [`assess`] for a resource that carries its own `status` field; `None`
/// when the field is absent or not a known status.
pub fn assess_resource(resource: &Resource) -> Option<StateAssessment> {
    let status = resource
        .state
        .get("status")
        .and_then(|value: &Value| serde_json::from_value(value.clone()).ok())?;
    Some(assess(status, resource))
}
