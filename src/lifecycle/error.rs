//! Error types for the post lifecycle.

use thiserror::Error;

use crate::model::PostStatus;

/// Errors raised by post lifecycle transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostError {
    /// The attempted transition is not legal from the post's current status.
    #[error("cannot {action} a {from} post")]
    InvalidTransition { from: PostStatus, action: &'static str },

    /// Deletion is permitted from DRAFT and ARCHIVED only.
    #[error("cannot delete a {status} post")]
    DeleteForbidden { status: PostStatus },
}
