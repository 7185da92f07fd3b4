//! Lifecycle transitions of the [`Post`] entity.
//!
//! A post is born DRAFT. DRAFT -> PUBLISHED stamps `published_at`;
//! PUBLISHED -> ARCHIVED keeps it; ARCHIVED -> PUBLISHED (republish) stamps
//! it afresh. Deletion is legal from DRAFT and ARCHIVED only. An illegal
//! transition answers an error and leaves the post untouched.
//!
//! Timestamps are passed in rather than read from a clock, so the rules stay
//! pure and the tests deterministic.

use chrono::{DateTime, Utc};

use crate::model::{Post, PostStatus};

use super::error::PostError;

impl Post {
    /// DRAFT -> PUBLISHED.
    pub fn publish(&mut self, now: DateTime<Utc>) -> Result<(), PostError> {
        if self.status != PostStatus::Draft {
            return Err(PostError::InvalidTransition { from: self.status, action: "publish" });
        }
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        Ok(())
    }

    /// PUBLISHED -> ARCHIVED. `published_at` keeps its value.
    pub fn archive(&mut self) -> Result<(), PostError> {
        if self.status != PostStatus::Published {
            return Err(PostError::InvalidTransition { from: self.status, action: "archive" });
        }
        self.status = PostStatus::Archived;
        Ok(())
    }

    /// ARCHIVED -> PUBLISHED, with a fresh `published_at`.
    pub fn republish(&mut self, now: DateTime<Utc>) -> Result<(), PostError> {
        if self.status != PostStatus::Archived {
            return Err(PostError::InvalidTransition { from: self.status, action: "republish" });
        }
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        Ok(())
    }

    /// `true` when deletion is legal from the current status.
    pub fn can_delete(&self) -> bool {
        matches!(self.status, PostStatus::Draft | PostStatus::Archived)
    }

    /// Checked form of [`Post::can_delete`].
    pub fn ensure_deletable(&self) -> Result<(), PostError> {
        if self.can_delete() {
            Ok(())
        } else {
            Err(PostError::DeleteForbidden { status: self.status })
        }
    }
}
