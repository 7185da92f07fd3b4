//! Pure data structures (DTOs) of the blog domain.

pub mod post;

pub use post::*;
