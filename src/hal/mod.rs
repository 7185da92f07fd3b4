//! Generic HAL engine: the data model and the pure functions over it.
//!
//! This module is self-contained and domain-agnostic - nothing in it knows
//! about posts or HTTP execution.
//!
//! # Main Components
//!
//! - [`Resource`], [`Link`], [`LinkValue`], [`Collection`] - the shapes of
//!   HAL documents
//! - [`is_resource`] and the `Resource` accessors - pure readers over those
//!   shapes
//! - [`parse_template_link`] - the RFC 6570 subset expander
//!
//! # Testing
//!
//! Everything here is synchronous and pure; the tests build documents with
//! `serde_json::json!` and assert on the answers.

pub mod parser;
pub mod template;
pub mod types;

// Re-export the model and the pure functions for convenience
pub use parser::*;
pub use template::*;
pub use types::*;
