//! Runtime wiring and observability setup.
//!
//! This module contains the infrastructure around the client stack:
//!
//! - **Composition**: [`BlogSystem`] assembles transport, base-URL policy and
//!   the typed clients.
//! - **Observability setup**: [`setup_tracing`] initializes the
//!   tracing/logging infrastructure.

pub mod system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use system::*;
