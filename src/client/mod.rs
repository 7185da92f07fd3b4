//! The client layer: network execution on top of the pure HAL engine.
//!
//! # Main Components
//!
//! - [`HateoasClient`] - the generic client (one request path, link-driven)
//! - [`PostClient`] - the typed client for the post resource family
//! - [`Transport`] / [`ReqwestTransport`] - the network seam and its deployed
//!   implementation
//! - [`ApiBase`] - base-URL resolution policy, injected rather than ambient
//! - [`ClientError`] - the distinguishable failure taxonomy
//!
//! # Testing
//!
//! See [`mock`] for an expectation-based transport that runs clients without
//! a network.

pub mod config;
pub mod core;
pub mod error;
pub mod mock;
pub mod posts;
pub mod transport;

// Re-export the client surface for convenience
pub use self::core::*;
pub use config::*;
pub use error::*;
pub use posts::*;
pub use transport::*;
