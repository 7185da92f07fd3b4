//! The post lifecycle, seen from both sides of the wire.
//!
//! - [`transitions`]: the entity rules (which status moves are legal).
//! - [`links`]: the producer side - rendering a post with the action links
//!   its status permits.
//! - [`state_machine`]: the consumer side - deriving what a resource can do
//!   from its links, and checking that against the declared table.
//!
//! The server's `_links` stay authoritative throughout; the table here only
//! flags drift, it never adds affordances.

pub mod error;
pub mod links;
pub mod state_machine;
pub mod transitions;

pub use error::*;
pub use links::*;
pub use state_machine::*;
