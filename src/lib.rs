#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # HATEOAS Recipe
//!
//! > **A Recipe for Hypermedia (HAL) Clients in Rust.**
//!
//! This crate demonstrates a pattern for consuming hypermedia APIs the way
//! they are meant to be consumed: the server attaches links to every
//! resource, and the client derives what it can do *from those links alone*.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why HATEOAS?
//!
//! A resource's representation carries its legal next moves. A DRAFT post
//! arrives with `publish`, `update` and `delete` links; a PUBLISHED one with
//! `archive` and `update`. The client never hardcodes a transition table as
//! its source of truth:
//! - **Server authority**: what is clickable is exactly what the server
//!   attached. A stale client cannot invent an action the server would
//!   refuse.
//! - **Evolvability**: the server can move URLs or add affordances without
//!   breaking consumers - they follow `href`s, they don't build them.
//! - **Honest failures**: an action that was never offered fails before the
//!   network, carrying what *was* offered, so UIs can explain why.
//!
//! ### Generics: The Power of `T`
//! [`HateoasClient<T: Transport>`](client::HateoasClient) is generic over its
//! transport. The protocol policy - headers, body attachment, status
//! interpretation - is written **once**, and runs identically against
//! `reqwest` in production and an expectation-based mock in tests.
//!
//! ### Mocking: Testing without Pain
//! Network clients are miserable to test against real servers. We solved
//! this with [`MockTransport`](client::mock::MockTransport): queue
//! expectations, run the client, `verify()`. See the [`client::mock`] module.
//!
//! ## 🗺️ Module Tour
//!
//! The codebase is organized into five layers. Here is your map:
//!
//! ### 1. The Engine ([`hal`])
//! The HAL data model ([`Resource`](hal::Resource), [`Link`](hal::Link)) and
//! the pure functions over it: link lookup, embedded lookup, action
//! classification, URI-Template expansion.
//! - **Role**: domain-agnostic, side-effect-free, self-contained.
//!
//! ### 2. The Interface ([`client`])
//! Network execution on top of the engine.
//! - **Role**: one request path ([`execute_link`](client::HateoasClient::execute_link)),
//!   link-driven actions, explicit base-URL policy, distinguishable errors.
//! - **Key items**: [`HateoasClient`](client::HateoasClient),
//!   [`PostClient`](client::PostClient), [`ApiBase`](client::ApiBase).
//!
//! ### 3. The Domain ([`model`])
//! Pure data: [`Post`](model::Post), its status and DTOs.
//!
//! ### 4. The Lifecycle ([`lifecycle`])
//! Both sides of the post lifecycle: entity transition rules, the link
//! builders that advertise them, and the consistency check between the
//! declared table and what a resource actually offers.
//!
//! ### 5. The Orchestrator ([`runtime`])
//! [`BlogSystem`](runtime::BlogSystem) wires transport, base URL and typed
//! clients; [`setup_tracing`](runtime::setup_tracing) initializes logging.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use hateoas_recipe::runtime::BlogSystem;
//!
//! let system = BlogSystem::from_env();
//! let page = system.posts.list(Some(1), Some(10)).await?;
//! for item in page.items()? {
//!     println!("{:?} can: {:?}", item.state.get("title"), item.action_rels());
//! }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod client;
pub mod hal;
pub mod lifecycle;
pub mod model;
pub mod runtime;
