//! # Host Bridge Traits
//!
//! Capability traits that sit between the document-project core and the
//! outside world.
//!
//! ## Overview
//!
//! This crate defines the contract between the core crates and their
//! collaborators. Two boundaries matter:
//!
//! - [`HttpClient`](http::HttpClient) — transport. Connection pooling,
//!   TLS, timeouts, and retry/backoff all live behind it.
//! - [`DocumentProvider`](provider::DocumentProvider) — the remote
//!   storage capability set (folder listing, item creation, document
//!   export/update, deletion, metadata).
//!
//! Every provider operation takes an explicit [`Session`](session::Session);
//! there is no ambient current-user state anywhere in the workspace.
//!
//! ## Error Handling
//!
//! All traits use [`BridgeError`](error::BridgeError). From the core's
//! point of view this is a single opaque failure category covering
//! authentication, network, quota, and not-found conditions; the core
//! propagates it unmodified with no local recovery.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so implementations can be shared
//! across async tasks behind `Arc`.

pub mod error;
pub mod http;
pub mod provider;
pub mod session;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use provider::{DocumentProvider, ItemKind, RemoteItem};
pub use session::Session;
