//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for server and desktop hosts
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `HttpClient` using `reqwest`, with connection pooling and an
//!   exponential-backoff retry loop for 429/5xx responses
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::ReqwestHttpClient;
//! use bridge_traits::HttpClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let http_client = ReqwestHttpClient::new();
//!     // Inject into the core configuration
//! }
//! ```

mod http;

pub use http::ReqwestHttpClient;
