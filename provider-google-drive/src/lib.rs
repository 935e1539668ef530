//! # Google Drive Provider
//!
//! Implements the `DocumentProvider` trait for Google Drive API v3.
//!
//! ## Overview
//!
//! This crate provides:
//! - Folder listing scoped to a parent id (`files.list`)
//! - Document and folder creation (`files.create`)
//! - Document export as rendered HTML (`files.export`)
//! - Document content overwrite via media upload (`files.update`)
//! - Item deletion and metadata lookup
//!
//! Authentication is the caller's concern: every operation takes an
//! explicit `Session` carrying the OAuth 2.0 bearer token.

pub mod connector;
pub mod error;
pub mod types;

pub use connector::GoogleDriveConnector;
pub use error::{GoogleDriveError, Result};
