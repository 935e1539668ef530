//! # Document Projects Module
//!
//! The document-project feature: browsing a remote folder hierarchy as a
//! project tree, creating and editing documents through a pluggable
//! backend, and keeping a local list of tracked projects in sync with
//! the remote state.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`tree::ProjectTreeMapper`] — recursive folder-to-tree mapping
//! - [`service::ProjectService`] — the operations the web tier calls
//! - [`repository::ProjectRepository`] — tracked-project persistence
//!
//! The backend is abstracted behind `bridge_traits::DocumentProvider`;
//! the Google Drive implementation lives in `provider-google-drive` and
//! is wired in by the `desktop-shims` bootstrap.

pub mod error;
pub mod repository;
pub mod service;
pub mod tree;

pub use error::{ProjectError, Result};
pub use repository::{ProjectRepository, SqliteProjectRepository, TrackedProject};
pub use service::{wrap_document_html, ProjectService};
pub use tree::{ProjectTreeMapper, TreeNode};
