//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the document-project core:
//! - Logging and tracing setup
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other workspace crates
//! depend on. It establishes the logging conventions and the fail-fast
//! configuration pattern used throughout the system.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
