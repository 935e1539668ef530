//! # Core Configuration Module
//!
//! Configuration management for the document-project core.
//!
//! ## Overview
//!
//! `CoreConfig` holds the dependencies and settings the core needs and is
//! constructed through a builder with fail-fast validation. The one
//! injectable bridge is the `HttpClient`; when the `desktop-shims`
//! feature is enabled a reqwest-based default is provided automatically.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .database_path("/path/to/projects.db")
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::HttpClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Core configuration for the document-project feature.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Path to the SQLite database holding the tracked-project list
    pub database_path: PathBuf,

    /// HTTP client for provider API requests (desktop default: reqwest)
    pub http_client: Option<Arc<dyn HttpClient>>,

    /// Per-request timeout applied by the default HTTP client
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("database_path", &self.database_path)
            .field(
                "http_client",
                &self.http_client.as_ref().map(|_| "HttpClient { ... }"),
            )
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CoreConfig {
    /// Start building a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Check settings and fail fast on anything unusable.
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::Config("Database path cannot be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        if self.request_timeout > Duration::from_secs(300) {
            return Err(Error::Config(
                "Request timeout exceeds maximum of 300 seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured HTTP client; an error when no implementation is wired in.
    pub fn require_http_client(&self) -> Result<Arc<dyn HttpClient>> {
        self.http_client
            .clone()
            .ok_or_else(|| Error::CapabilityMissing {
                capability: "HttpClient".to_string(),
                message: "No HTTP client implementation provided. \
                          Desktop: ensure the 'desktop-shims' feature is enabled to use the \
                          default ReqwestHttpClient. Otherwise inject one with .http_client()."
                    .to_string(),
            })
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client(timeout: Duration) -> Option<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    Some(Arc::new(ReqwestHttpClient::with_timeout(timeout)))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client(_timeout: Duration) -> Option<Arc<dyn HttpClient>> {
    None
}

/// Builder for [`CoreConfig`].
#[derive(Default)]
pub struct CoreConfigBuilder {
    database_path: Option<PathBuf>,
    http_client: Option<Arc<dyn HttpClient>>,
    request_timeout: Option<Duration>,
}

impl CoreConfigBuilder {
    /// Path of the SQLite file holding tracked projects (required).
    pub fn database_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Inject the HTTP client the providers should use.
    ///
    /// If not provided, the desktop default (reqwest-based) is used when
    /// the `desktop-shims` feature is enabled.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Per-request timeout for the default HTTP client.
    ///
    /// Default: 30 seconds.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validate and produce the `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error when the database path is missing or a setting
    /// fails validation.
    pub fn build(self) -> Result<CoreConfig> {
        let database_path = self.database_path.ok_or_else(|| {
            Error::Config("Database path is required. Use .database_path() to set it.".to_string())
        })?;

        let request_timeout = self.request_timeout.unwrap_or(Duration::from_secs(30));

        let http_client = self
            .http_client
            .or_else(|| provide_default_http_client(request_timeout));

        let config = CoreConfig {
            database_path,
            http_client,
            request_timeout,
        };

        config.validate()?;

        Ok(config)
    }
}
