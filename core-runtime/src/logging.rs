//! # Logging & Tracing Infrastructure
//!
//! Configures the `tracing-subscriber` stack used by every crate in the
//! workspace:
//! - pretty, JSON, and compact output formats
//! - module-level filtering through `EnvFilter`
//! - a redaction helper for sensitive field values (tokens, emails)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::default().with_format(LogFormat::Json);
//! init_logging(config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::{
    filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Minimum level for emitted events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output for development
    Pretty,
    /// One JSON object per event, flattened fields
    Json,
    /// Single-line output
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Logging setup options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output encoding for events
    pub format: LogFormat,
    /// Minimum level that is emitted at all
    pub level: LogLevel,
    /// Custom filter string (e.g., "core_projects=debug,provider_google_drive=trace")
    pub filter: Option<String>,
    /// Whether events carry their originating module path
    pub display_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            display_target: true,
        }
    }
}

impl LoggingConfig {
    /// Choose the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Choose the minimum level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Override the default filter with a full EnvFilter directive
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Toggle the module-path prefix on events
    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }
}

/// Initialize the logging system
///
/// This should be called once during application startup. Subsequent
/// calls will return an error.
///
/// # Errors
///
/// Returns an error if logging is already initialized or the filter
/// string is invalid.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let fmt = tracing_subscriber::fmt::layer()
        .with_target(config.display_target)
        .with_writer(io::stdout);

    let init_result = match config.format {
        LogFormat::Pretty => registry.with(fmt.pretty()).try_init(),
        LogFormat::Json => registry.with(fmt.json().flatten_event(true)).try_init(),
        LogFormat::Compact => registry.with(fmt.compact()).try_init(),
    };

    init_result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let base_level = config.level.as_str();

    let filter_string = if let Some(custom_filter) = &config.filter {
        custom_filter.clone()
    } else {
        // Default filter: our crates at the configured level, noisy
        // dependencies at warn
        format!(
            "core_runtime={},core_projects={},provider_google_drive={},\
             bridge_desktop={},h2=warn,hyper=warn,reqwest=warn,sqlx=warn",
            base_level, base_level, base_level, base_level
        )
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

const SENSITIVE_FIELDS: &[&str] = &[
    "token", "password", "secret", "api_key", "authorization", "bearer",
];

fn is_sensitive_field(field_name: &str) -> bool {
    let lower = field_name.to_lowercase();
    SENSITIVE_FIELDS.iter().any(|f| lower.contains(f))
}

fn looks_like_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

/// Redact a field value before logging it
///
/// Credential-bearing fields (tokens, secrets) are replaced entirely;
/// email-shaped values keep their first character only. Everything else
/// passes through unchanged.
///
/// ```ignore
/// use tracing::info;
/// use core_runtime::logging::redact_if_sensitive;
///
/// info!(token = %redact_if_sensitive("access_token", token), "Session created");
/// ```
pub fn redact_if_sensitive(field_name: &str, value: &str) -> String {
    if is_sensitive_field(field_name) {
        return "[REDACTED]".to_string();
    }

    if looks_like_email(value) {
        // First character only, never a byte slice: the local part may
        // start with a multibyte character
        return match value.chars().next().filter(|&c| c != '@') {
            Some(first) => format!("{}***@[REDACTED]", first),
            None => "***@[REDACTED]".to_string(),
        };
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_level(LogLevel::Debug)
            .with_filter("core_projects=trace")
            .with_target(false);

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.filter, Some("core_projects=trace".to_string()));
        assert!(!config.display_target);
    }

    #[test]
    fn test_redact_if_sensitive() {
        assert_eq!(
            redact_if_sensitive("access_token", "secret123"),
            "[REDACTED]"
        );
        assert_eq!(redact_if_sensitive("token", "abc"), "[REDACTED]");
        assert_eq!(redact_if_sensitive("password", "pass"), "[REDACTED]");

        let redacted = redact_if_sensitive("email", "user@example.com");
        assert!(redacted.starts_with('u'));
        assert!(redacted.contains("[REDACTED]"));

        assert_eq!(redact_if_sensitive("project_id", "12345"), "12345");
        assert_eq!(redact_if_sensitive("name", "My Project"), "My Project");
    }

    #[test]
    fn test_redact_email_with_multibyte_first_char() {
        let redacted = redact_if_sensitive("email", "über@example.com");

        assert_eq!(redacted, "ü***@[REDACTED]");
        assert!(!redacted.contains("example.com"));
    }

    #[test]
    fn test_redact_email_with_empty_local_part() {
        assert_eq!(
            redact_if_sensitive("email", "@example.com"),
            "***@[REDACTED]"
        );
    }

    #[test]
    fn test_default_format() {
        #[cfg(debug_assertions)]
        assert_eq!(LogFormat::default(), LogFormat::Pretty);

        #[cfg(not(debug_assertions))]
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn test_build_filter() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_build_custom_filter() {
        let config = LoggingConfig::default().with_filter("core_projects=trace");
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("core_projects=trace"));
    }
}
