//! Logging system demonstration
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run --example logging_demo
//!
//! # JSON format
//! cargo run --example logging_demo -- json
//!
//! # With custom filter
//! cargo run --example logging_demo -- pretty "core_runtime=trace"
//! ```

use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LogLevel, LoggingConfig};
use std::env;
use tracing::{debug, error, info, instrument, span, trace, warn, Level};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = if args.len() > 1 {
        match args[1].as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    } else {
        LogFormat::default()
    };

    let filter = args.get(2).cloned();

    let mut config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_target(true);

    if let Some(f) = filter {
        config = config.with_filter(f);
    }

    init_logging(config).expect("Failed to initialize logging");

    info!(format = ?format, "Logging initialized");

    demo_log_levels();
    demo_structured_logging();
    demo_spans();
    demo_redaction();
    demo_instrumentation();
}

fn demo_log_levels() {
    let span = span!(Level::INFO, "log_levels");
    let _enter = span.enter();

    trace!("This is a TRACE level log");
    debug!("This is a DEBUG level log");
    info!("This is an INFO level log");
    warn!("This is a WARN level log");
    error!("This is an ERROR level log");
}

fn demo_structured_logging() {
    let span = span!(Level::INFO, "structured_logging");
    let _enter = span.enter();

    info!("Simple message without fields");

    info!(
        project_id = "folder1",
        name = "Novel",
        document_count = 12,
        "Project information"
    );
}

fn demo_spans() {
    let span = span!(Level::INFO, "project_refresh", provider = "google_drive");
    let _enter = span.enter();

    info!("Starting tracked-project refresh");

    {
        let inner_span = span!(Level::DEBUG, "metadata_lookup");
        let _inner = inner_span.enter();

        debug!(checked = 3, "Fetched metadata for tracked projects");
    }

    info!(removed = 1, "Refresh complete");
}

fn demo_redaction() {
    let span = span!(Level::INFO, "redaction");
    let _enter = span.enter();

    let token = "secret_access_token_12345";
    let email = "user@example.com";

    info!(
        token = %redact_if_sensitive("access_token", token),
        email = %redact_if_sensitive("email", email),
        "Sensitive data example"
    );
}

#[instrument]
fn demo_instrumentation() {
    info!("Instrumented function automatically creates spans");

    let items = vec!["doc1", "doc2", "doc3"];
    process_items(&items);
}

#[instrument(fields(count = items.len()))]
fn process_items(items: &[&str]) {
    for (idx, item) in items.iter().enumerate() {
        trace!(item_id = idx, item = %item, "Processing item");
    }

    info!("All items processed");
}
