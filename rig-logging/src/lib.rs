//! Tracing initialization for the rig tools.
//!
//! Logs are always written to stderr; stdout is reserved for program output.

use std::env;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Output format for log lines, selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Human,
    Json,
    Compact,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Human,
        }
    }
}

/// Build the filter: `RUST_LOG` wins, then `LOG_LEVEL`, then `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(default_level))
    })
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// - `RUST_LOG` / `LOG_LEVEL`: filter directives (default `warn`)
/// - `LOG_FORMAT`: `human` (default), `json` or `compact`
///
/// Returns false if a global subscriber was already installed.
pub fn init_subscriber() -> bool {
    let format = LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default());
    init_with(env_filter("warn"), format)
}

fn init_with(filter: EnvFilter, format: LogFormat) -> bool {
    let subscriber = registry().with(filter);
    let layer = fmt::layer().with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => subscriber.with(layer.json()).try_init(),
        LogFormat::Compact => subscriber.with(layer.compact()).try_init(),
        LogFormat::Human => subscriber.with(layer.pretty()).try_init(),
    };
    match result {
        Ok(()) => {
            tracing::debug!(?format, "tracing subscriber initialized");
            true
        }
        Err(_) => false,
    }
}
