use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    /// Structured output for piping the demo into log collectors.
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "aio_toolkit=debug,info"
    } else {
        "aio_toolkit=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "aio_toolkit=info");
        assert!(default_directives(true).starts_with("aio_toolkit=debug"));
    }

    #[test]
    fn test_log_format_defaults_to_compact() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
        let json: LogFormat = serde_json::from_str("\"Json\"").unwrap();
        assert_eq!(json, LogFormat::Json);
    }
}
