//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Build the filter for a log level; `RUST_LOG` wins when it is set.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global stderr subscriber for a service.
///
/// Does nothing when logging is disabled. Calling it twice is harmless:
/// the first subscriber stays installed.
pub fn init_logging(config: &ServerConfig) {
    if !config.enable_logging {
        return;
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_level))
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
