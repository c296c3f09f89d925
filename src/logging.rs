//! Logging setup for the binary.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Installs a stderr subscriber. `RUST_LOG` wins over `default_level`; an
/// unparsable level falls back to `info`. Fails when a global subscriber is
/// already installed.
pub fn init_logging(default_level: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the csv reports
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn second_init_reports_existing_subscriber() {
        // the first call may lose to another test in this binary
        let _ = init_logging("debug");
        assert!(init_logging("debug").is_err());
    }
}
