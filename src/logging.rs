use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: Level = Level::WARN;

/// An explicit `level` wins; otherwise `RUST_LOG`, then warnings only.
pub fn build_filter(level: Option<Level>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL.as_str())),
    }
}

/// Install a stderr subscriber.
pub fn init_logging(level: Option<Level>) {
    let filter = build_filter(level);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_ignores_environment() {
        assert_eq!(build_filter(Some(Level::DEBUG)).to_string(), "debug");
        assert_eq!(build_filter(Some(Level::TRACE)).to_string(), "trace");
    }
}
