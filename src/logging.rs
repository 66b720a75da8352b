use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Initialize logging from settings
///
/// `RUST_LOG` wins over the configured level when set. Safe to call more
/// than once; later calls leave the installed subscriber alone.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let already_set = if settings.format == "pretty" {
        subscriber.pretty().try_init().is_err()
    } else {
        subscriber.try_init().is_err()
    };

    if already_set {
        tracing::debug!("Logging already initialized, keeping existing subscriber");
    }
}
