//! Logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a fmt subscriber with the default [`Config`] filter.
pub fn init() {
    init_with(&Config::default());
}

/// Install a fmt subscriber. `RUST_LOG` wins over `config.log_filter` when set.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_with(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    crate::profiling::init_profiling(config.profiling);
}
