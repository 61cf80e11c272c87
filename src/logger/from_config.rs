//! Logger construction from footstep config files.

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Creates a logger from the default config file, falling back to defaults when
    /// the file is missing or broken.
    #[must_use]
    pub fn from_default_config() -> Self {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("Using defaults: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Creates a logger from an already loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        if !config.streams.is_empty() {
            internal::debug(
                "LOGGER",
                &format!("Configured streams: [{}]", sorted_keys(config).join(", ")),
            );
        }
        let logger = Self::new(config.to_overrides());
        internal::debug("LOGGER", "Logger ready");
        logger
    }
}

fn sorted_keys(config: &Config) -> Vec<&str> {
    let mut keys: Vec<&str> = config.streams.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
