mod sign_up_config;

pub use sign_up_config::*;

use std::sync::OnceLock;
use tracing::warn;

static GLOBAL_CONFIG: OnceLock<SignUpConfig> = OnceLock::new();

/// Install the configuration used by clients built without an explicit one.
/// Returns `false` if a configuration was already installed.
pub fn init_global_config(config: SignUpConfig) -> bool {
    let config = match config.validate() {
        Ok(()) => config,
        Err(errors) => {
            warn!("Invalid configuration, using defaults: {}", errors.join("; "));
            SignUpConfig::default()
        }
    };

    GLOBAL_CONFIG.set(config).is_ok()
}

/// Get the global configuration, initialized with defaults on first access
pub fn get_global_config() -> SignUpConfig {
    GLOBAL_CONFIG.get_or_init(SignUpConfig::default).clone()
}
