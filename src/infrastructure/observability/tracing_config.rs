use crate::presentation::config::LoggingSettings;

/// Resolved logging setup, derived from the `logging` section of the
/// settings. `RUST_LOG` still wins over the configured level when set.
pub struct TracingConfig {
    pub default_directive: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings) -> Self {
        Self {
            default_directive: format!(
                "{},linguara=debug,tower_http=debug",
                logging.level
            ),
            json_format: logging.enable_json,
        }
    }
}
