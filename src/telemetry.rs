//! Tracing subscriber setup.

use crate::config::{LoggingConfig, ValidationError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// again after a subscriber is installed has no effect.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = config.json, "tracing initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }
}
