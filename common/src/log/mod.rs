//! Global tracing setup, driven by [`crate::config::LogConfig`].
//! Initialization is idempotent: the first caller installs the subscriber,
//! later calls keep it.

use std::io;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::rolling;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::config::LogConfig;

static INSTALLED: OnceLock<LogConfig> = OnceLock::new();

/// Install the global subscriber. With a log directory configured, events go
/// to daily-rolled files there alongside stdout; without one, stdout only.
pub fn init(config: &LogConfig) {
    INSTALLED.get_or_init(|| {
        let level = if config.debug {
            Level::DEBUG
        } else {
            Level::INFO
        };
        match config.log_dir.as_deref() {
            Some(dir) => {
                let appender = rolling::daily(dir, "engine.log");
                let _ = tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_target(false)
                    .with_writer(appender.and(io::stdout))
                    .try_init();
            }
            None => {
                let _ = tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_target(false)
                    .try_init();
            }
        }
        config.clone()
    });
}

/// The configuration the subscriber was installed with, if any.
pub fn installed() -> Option<&'static LogConfig> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use tracing::{debug, info, warn};

    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(&LogConfig::default());
        // the second configuration is ignored, not an error
        init(&LogConfig {
            debug: true,
            log_dir: None,
        });
        assert_eq!(installed(), Some(&LogConfig::default()));

        debug!("log setup test: {:?}", "debug");
        info!("log setup test: {:?}", "info");
        warn!("log setup test: {:?}", "warn");
    }
}
