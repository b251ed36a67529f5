//! Logger setup.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses `env_logger` directive syntax, e.g. `"debug"` or
/// `"hello_triangle=debug,wgpu_core=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Picks the filter directives: explicit config first, then `RUST_LOG`, then `info`.
fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> String {
    config
        .filter
        .clone()
        .or(env)
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global `env_logger` backend. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());
        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();
        log::debug!("Logger initialized with filter {:?}", filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let config = LoggingConfig {
            filter: Some("debug".into()),
            ..Default::default()
        };
        assert_eq!(resolve_filter(&config, Some("warn".into())), "debug");
    }

    #[test]
    fn env_filter_used_when_unset() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_filter(&config, Some("warn".into())), "warn");
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(resolve_filter(&LoggingConfig::default(), None), "info");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
