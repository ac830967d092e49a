//! Logging utilities and configuration for catmip-lint.
//!
//! The library only emits `tracing` events. Subscribers are installed by the
//! binary through [`setup::init_logging`], which always writes to stderr so
//! that stdout carries nothing but the report.

use tracing::Level;

/// Logging configuration for a lint run.
///
/// Controls how much per-rule and per-finding detail a [`LintSuite`] logs.
///
/// [`LintSuite`]: crate::core::LintSuite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Base log level for catmip-lint components
    pub base_level: Level,
    /// Whether to log each rule's finding count and duration
    pub log_rule_details: bool,
    /// Whether to log every finding as it is added to the report
    pub log_findings: bool,
    /// Maximum length in characters for logged field values
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_rule_details: true,
            log_findings: false,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_rule_details: true,
            log_findings: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for CI runs.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_rule_details: false,
            log_findings: false,
            max_field_length: 128,
        }
    }

    /// Returns true if events at `level` pass `base_level`.
    pub fn enables(&self, level: Level) -> bool {
        level <= self.base_level
    }
}

/// Macro for conditional rule logging.
#[macro_export]
macro_rules! log_rule {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_rule_details && $config.enables(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional per-finding logging.
#[macro_export]
macro_rules! log_finding {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_findings && $config.enables(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}

/// Truncates a string to at most `max_length` characters, appending `...`
/// when something was cut.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    match value.char_indices().nth(max_length) {
        None => value.to_string(),
        Some((end, _)) => format!("{}...", &value[..end]),
    }
}

/// Utilities for installing a `tracing` subscriber.
pub mod setup {
    use crate::error::{LintError, Result};
    use tracing::Level;

    /// Configuration for the logging subscriber.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for dependencies
        pub level: Level,
        /// Log level for catmip-lint components specifically
        pub lint_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::WARN,
                lint_level: Level::WARN,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for CI use: JSON lines, info level.
        pub fn production() -> Self {
            Self {
                level: Level::WARN,
                lint_level: Level::INFO,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for development use.
        pub fn development() -> Self {
            Self {
                level: Level::INFO,
                lint_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level for catmip-lint components.
        pub fn with_lint_level(mut self, level: Level) -> Self {
            self.lint_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},catmip_lint={}",
                    self.level.as_str().to_lowercase(),
                    self.lint_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Installs the global subscriber. `RUST_LOG` takes precedence over the
    /// configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use catmip_lint::logging::setup::{init_logging, LoggingConfig};
    ///
    /// let config = LoggingConfig::development().with_json_format(true);
    /// init_logging(config).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LintError::Configuration(format!("failed to install logger: {e}")))
    }
}
