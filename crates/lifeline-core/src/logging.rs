//! Console logging setup.
//!
//! ```ignore
//! use lifeline_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("lifeline=debug")
//!     .init();
//! ```
//!
//! `RUST_LOG`, when set, wins over the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a builder filter is set
pub const DEFAULT_FILTER: &str = "lifeline=info,lifeline_core=info,lifeline_ui=info";

/// Builder for the global tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: Option<bool>,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive (e.g., "lifeline=info,lifeline_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Force ANSI colors on or off.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// The directive that will be applied when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }

    fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.filter_directive()))
    }

    /// Install the subscriber globally.
    ///
    /// A second call is a no-op; the first subscriber stays in place.
    pub fn init(self) {
        let mut fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        if let Some(ansi) = self.ansi {
            fmt_layer = fmt_layer.with_ansi(ansi);
        }

        let result = tracing_subscriber::registry()
            .with(self.build_filter())
            .with(fmt_layer)
            .try_init();

        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(LoggingBuilder::new().filter_directive(), DEFAULT_FILTER);
    }

    #[test]
    fn test_custom_filter() {
        let builder = LoggingBuilder::new().with_filter("lifeline_core=trace");
        assert_eq!(builder.filter_directive(), "lifeline_core=trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        LoggingBuilder::new().with_ansi(false).init();
        LoggingBuilder::new().init();
        tracing::info!("still logging");
    }
}
