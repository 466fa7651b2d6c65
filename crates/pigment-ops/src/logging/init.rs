use std::sync::Once;

use log::LevelFilter;

/// Level used when neither an explicit filter nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Backend settings for [`init_logging`].
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then [`DEFAULT_LEVEL`].
/// Filters use `env_logger` syntax, e.g. `"pigment_ops::paint=debug"` shows
/// every pixel copy made while normalizing image brushes.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter string in effect, if any. `None` means [`DEFAULT_LEVEL`].
    fn filter(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }

    /// Unregistered `env_logger` builder for this configuration.
    pub fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.filter() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(DEFAULT_LEVEL),
        };
        builder.write_style(self.write_style);
        if !self.timestamps {
            builder.format_timestamp(None);
        }
        builder
    }
}

static INIT: Once = Once::new();

/// Registers the `env_logger` backend. Only the first call has any effect.
///
/// A logger installed by someone else stays in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| match config.builder().try_init() {
        Ok(()) => log::debug!("logging: env_logger installed"),
        Err(_) => log::debug!("logging: keeping existing logger"),
    });
}
