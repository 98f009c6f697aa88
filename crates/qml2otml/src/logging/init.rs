use std::sync::Once;

/// How `qml2otml` sets up its diagnostics.
///
/// `env_filter` comes from `--log` and uses the `env_logger` filter syntax
/// (e.g. "warn", "otml_qml=debug"). Without it `RUST_LOG` applies.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Take the `--log` value when one was given.
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        if filter.is_some() {
            self.env_filter = filter;
        }
        self
    }
}

static INIT: Once = Once::new();

/// Install the stderr logger that receives parse failures from
/// `QmlLoader::parse_file`. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // stdout carries the converted documents; diagnostics stay off it
        builder.target(env_logger::Target::Stderr);
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
