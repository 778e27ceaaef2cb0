//! Log subscriber setup. Logs go to stderr so stdout stays parseable.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Level used when neither `FORMCHECK_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `"formcheck_validator=trace"`.
    pub level: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Reads the level from `FORMCHECK_LOG`, falling back to `RUST_LOG`.
    pub fn from_env(format: LogFormat) -> Self {
        Self::from_vars(
            std::env::var("FORMCHECK_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            format,
        )
    }

    fn from_vars(formcheck: Option<String>, rust: Option<String>, format: LogFormat) -> Self {
        let set = |level: &String| !level.trim().is_empty();
        let level = formcheck
            .filter(set)
            .or_else(|| rust.filter(set))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_owned());
        Self { level, format }
    }
}

/// Installs the global subscriber.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow!("invalid log filter {:?}: {e}", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().with_ansi(false).try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
