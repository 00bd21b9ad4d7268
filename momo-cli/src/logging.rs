//! Logging configuration and subscriber setup.
//!
//! Two channels, decided once at startup: `app` receives everything below
//! ERROR down to its minimum level, `error` receives ERROR events only.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{LevelFilter, filter_fn},
    fmt::writer::BoxMakeWriter,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Where a channel writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    /// Appended to; created if missing.
    File(PathBuf),
}

impl LogTarget {
    fn is_terminal(&self) -> bool {
        !matches!(self, LogTarget::File(_))
    }

    fn make_writer(&self) -> anyhow::Result<BoxMakeWriter> {
        Ok(match self {
            LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| anyhow::anyhow!("cannot open log file {}: {}", path.display(), e))?;
                BoxMakeWriter::new(Mutex::new(file))
            }
        })
    }
}

impl FromStr for LogTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Empty log target".to_string()),
            "stdout" => Ok(LogTarget::Stdout),
            "stderr" => Ok(LogTarget::Stderr),
            path => Ok(LogTarget::File(PathBuf::from(path))),
        }
    }
}

/// Minimum level a channel records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    pub target: LogTarget,
    pub level: LogLevel,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub app: ChannelConfig,
    pub error: ChannelConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app: ChannelConfig {
                target: LogTarget::Stdout,
                level: LogLevel::Debug,
            },
            error: ChannelConfig {
                target: LogTarget::Stderr,
                level: LogLevel::Error,
            },
        }
    }
}

impl LoggingConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `MOMO_LOG_APP`, `MOMO_LOG_APP_LEVEL`, `MOMO_LOG_ERROR` and
    /// `MOMO_LOG_ERROR_LEVEL` through `lookup`; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("MOMO_LOG_APP") {
            config.app.target = v.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(v) = lookup("MOMO_LOG_APP_LEVEL") {
            config.app.level = v.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(v) = lookup("MOMO_LOG_ERROR") {
            config.error.target = v.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(v) = lookup("MOMO_LOG_ERROR_LEVEL") {
            config.error.level = v.parse().map_err(anyhow::Error::msg)?;
        }

        Ok(config)
    }
}

/// Installs the global subscriber. `RUST_LOG` narrows both channels.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let app_level = config.app.level.as_filter();
    let app_layer = tracing_subscriber::fmt::layer()
        .with_writer(config.app.target.make_writer()?)
        .with_ansi(config.app.target.is_terminal())
        .with_filter(filter_fn(move |meta| {
            *meta.level() != Level::ERROR && *meta.level() <= app_level
        }));

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(config.error.target.make_writer()?)
        .with_ansi(config.error.target.is_terminal())
        .with_filter(config.error.level.as_filter());

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,momo_client=debug,momo_cli=debug".into()),
        )
        .with(app_layer)
        .with(error_layer)
        .try_init()?;

    Ok(())
}
