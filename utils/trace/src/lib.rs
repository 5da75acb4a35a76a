use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Output style of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = TracingInitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(TracingInitError::UnknownFormat {
                value: other.to_string(),
            }),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_directives`.
pub fn init(default_directives: &str, format: LogFormat) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with((format == LogFormat::Compact).then(|| fmt::layer().compact()))
        .with((format == LogFormat::Pretty).then(|| fmt::layer().pretty()));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber")]
    SetGlobalDefault {
        #[from]
        source: tracing::subscriber::SetGlobalDefaultError,
    },

    #[error("Unknown log format: {value}")]
    UnknownFormat { value: String },
}
