//! Structured logging for the randigraph CLI.
//!
//! Events go to stderr so the degree summary printed on stdout can be piped
//! elsewhere untouched. `RUST_LOG` selects levels (default `info`) and
//! `RANDIGRAPH_LOG_FORMAT` selects `human` or `json` output. Records emitted
//! through the `log` facade are forwarded into `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "RANDIGRAPH_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output formats accepted through `RANDIGRAPH_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the current span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `RANDIGRAPH_LOG_FORMAT`, defaulting to
    /// [`LogFormat::Human`] when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the value is not UTF-8 or names an
    /// unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }

    fn stderr_layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr);
        match self {
            Self::Human => layer.boxed(),
            Self::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

/// Errors raised while setting up structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `RANDIGRAPH_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
}

/// Installs the global subscriber once per process and returns the format in
/// use. Later calls return the first format without touching the environment.
///
/// When another subscriber already owns the global slot, it is left in place
/// and a note is written to stderr.
///
/// # Errors
/// Returns [`LoggingError`] when `RANDIGRAPH_LOG_FORMAT` cannot be read or
/// parsed.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(&format) = INSTALLED.get() {
        return Ok(format);
    }
    let format = LogFormat::from_env()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // The `log` bridge is best-effort; an existing logger keeps its slot.
    let _ = LogTracer::init();

    let installed = tracing_subscriber::registry()
        .with(format.stderr_layer())
        .with(filter)
        .try_init();
    if let Err(err) = installed {
        report_existing_subscriber(&err);
    }
    Ok(*INSTALLED.get_or_init(|| format))
}

#[expect(
    clippy::print_stderr,
    reason = "The global subscriber belongs to another component"
)]
fn report_existing_subscriber(err: &tracing_subscriber::util::TryInitError) {
    eprintln!("structured logging already configured elsewhere: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case("", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn known_formats_parse(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[rstest]
    #[case("xml", "xml")]
    #[case(" Logfmt ", "logfmt")]
    fn unknown_formats_report_the_normalised_value(#[case] raw: &str, #[case] expected: &str) {
        match raw.parse::<LogFormat>() {
            Err(LoggingError::UnsupportedFormat { provided }) => assert_eq!(provided, expected),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn repeated_initialisation_keeps_the_first_format() {
        let first = init_logging().expect("logging must initialise");
        let second = init_logging().expect("subsequent calls must be no-ops");
        assert_eq!(first, second);
    }
}
