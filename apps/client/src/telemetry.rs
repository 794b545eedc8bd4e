use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::SubsystemError;
use crate::subsystems::LoggingInitializer;

static INSTALLED: OnceCell<LogFormat> = OnceCell::new();

/// Installs the global subscriber. Later calls report the format already in use.
///
/// A subscriber installed by someone else (a test harness, an embedding host)
/// is kept as the sink.
pub fn init_tracing(format: LogFormat) -> Result<LogFormat, SubsystemError> {
    INSTALLED
        .get_or_try_init(|| -> Result<LogFormat, SubsystemError> {
            if tracing::dispatcher::has_been_set() {
                tracing::debug!("global subscriber already installed, keeping it");
                return Ok(format);
            }

            let env_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

            let base = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_ansi(false);

            let registry = tracing_subscriber::registry().with(env_filter);
            let result = match format {
                LogFormat::Json => registry.with(base.json()).try_init(),
                LogFormat::Pretty => registry.with(base).try_init(),
            };
            result.map_err(|e| SubsystemError::other(format!("tracing subscriber: {e}")))?;
            Ok(format)
        })
        .copied()
}

/// The default [`LoggingInitializer`]: a `tracing` subscriber on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogging {
    format: LogFormat,
}

impl TracingLogging {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }
}

impl LoggingInitializer for TracingLogging {
    fn init_logging(&self) -> Result<(), SubsystemError> {
        let installed = init_tracing(self.format)?;
        if installed != self.format {
            tracing::debug!(requested = ?self.format, ?installed, "logging already initialized");
        }
        Ok(())
    }
}
