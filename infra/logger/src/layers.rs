use crate::builder::{LogFormat, Settings};
use crate::error::LoggerError;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const LOG_FILE_SUFFIX: &str = "log";

/// Output layers sit on top of the filtered registry.
pub(crate) type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Explicit directives win; otherwise `RUST_LOG`, falling back to the level.
pub(crate) fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    let Some(directives) = &settings.directives else {
        return Ok(builder.from_env_lossy());
    };
    builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid env filter '{directives}': {e}").into(),
        context: None,
    })
}

pub(crate) fn console(settings: &Settings) -> BoxedLayer {
    let console = layer().with_writer(io::stderr).with_ansi(settings.ansi);
    match settings.format {
        LogFormat::Compact => console.compact().boxed(),
        LogFormat::Json => console.json().boxed(),
    }
}

pub(crate) fn file(
    settings: &Settings,
    dir: &Path,
    prefix: &str,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(prefix)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file = layer().with_writer(writer).with_ansi(false);
    let layer = match settings.format {
        LogFormat::Compact => file.boxed(),
        LogFormat::Json => file.json().boxed(),
    };
    Ok((layer, guard))
}
