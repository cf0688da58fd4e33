use crate::error::{LoggerError, LoggerErrorExt};
use crate::layers::{self, BoxedLayer};
use crate::Logger;
use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_MAX_FILES: usize = 10;

mod private {
    pub trait Sealed {}
}

/// Name state: no name given yet.
#[derive(Debug, Default)]
pub struct Unnamed;
/// Name state: the process name, also the log file prefix.
#[derive(Debug)]
pub struct Named(String);
/// File state: console only.
#[derive(Debug, Default)]
pub struct WithoutFile;
/// File state: a rolling log directory is configured.
#[derive(Debug)]
pub struct WithFile;

impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for WithoutFile {}
impl Sealed for WithFile {}

/// Line format shared by the console and the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) console: bool,
    pub(crate) ansi: bool,
    pub(crate) format: LogFormat,
    pub(crate) level: LevelFilter,
    pub(crate) directives: Option<String>,
    pub(crate) dir: Option<PathBuf>,
    pub(crate) rotation: Rotation,
    pub(crate) max_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            ansi: true,
            format: LogFormat::Compact,
            level: LevelFilter::WARN,
            directives: None,
            dir: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// Typestate builder for the global tracing subscriber.
///
/// `init` exists only once a name is set; rotation settings only once a log
/// directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = WithoutFile> {
    settings: Settings,
    name: N,
    _file: PhantomData<F>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self { settings: Settings::default(), name: Unnamed, _file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the process. The name also prefixes log files, e.g. `bkit.2026-10-19.log`.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), _file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Maps a repeated `-v` flag onto a level: none is `WARN`, then `INFO`,
    /// `DEBUG` and `TRACE`.
    #[must_use]
    pub const fn verbosity(self, count: u8) -> Self {
        let level = match count {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        self.level(level)
    }

    /// Filter directives such as `bkit_blocks=trace`. Replaces `RUST_LOG`.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    /// Toggles the stderr layer.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Toggles colours on stderr. Files never get colours.
    #[must_use]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.settings.ansi = enabled;
        self
    }

    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Shorthand for `format(LogFormat::Json)`.
    #[must_use]
    pub const fn json(self) -> Self {
        self.format(LogFormat::Json)
    }

    /// Adds a rolling log file in `dir`, created on `init` if missing.
    pub fn path(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        let mut settings = self.settings;
        settings.dir = Some(dir.into());
        LoggerBuilder { settings, name: self.name, _file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, a zero file
    ///   count, bad filter directives or when every output is disabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory
    ///   or file cannot be set up.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        check(&settings, &name)?;

        let filter = layers::env_filter(&settings)?;
        let mut outputs: Vec<BoxedLayer> = Vec::new();
        if settings.console {
            outputs.push(layers::console(&settings));
        }

        let guard = match &settings.dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory {}", dir.display()))?;
                let (layer, guard) = layers::file(&settings, dir, &name)?;
                outputs.push(layer);
                Some(guard)
            },
            None => None,
        };

        if outputs.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(outputs).try_init()?;
        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// How many rotated files to keep.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }
}

fn check(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        "Logger name cannot be empty"
    } else if settings.max_files == 0 {
        "max_files must be greater than zero"
    } else {
        return Ok(());
    };
    Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
}
