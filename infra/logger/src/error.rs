use std::borrow::Cow;

/// Why the subscriber could not be installed.
#[bkit_derive::bkit_error]
pub enum LoggerError {
    #[error("Rolling file appender error{}: {source}", fmt_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", fmt_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// The log directory could not be created or read.
    #[error("Log directory error{}: {source}", fmt_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid logger configuration{}: {message}", fmt_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal logger error{}: {message}", fmt_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
