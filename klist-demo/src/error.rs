use thiserror::Error;

/// Failures the demo binary reports before exiting.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("unknown screen '{0}' (expected multiple, home, advanced or single)")]
    UnknownScreen(String),

    #[error("invalid preview size '{0}' (expected WIDTHxHEIGHT, e.g. 60x40)")]
    BadPreviewSize(String),

    #[error("missing value for {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;
