use thiserror::Error;

/// Errors surfaced by the task menu outside of user input handling.
///
/// Bad user input never ends up here; it degrades to defaults instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading from or writing to the terminal failed
    #[error("Cannot talk to the terminal")]
    Terminal(#[from] std::io::Error),
    /// The configuration file is missing or malformed
    #[error("Cannot load configuration")]
    Config(#[from] config::ConfigError),
    #[error("'{0}' is not a valid log level")]
    InvalidLogLevel(String),
    #[error("Cannot build logging configuration")]
    LoggingSetup(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("Logging has already been initialised")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
}
