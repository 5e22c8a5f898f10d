use crate::Error;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use std::str::FromStr;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Parses the configured level and raises it one step per `-v`.
pub fn level_filter(configured: &str, verbosity: u8) -> Result<LevelFilter, Error> {
    let base = LevelFilter::from_str(configured.trim())
        .map_err(|_| Error::InvalidLogLevel(configured.to_string()))?;
    let position = LEVELS.iter().position(|level| *level == base).unwrap_or(0);
    let raised = (position + usize::from(verbosity)).min(LEVELS.len() - 1);
    Ok(LEVELS[raised])
}

/// Sends this crate's records at `level`, and everyone else's warnings, to
/// stderr. Stdout belongs to the menus.
pub fn init(level: LevelFilter) -> Result<log4rs::Handle, Error> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("task_menu", level))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;

    Ok(log4rs::init_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_parses_any_case() {
        assert_eq!(level_filter("warn", 0).unwrap(), LevelFilter::Warn);
        assert_eq!(level_filter(" DEBUG ", 0).unwrap(), LevelFilter::Debug);
        assert_eq!(level_filter("off", 0).unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_level_filter_raises_per_verbosity_step() {
        assert_eq!(level_filter("warn", 1).unwrap(), LevelFilter::Info);
        assert_eq!(level_filter("warn", 2).unwrap(), LevelFilter::Debug);
        assert_eq!(level_filter("off", 1).unwrap(), LevelFilter::Error);
    }

    #[test]
    fn test_level_filter_caps_at_trace() {
        assert_eq!(level_filter("info", 200).unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn test_level_filter_rejects_unknown_level() {
        let result = level_filter("loud", 0);

        assert!(matches!(result, Err(Error::InvalidLogLevel(level)) if level == "loud"));
    }
}
