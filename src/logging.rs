
use std::fs::OpenOptions;

use slog::{self, Drain, Level, Logger};
use slog_async;
use slog_json;
use slog_term;

use config::LoggingConfig;
use errors::*;

/// Terminal logger, optionally mirrored as JSON into `config.file`.
pub fn build_logger(config: &LoggingConfig) -> Result<Logger> {
    let level = config.level
        .parse::<Level>()
        .map_err(|_| ErrorKind::InvalidConfig(format!("unknown log level '{}'", config.level)))?;

    let decorator = slog_term::TermDecorator::new().build();
    let term = slog_term::FullFormat::new(decorator).build().fuse();

    let logger = match config.file {
        Some(ref path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .chain_err(|| format!("Failed to open log file {}", path))?;
            let json = slog_json::Json::default(file).fuse();
            let drain = slog::Duplicate::new(term, json).ignore_res();
            let drain = slog_async::Async::new(drain).build().fuse();
            Logger::root(slog::LevelFilter::new(drain, level).fuse(),
                         o!("version" => env!("CARGO_PKG_VERSION")))
        }
        None => {
            let drain = slog_async::Async::new(term).build().fuse();
            Logger::root(slog::LevelFilter::new(drain, level).fuse(),
                         o!("version" => env!("CARGO_PKG_VERSION")))
        }
    };
    Ok(logger)
}
