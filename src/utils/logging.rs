//! File logging.
//!
//! The terminal belongs to the game while it runs, so log records go to a
//! file through `log4rs` instead of stderr.

use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::io;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install a file logger at `level`. Can only succeed once per process.
pub fn init_log(level: LevelFilter, file_path: &Path) -> io::Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    log4rs::init_config(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    Ok(())
}
