//! log4rs setup.
//!
//! The tool reads no config file, so the console appender is built in code.
//! Logs go to stderr to keep stdout for reports.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}]: {m}{n}";

/// Map `-v` count and `-q` to a level. Default is warn.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn build_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

pub fn init(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(build_config(level)?)?;
    log::debug!("logging initialised at {level}");
    Ok(())
}
