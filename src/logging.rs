use log::{debug, info};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::{
    config::Config,
    error::{Error, Result},
    launcher::Program,
};

const PATTERN: &str =
    "{d(%Y-%m-%d %H:%M:%S %Z)(utc)} │ {({M}::{f}:{L}):>25} │ {h({l:>5})} │ {m}{n}";

/// Log output goes to stderr; stdout carries the programs' report lines.
pub fn logger_config(config: &Config) -> Result<log4rs::Config> {
    let encoder = Box::new(PatternEncoder::new(PATTERN));

    let stderr = ConsoleAppender::builder()
        .encoder(encoder.clone())
        .target(Target::Stderr)
        .build();

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = &config.log_file {
        let logfile = FileAppender::builder().encoder(encoder).build(path)?;

        builder = builder
            .appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    builder
        .build(root.build(config.log_level))
        .map_err(|err| Error::LoggerError(err.to_string()))
}

pub fn init_logger(config: &Config) -> Result<()> {
    log4rs::init_config(logger_config(config)?)?;
    Ok(())
}

pub fn log_prologue(program: Program) {
    info!("========================================================================");
    info!("{}", program);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    debug!("config file: {:?}", Config::path());
    info!("========================================================================");
}
