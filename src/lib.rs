pub mod backends;
pub mod config;
pub mod dispatch;
pub mod launcher;
pub mod logging;
pub mod scene;
pub mod util;
pub mod window;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("failed to connect to the display server: {0}")]
        ConnectionError(#[from] x11rb::errors::ConnectError),
        #[error("connection to the display server was lost")]
        ConnectionLost,
        #[error(transparent)]
        X11ConnectionError(#[from] x11rb::errors::ConnectionError),
        #[error(transparent)]
        ReplyOrIdError(#[from] x11rb::errors::ReplyOrIdError),
        #[error(transparent)]
        IoError(#[from] std::io::Error),
        #[error("invalid config file: {0}")]
        ConfigError(#[from] toml::de::Error),
        #[error("failed to configure logger: {0}")]
        LoggerError(String),
        #[error(transparent)]
        SetLoggerError(#[from] log::SetLoggerError),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}
