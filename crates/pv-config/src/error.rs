use pv_core::PvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("precinct file parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] PvError),

    #[error("precinct {0:?} is defined more than once")]
    DuplicatePrecinct(String),

    #[error("no precinct named {0:?} in the configuration")]
    UnknownPrecinct(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
