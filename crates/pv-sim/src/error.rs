use pv_core::PvError;
use pv_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("precinct {0:?} was not simulated")]
    UnknownPrecinct(String),

    #[error("precinct {0:?} appears more than once")]
    DuplicatePrecinct(String),

    #[error(transparent)]
    Core(#[from] PvError),

    #[error("booth allocation failed: {0}")]
    Queue(#[from] QueueError),
}

pub type SimResult<T> = Result<T, SimError>;
