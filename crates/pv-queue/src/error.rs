use pv_core::PvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    /// An insert would push the pool past its booth count.  This is a logic
    /// fault in the caller, never a recoverable condition.
    #[error("booth pool capacity {capacity} exceeded")]
    PoolFull { capacity: usize },

    #[error(transparent)]
    Core(#[from] PvError),
}

pub type QueueResult<T> = Result<T, QueueError>;
