use pv_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("at least one trial is required")]
    NoTrials,

    /// A trial served no voters, so its mean wait is undefined.
    #[error("trial {trial} (seed {seed}) produced no voters")]
    DegenerateTrial { trial: usize, seed: u64 },

    #[error("target wait must not be NaN")]
    NanTarget,

    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
