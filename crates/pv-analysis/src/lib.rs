//! `pv-analysis` — repeated-trial statistics on top of `pv-sim`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`stats`]     | `mean`, `mean_wait`, `upper_median`                        |
//! | [`trials`]    | `average_wait`, `trial_mean_waits`, `trial_seed`           |
//! | [`threshold`] | `find_threshold`, `Threshold`, `split_grid`                |
//! | [`error`]     | `AnalysisError`, `AnalysisResult<T>`                       |
//!
//! # Statistical contract
//!
//! - Trial `i` of `n` is seeded with `initial_seed + i`.
//! - Each trial is reduced to its mean wait; a trial with no voters is an
//!   error, never a zero.
//! - The reported statistic is the *upper* median of the trial means: the
//!   element at index `n / 2` after an ascending sort.
//! - The threshold search walks split-ticket shares `0.0, 0.1, …, 1.0` and
//!   stops at the first share whose median wait is strictly above the target.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs trials on Rayon's thread pool.                    |

pub mod error;
pub mod stats;
pub mod threshold;
pub mod trials;


pub use error::{AnalysisError, AnalysisResult};
pub use stats::{mean, mean_wait, upper_median};
pub use threshold::{Threshold, find_threshold, split_grid};
pub use trials::{average_wait, trial_mean_waits, trial_seed};
