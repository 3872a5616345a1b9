//! `pv-config` — precinct file loading.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`loader`] | `PrecinctFile`, `load_precincts_json`, `load_precincts_reader` |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                      |

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use loader::{PrecinctFile, load_precincts_json, load_precincts_reader};
