// Application state module
// Immutable per-process state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// The build root is resolved exactly once at startup and stays fixed for the
/// life of the process, so every component reads it without synchronization.
pub struct AppState {
    pub config: Config,
    pub build_root: PathBuf,
}

impl AppState {
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(config: Config, build_root: PathBuf) -> Self {
        Self { config, build_root }
    }
}
