//! Build-output discovery
//!
//! The compiled front-end bundle lands in different places depending on how
//! the process was started: a checkout run keeps it next to the source tree,
//! while deployed installs have shipped a few different layouts over time.
//! The locator probes an ordered candidate list once at startup and the
//! winner stays fixed for the life of the process.

use std::path::{Path, PathBuf};

use crate::config::RunMode;
use crate::logger;

/// Environment signals sampled once at startup.
pub struct EnvSignals {
    pub mode: RunMode,
    pub cwd: PathBuf,
    pub exe_dir: Option<PathBuf>,
}

impl EnvSignals {
    /// Sample signals from the running process.
    pub fn from_process(mode: RunMode) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        Self { mode, cwd, exe_dir }
    }
}

/// Ordered candidate directories for the build root.
///
/// Dev runs have a single conventional location relative to the binary
/// (`target/<profile>/` sits two levels below the checkout). Packaged runs
/// probe the layouts installers have used: next to the binary, one level up,
/// then relative to the working directory.
pub fn candidates(signals: &EnvSignals) -> Vec<PathBuf> {
    let exe_dir = signals
        .exe_dir
        .clone()
        .unwrap_or_else(|| signals.cwd.clone());

    match signals.mode {
        RunMode::Dev => vec![exe_dir.join("../../web/dist")],
        RunMode::Packaged => vec![
            exe_dir.join("web"),
            exe_dir.join("../web"),
            signals.cwd.join("web"),
        ],
    }
}

/// Select the first candidate that exists, falling back to the first
/// candidate when none does.
///
/// The existence check is injected so selection order can be tested without
/// touching the real filesystem. A miss is a soft failure: the server keeps
/// running and requests against the default root answer 404.
pub fn locate_with<F>(signals: &EnvSignals, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let candidates = candidates(signals);
    for candidate in &candidates {
        if exists(candidate) {
            return candidate.clone();
        }
    }

    logger::log_warning(&format!(
        "No build output found in {} candidate location(s); defaulting to {}",
        candidates.len(),
        candidates[0].display()
    ));
    candidates[0].clone()
}

/// Resolve the build root against the real filesystem and log the outcome.
pub fn locate(signals: &EnvSignals) -> PathBuf {
    let root = locate_with(signals, |p| p.is_dir());
    if root.is_dir() {
        logger::log_info(&format!("Serving build output from {}", root.display()));
        log_root_sample(&root);
    } else {
        logger::log_warning(&format!(
            "Build root {} does not exist; static requests will answer 404",
            root.display()
        ));
    }
    root
}

/// Log a short sample of the chosen root's contents.
///
/// Purely observational; listing failures are logged and swallowed.
fn log_root_sample(root: &Path) {
    match std::fs::read_dir(root) {
        Ok(entries) => {
            let names: Vec<String> = entries
                .filter_map(Result::ok)
                .take(8)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            logger::log_info(&format!("Build root contains: {}", names.join(", ")));
        }
        Err(e) => {
            logger::log_warning(&format!("Could not list build root {}: {e}", root.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(mode: RunMode) -> EnvSignals {
        EnvSignals {
            mode,
            cwd: PathBuf::from("/deploy/cwd"),
            exe_dir: Some(PathBuf::from("/deploy/app/bin")),
        }
    }

    #[test]
    fn test_dev_run_has_single_candidate() {
        let list = candidates(&signals(RunMode::Dev));
        assert_eq!(list, vec![PathBuf::from("/deploy/app/bin/../../web/dist")]);
    }

    #[test]
    fn test_packaged_candidates_are_ordered() {
        let list = candidates(&signals(RunMode::Packaged));
        assert_eq!(
            list,
            vec![
                PathBuf::from("/deploy/app/bin/web"),
                PathBuf::from("/deploy/app/bin/../web"),
                PathBuf::from("/deploy/cwd/web"),
            ]
        );
    }

    #[test]
    fn test_existing_candidate_wins_regardless_of_position() {
        let s = signals(RunMode::Packaged);
        for wanted in candidates(&s) {
            let picked = locate_with(&s, |p| p == wanted);
            assert_eq!(picked, wanted);
        }
    }

    #[test]
    fn test_no_candidate_falls_back_to_first() {
        let s = signals(RunMode::Packaged);
        assert_eq!(locate_with(&s, |_| false), candidates(&s)[0]);
    }

    #[test]
    fn test_missing_exe_dir_uses_cwd() {
        let s = EnvSignals {
            mode: RunMode::Dev,
            cwd: PathBuf::from("/deploy/cwd"),
            exe_dir: None,
        };
        assert_eq!(
            candidates(&s),
            vec![PathBuf::from("/deploy/cwd/../../web/dist")]
        );
    }
}
