//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "app";
const ORGANIZATION: &str = "estate";
const APPLICATION: &str = "estate";

/// Name of the log file written by the current run.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for persistent data (the settings database).
///
/// - Linux: `$XDG_DATA_HOME/estate` or `~/.local/share/estate`
/// - macOS: `~/Library/Application Support/app.estate.estate`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/estate` or `~/.cache/estate`
/// - macOS: `~/Library/Caches/app.estate.estate`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn settings_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("settings.db"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamped name and prune old
/// archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", timestamp)));
    }

    prune_archived_logs(&cache, MAX_OLD_LOGS);
}

/// Delete the oldest archived logs in `dir` until at most `keep` remain.
fn prune_archived_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if logs.len() <= keep {
        return;
    }

    // Oldest first.
    logs.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    for entry in logs.iter().take(logs.len() - keep) {
        let _ = fs::remove_file(entry.path());
    }
}
