use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sprint").map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }

    /// Used when no home directory can be resolved
    pub fn fallback_config_path() -> PathBuf {
        PathBuf::from("sprint_config.json")
    }
}
