//! Centralized path definitions for leetsync
//!
//! ## Lookup Order
//!
//! ```text
//! --config PATH                 # explicit, must exist
//! ./leetsync.toml               # project config (committed with the solutions)
//! ~/.leetsync/config.toml       # user-level defaults
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const CONFIG_FILE: &str = "leetsync.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".leetsync";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project `leetsync.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get the global leetsync directory.
///
/// Returns `~/.leetsync/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.leetsync/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
