//! # Context Initialization
//!
//! The composition root for every client. [`initialize`] loads configuration,
//! resolves the catalog file, opens the store exactly once and hands back a
//! [`ReelContext`] that owns it. Nothing in the library holds a global store.
//!
//! ## Catalog File Resolution
//!
//! 1. `data_override` (the CLI's `--data`), if given.
//! 2. Otherwise the `database_file` setting (default `movies.json`).
//!
//! Relative paths resolve against `cwd`.
//!
//! ## Config Search Paths
//!
//! Global directory first, then `cwd`, merged so the local `reel.toml` wins.
//! The global directory is the OS config dir from `directories`, unless
//! `REEL_CONFIG_DIR` is set (primarily for testing, to isolate global state).

use crate::api::CatalogApi;
use crate::config::ReelConfig;
use crate::error::{ReelError, Result};
use crate::store::fs::FileCatalog;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ReelContext {
    pub api: CatalogApi<FileCatalog>,
    pub config: ReelConfig,
    pub paths: ReelPaths,
}

#[derive(Debug, Clone)]
pub struct ReelPaths {
    pub data_file: PathBuf,
    /// Directories searched for `reel.toml`, lowest priority first
    pub config_dirs: Vec<PathBuf>,
}

/// Global config directory: `REEL_CONFIG_DIR`, else the OS config dir.
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("REEL_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "reel", "reel").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Config directories in merge order (global first, local last).
pub fn config_dirs(cwd: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(global) = global_config_dir() {
        dirs.push(global);
    }
    dirs.push(cwd.to_path_buf());
    dirs
}

/// Load the layered configuration. Falls back to defaults on any error.
pub fn load_config(config_dirs: &[PathBuf]) -> ReelConfig {
    try_load_config(config_dirs).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load configuration, using defaults");
        ReelConfig::default()
    })
}

/// Load the layered configuration, reporting a broken `reel.toml`.
pub fn try_load_config(config_dirs: &[PathBuf]) -> Result<ReelConfig> {
    let search_paths = config_dirs
        .iter()
        .cloned()
        .map(SearchPath::Path)
        .collect::<Vec<_>>();

    Clapfig::builder()
        .app_name("reel")
        .file_name("reel.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .map_err(|e| ReelError::Config(e.to_string()))
}

/// Resolve the catalog file from an explicit override or the config setting.
pub fn resolve_data_file(cwd: &Path, data_override: Option<PathBuf>, config: &ReelConfig) -> PathBuf {
    let path = data_override.unwrap_or_else(|| PathBuf::from(&config.database_file));
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Initialize the reel context: config, catalog path and the opened store.
///
/// # Arguments
///
/// * `cwd` - The working directory relative paths resolve against
/// * `data_override` - Optional explicit catalog file, bypassing `database_file`
///
/// # Examples
///
/// ```ignore
/// // Catalog from config (default ./movies.json)
/// let ctx = initialize(&cwd, None);
///
/// // Explicit catalog file
/// let ctx = initialize(&cwd, Some(PathBuf::from("/srv/catalog/movies.json")));
/// ```
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> ReelContext {
    let config_dirs = config_dirs(cwd);
    let config = load_config(&config_dirs);
    open_context(cwd, data_override, config, config_dirs)
}

/// Open the catalog for an already loaded configuration.
///
/// Used by clients that need the configuration before the store exists,
/// e.g. to set up logging first.
pub fn open_context(
    cwd: &Path,
    data_override: Option<PathBuf>,
    config: ReelConfig,
    config_dirs: Vec<PathBuf>,
) -> ReelContext {
    let data_file = resolve_data_file(cwd, data_override, &config);

    tracing::debug!(path = %data_file.display(), "opening catalog");
    let store = FileCatalog::open_path(data_file.clone());
    let api = CatalogApi::new(store, data_file.clone());

    ReelContext {
        api,
        config,
        paths: ReelPaths {
            data_file,
            config_dirs,
        },
    }
}
