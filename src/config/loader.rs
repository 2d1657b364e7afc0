use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::core::{KclusterConfig, MAX_PRECISION};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".kcluster.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<KclusterConfig, String> {
    let config = toml::from_str::<KclusterConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(clustering) = &config.clustering {
        if clustering.clusters == Some(0) {
            return Err("clustering.clusters must be at least 1".to_string());
        }
        if clustering.max_iterations == Some(0) {
            return Err("clustering.max_iterations must be at least 1".to_string());
        }
    }

    if let Some(precision) = config.output.as_ref().and_then(|o| o.precision) {
        if precision > MAX_PRECISION {
            return Err(format!(
                "output.precision must be at most {}, got {}",
                MAX_PRECISION, precision
            ));
        }
    }

    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Try loading config from a specific path.
///
/// Returns `None` only when no file exists there. A file that exists but
/// cannot be read or parsed ends the search with defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<KclusterConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(
                "Failed to read config file {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            return Some(KclusterConfig::default());
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} ({}). Using defaults.", e, config_path.display());
            Some(KclusterConfig::default())
        }
    }
}

/// Search `start` and its ancestors for `.kcluster.toml`. The nearest file
/// wins, even when it is invalid.
pub fn load_config_from(start: PathBuf) -> KclusterConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            KclusterConfig::default()
        })
}

/// Discover configuration from the current directory upwards.
pub fn load_config() -> KclusterConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            KclusterConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// invalid file is an error.
pub fn load_config_file(path: &Path) -> Result<KclusterConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
}
