use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::UserdashConfig;
use crate::core::errors::{DashError, Result};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".userdash.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<UserdashConfig> {
    let config = toml::from_str::<UserdashConfig>(contents)
        .map_err(|e| DashError::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if config.reveal.batch == 0 {
        return Err(DashError::Configuration(
            "reveal.batch must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, every failure is an error.
pub fn load_config_from(path: &Path) -> Result<UserdashConfig> {
    let contents = read_config_file(path)
        .map_err(|e| DashError::file_system("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(rebase_on_parent(config, path))
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<UserdashConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(rebase_on_parent(config, config_path))
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

fn rebase_on_parent(config: UserdashConfig, config_path: &Path) -> UserdashConfig {
    match config_path.parent() {
        Some(dir) => config.rebase(dir),
        None => config,
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while searching
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries.
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

/// Per-user config file, e.g. `~/.config/userdash/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("userdash").join("config.toml"))
}

/// Discover configuration from `start` upwards, then the user config dir.
pub fn discover_config(start: PathBuf) -> UserdashConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            UserdashConfig::default()
        })
}

pub fn load_config() -> UserdashConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            UserdashConfig::default()
        }
    }
}
