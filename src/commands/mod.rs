//! CLI command implementations.
//!
//! - **browse**: interactive dashboard
//! - **list**: one page of the filtered, sorted table
//! - **summary**: the summary cards
//! - **init**: write a default configuration file
//!
//! Handlers write to a caller supplied writer so they can be tested without
//! a terminal.

pub mod browse;
pub mod init;
pub mod list;
pub mod summary;

pub use browse::run_browse;
pub use init::init_config;
pub use list::{run_list, ListOptions};
pub use summary::run_summary;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::UserdashConfig;
use crate::io::load_dataset;
use crate::model::UserRecord;
use crate::observability::{set_phase, SessionPhase};

/// Dataset path from the `--data` flag, falling back to `data.path` in the config.
pub fn resolve_data_path(flag: Option<PathBuf>, config: &UserdashConfig) -> Result<PathBuf> {
    flag.or_else(|| config.data.path.clone()).context(
        "No dataset given. Pass --data <PATH> or set [data] path in .userdash.toml",
    )
}

pub fn load_records(path: &Path) -> Result<Vec<UserRecord>> {
    let _phase = set_phase(SessionPhase::LoadingDataset);
    load_dataset(path).with_context(|| format!("Failed to load dataset {}", path.display()))
}
