use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::{RevealPolicy, INITIAL_REVEAL, REVEAL_BATCH, ROW_THRESHOLD, SCROLL_THRESHOLD};

/// Root configuration structure for userdash
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserdashConfig {
    /// Dataset location
    #[serde(default)]
    pub data: DataConfig,

    /// Incremental reveal tuning
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Log output while the dashboard owns the terminal
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl UserdashConfig {
    pub fn reveal_policy(&self) -> RevealPolicy {
        RevealPolicy {
            initial: self.reveal.initial,
            batch: self.reveal.batch,
            threshold: self.reveal.threshold,
            row_threshold: self.reveal.row_threshold,
        }
    }

    /// Resolve relative paths against the directory the config was read from.
    pub fn rebase(mut self, base: &std::path::Path) -> Self {
        let join = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        self.data.path = self.data.path.map(join);
        self.logging.file = self.logging.file.map(join);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DataConfig {
    /// JSON dataset used when `--data` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealConfig {
    #[serde(default = "default_initial")]
    pub initial: usize,
    #[serde(default = "default_batch")]
    pub batch: usize,
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Rows from the end of the table that trigger a reveal in the dashboard
    #[serde(default = "default_row_threshold")]
    pub row_threshold: usize,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            batch: default_batch(),
            threshold: default_threshold(),
            row_threshold: default_row_threshold(),
        }
    }
}

fn default_initial() -> usize {
    INITIAL_REVEAL
}

fn default_batch() -> usize {
    REVEAL_BATCH
}

fn default_threshold() -> usize {
    SCROLL_THRESHOLD
}

fn default_row_threshold() -> usize {
    ROW_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log file used while the terminal dashboard is running.
    /// Without one, logs are dropped for the duration of the session.
    #[serde(default)]
    pub file: Option<PathBuf>,
}
