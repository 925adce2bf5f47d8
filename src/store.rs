//! Record store: the full dataset plus the prefix revealed to the view.
//!
//! The revealed prefix grows in batches when the viewport scrolls close to the
//! bottom of the content. Status edits are applied to the revealed copy only;
//! the dataset itself is never modified.

use crate::core::errors::Result;
use crate::model::{Status, UserId, UserRecord};

/// Records revealed when the view mounts.
pub const INITIAL_REVEAL: usize = 5;
/// Records appended per qualifying scroll event.
pub const REVEAL_BATCH: usize = 5;
/// Distance from the bottom of the content that counts as "at the bottom".
pub const SCROLL_THRESHOLD: usize = 10;
/// Same distance for the terminal table, counted in rows.
pub const ROW_THRESHOLD: usize = 1;

/// How the revealed prefix grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPolicy {
    pub initial: usize,
    pub batch: usize,
    pub threshold: usize,
    /// Threshold applied to table-row geometry.
    pub row_threshold: usize,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            initial: INITIAL_REVEAL,
            batch: REVEAL_BATCH,
            threshold: SCROLL_THRESHOLD,
            row_threshold: ROW_THRESHOLD,
        }
    }
}

/// Viewport geometry at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    pub viewport_height: usize,
    pub scroll_top: usize,
    pub content_height: usize,
}

impl ScrollMetrics {
    /// True when the bottom of the viewport is within `threshold` of the end
    /// of the content.
    pub fn is_near_bottom(&self, threshold: usize) -> bool {
        self.viewport_height + self.scroll_top + threshold >= self.content_height
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    dataset: Vec<UserRecord>,
    revealed: Vec<UserRecord>,
    policy: RevealPolicy,
}

impl RecordStore {
    pub fn new(dataset: Vec<UserRecord>, policy: RevealPolicy) -> Self {
        let initial = policy.initial.min(dataset.len());
        let revealed = dataset[..initial].to_vec();
        Self {
            dataset,
            revealed,
            policy,
        }
    }

    /// Full dataset in source order.
    pub fn dataset(&self) -> &[UserRecord] {
        &self.dataset
    }

    /// Records currently loaded into the view, including status edits.
    pub fn revealed(&self) -> &[UserRecord] {
        &self.revealed
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() >= self.dataset.len()
    }

    /// Append the next batch of unrevealed records. Returns how many were added.
    pub fn reveal_next(&mut self) -> usize {
        let start = self.revealed.len();
        let end = (start + self.policy.batch).min(self.dataset.len());
        if start >= end {
            return 0;
        }
        self.revealed.extend_from_slice(&self.dataset[start..end]);
        tracing::debug!(revealed = self.revealed.len(), total = self.dataset.len(), "revealed more records");
        end - start
    }

    /// Scroll handler: reveals the next batch when the viewport is near the
    /// bottom of the content. Returns how many records were added.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> usize {
        self.reveal_near_bottom(metrics, self.policy.threshold)
    }

    /// Like [`on_scroll`](Self::on_scroll), for geometry measured in table
    /// rows rather than content units.
    pub fn on_row_scroll(&mut self, metrics: ScrollMetrics) -> usize {
        self.reveal_near_bottom(metrics, self.policy.row_threshold)
    }

    fn reveal_near_bottom(&mut self, metrics: ScrollMetrics, threshold: usize) -> usize {
        if metrics.is_near_bottom(threshold) {
            self.reveal_next()
        } else {
            0
        }
    }

    /// Reveal every remaining record.
    pub fn reveal_all(&mut self) -> usize {
        let start = self.revealed.len();
        if start < self.dataset.len() {
            self.revealed.extend_from_slice(&self.dataset[start..]);
        }
        self.revealed.len() - start
    }

    /// Set the status of the revealed record with `id`.
    ///
    /// Returns `false` without touching anything when no revealed record has
    /// that id.
    pub fn update_status(&mut self, id: &UserId, status: Status) -> bool {
        match self.revealed.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                tracing::info!(id = %id, from = %record.about.status, to = %status, "updated user status");
                record.about.status = status;
                true
            }
            None => {
                tracing::debug!(id = %id, "status update ignored, id not revealed");
                false
            }
        }
    }

    /// Like [`RecordStore::update_status`], but validates a raw status label first.
    pub fn update_status_str(&mut self, id: &UserId, status: &str) -> Result<bool> {
        let status = status.parse::<Status>()?;
        Ok(self.update_status(id, status))
    }
}
