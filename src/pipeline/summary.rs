//! Summary cards computed over the whole dataset.

use serde::Serialize;

use crate::model::{Status, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_users: usize,
    pub active_users: usize,
    pub blocked_users: usize,
    /// Share of users that are neither active nor blocked, in percent
    pub inactive_percent: f64,
    /// Share of blocked users, in percent
    pub blocked_percent: f64,
}

/// Aggregate the dataset. An empty dataset yields zero percentages.
pub fn summarize(records: &[UserRecord]) -> SummaryMetrics {
    let total_users = records.len();
    let count = |status: Status| records.iter().filter(|r| r.about.status == status).count();
    let active_users = count(Status::Active);
    let blocked_users = count(Status::Blocked);
    let inactive_users = total_users.saturating_sub(active_users + blocked_users);

    SummaryMetrics {
        total_users,
        active_users,
        blocked_users,
        inactive_percent: percent(inactive_users, total_users),
        blocked_percent: percent(blocked_users, total_users),
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
