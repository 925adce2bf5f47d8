// Shared fixtures for userdash integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use userdash::model::{About, Details, Status, UserId, UserRecord};

/// Build one record. `day` is folded into a valid date in 2023.
pub fn user(id: u64, name: &str, status: Status, day: u32) -> UserRecord {
    let month = (day / 28) % 12 + 1;
    let dom = day % 28 + 1;
    UserRecord {
        id: UserId::from(id),
        about: About {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            status,
        },
        details: Details {
            date: format!("2023-{:02}-{:02}", month, dom),
            invited_by: if id % 2 == 0 { "Ops" } else { "Sales" }.to_string(),
        },
    }
}

/// `n` active users named "User 01".."User n", one day apart.
pub fn users(n: u64) -> Vec<UserRecord> {
    (1..=n)
        .map(|i| user(i, &format!("User {:02}", i), Status::Active, i as u32))
        .collect()
}

/// Dataset with the given number of users per status, interleaved.
pub fn mixed_users(active: usize, invited: usize, blocked: usize) -> Vec<UserRecord> {
    let mut statuses = Vec::new();
    statuses.extend(std::iter::repeat(Status::Active).take(active));
    statuses.extend(std::iter::repeat(Status::Invited).take(invited));
    statuses.extend(std::iter::repeat(Status::Blocked).take(blocked));
    statuses
        .into_iter()
        .enumerate()
        .map(|(i, status)| {
            let id = i as u64 + 1;
            user(id, &format!("Member {:03}", id), status, (id * 7) as u32)
        })
        .collect()
}

pub struct DatasetDir {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl DatasetDir {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Write `records` as `users.json` in a fresh temp dir.
pub fn write_dataset(records: &[UserRecord]) -> DatasetDir {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("users.json");
    let json = serde_json::to_string_pretty(records).expect("serialize dataset");
    std::fs::write(&path, json).expect("write dataset");
    DatasetDir { dir, path }
}
