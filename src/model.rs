//! User records as they appear in the dashboard dataset.
//!
//! Records are read-only apart from `about.status`, which the moderation
//! actions rewrite in memory.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::DashError;

/// Unique record identifier.
///
/// Datasets carry either numeric or string ids; both are normalized to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct UserId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for UserId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => UserId(n.to_string()),
            RawId::Text(s) => UserId(s),
        }
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Invited,
    Blocked,
}

impl Status {
    /// Wire label, also used for ordering when sorting by status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Invited => "INVITED",
            Status::Blocked => "BLOCKED",
        }
    }

    /// Label used by the status filter control.
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Invited => "Inactive",
            Status::Blocked => "Blocked",
        }
    }

    pub fn all() -> &'static [Status] {
        &[Status::Active, Status::Invited, Status::Blocked]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Status::Active),
            "INVITED" => Ok(Status::Invited),
            "BLOCKED" => Ok(Status::Blocked),
            _ => Err(DashError::InvalidStatus(s.to_string())),
        }
    }
}

/// Profile half of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub email: String,
    pub status: Status,
}

/// Enrollment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub date: String,
    pub invited_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub about: About,
    pub details: Details,
}

impl UserRecord {
    /// Calendar date parsed from `details.date`, if it is a recognizable date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.details.date)
    }
}

/// Parse an ISO-like date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Timestamps keep their own calendar date.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parse a user-supplied date bound, reporting invalid input.
pub fn parse_date_arg(raw: &str) -> Result<NaiveDate, DashError> {
    parse_record_date(raw).ok_or_else(|| DashError::InvalidDate(raw.to_string()))
}
