//! Sort stage: column keys, direction and the toggle behaviour of the headers.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::model::UserRecord;

/// Sort key as selected from a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// `about.name`
    Name,
    /// `about.email`
    Email,
    /// `details.date`, compared as a calendar date
    StartDate,
    /// `details.invitedBy`
    InvitedBy,
    /// `about.status`, compared by its label
    Status,
    /// `details.date`, compared as text
    Date,
    /// A key that resolves on neither half of the record
    Other(String),
}

impl SortKey {
    /// Resolve a header key. Unknown keys are kept and compare equal.
    pub fn parse(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "email" => SortKey::Email,
            "startDate" => SortKey::StartDate,
            "invitedBy" => SortKey::InvitedBy,
            "status" => SortKey::Status,
            "date" => SortKey::Date,
            other => SortKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::StartDate => "startDate",
            SortKey::InvitedBy => "invitedBy",
            SortKey::Status => "status",
            SortKey::Date => "date",
            SortKey::Other(key) => key,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::StartDate => "Start Date",
            SortKey::InvitedBy => "Invited By",
            SortKey::Status => "Status",
            SortKey::Date => "Date",
            SortKey::Other(key) => key,
        }
    }

    /// Sortable table columns, in display order
    pub fn columns() -> [SortKey; 5] {
        [
            SortKey::Name,
            SortKey::Email,
            SortKey::StartDate,
            SortKey::InvitedBy,
            SortKey::Status,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Current sort selection. No key means source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header click: the current key flips from ascending to descending,
    /// anything else sorts ascending by `key`.
    pub fn toggle(&mut self, key: SortKey) {
        let direction = if self.key.as_ref() == Some(&key)
            && self.direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
        self.direction = direction;
    }

    pub fn display_name(&self) -> String {
        match &self.key {
            Some(key) => format!("{} {}", key.display_name(), self.direction.arrow()),
            None => "None".to_string(),
        }
    }
}

/// Value a record resolves to for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortValue<'a> {
    Date(Option<NaiveDate>),
    Text(&'a str),
    Missing,
}

fn resolve<'a>(record: &'a UserRecord, key: &SortKey) -> SortValue<'a> {
    match key {
        SortKey::StartDate => SortValue::Date(record.start_date()),
        SortKey::InvitedBy => SortValue::Text(&record.details.invited_by),
        SortKey::Email => SortValue::Text(&record.about.email),
        SortKey::Name => SortValue::Text(&record.about.name),
        SortKey::Status => SortValue::Text(record.about.status.as_str()),
        SortKey::Date => SortValue::Text(&record.details.date),
        SortKey::Other(_) => SortValue::Missing,
    }
}

fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        // Unparseable dates sort before every real date
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(&b),
        (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Compare two records under a sort configuration.
pub fn compare_records(a: &UserRecord, b: &UserRecord, config: &SortConfig) -> Ordering {
    let Some(key) = &config.key else {
        return Ordering::Equal;
    };
    let ordering = compare_values(resolve(a, key), resolve(b, key));
    match config.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable sort of record indices. Without a key the order is left untouched.
pub fn sort_indices(indices: &mut [usize], records: &[UserRecord], config: &SortConfig) {
    if config.key.is_none() {
        return;
    }
    indices.sort_by(|&a, &b| match (records.get(a), records.get(b)) {
        (Some(ra), Some(rb)) => compare_records(ra, rb, config),
        _ => Ordering::Equal,
    });
}
