//! Filter stage: status, name search and start-date range.

use chrono::NaiveDate;

use crate::core::errors::{DashError, Result};
use crate::model::{parse_date_arg, Status, UserRecord};

/// Inclusive bounds over a record's start date. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check a possibly unparseable date against the bounds.
    ///
    /// Missing dates only pass when both bounds are open.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match date {
            Some(date) => {
                self.start.is_none_or(|start| date >= start)
                    && self.end.is_none_or(|end| date <= end)
            }
            None => false,
        }
    }

    /// Parse `start..end`, where either side may be empty. Blank input is `None`.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        let (start, end) = input
            .split_once("..")
            .ok_or_else(|| DashError::InvalidDate(input.to_string()))?;
        let bound = |side: &str| -> Result<Option<NaiveDate>> {
            let side = side.trim();
            if side.is_empty() {
                Ok(None)
            } else {
                parse_date_arg(side).map(Some)
            }
        };
        Ok(Some(Self::new(bound(start)?, bound(end)?)))
    }

    pub fn display_name(&self) -> String {
        let side = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
        format!(
            "{}..{}",
            side(self.start).unwrap_or_default(),
            side(self.end).unwrap_or_default()
        )
    }
}

/// A single active predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Exact status match
    Status(Status),
    /// Case-insensitive substring of the name
    Name(String),
    /// Start date within bounds
    DateRange(DateRange),
}

impl Filter {
    /// Check if a record matches this filter
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            Filter::Status(status) => record.about.status == *status,
            Filter::Name(needle) => record
                .about
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Filter::DateRange(range) => range.contains(record.start_date()),
        }
    }

    /// Get display name for filter
    pub fn display_name(&self) -> String {
        match self {
            Filter::Status(status) => format!("Status: {}", status.display_name()),
            Filter::Name(needle) => format!("Name: \"{}\"", needle),
            Filter::DateRange(range) => format!("Date: {}", range.display_name()),
        }
    }
}

/// The filter controls of the dashboard. Unset slots are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub status: Option<Status>,
    pub name: Option<String>,
    pub date_range: Option<DateRange>,
}

impl Filters {
    /// Predicates that currently constrain the result.
    pub fn active(&self) -> Vec<Filter> {
        let mut active = Vec::with_capacity(3);
        if let Some(status) = self.status {
            active.push(Filter::Status(status));
        }
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            active.push(Filter::Name(name.clone()));
        }
        if let Some(range) = self.date_range {
            active.push(Filter::DateRange(range));
        }
        active
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        self.active().iter().all(|filter| filter.matches(record))
    }
}

/// Indices of the records that satisfy every active filter, in source order.
pub fn filter_indices(records: &[UserRecord], filters: &Filters) -> Vec<usize> {
    let active = filters.active();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| active.iter().all(|filter| filter.matches(record)))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{About, Details, UserId};

    fn record(id: u64, name: &str, status: Status, date: &str) -> UserRecord {
        UserRecord {
            id: UserId::from(id),
            about: About {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                status,
            },
            details: Details {
                date: date.to_string(),
                invited_by: "Admin".to_string(),
            },
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            record(1, "Alice Smith", Status::Active, "2023-01-10"),
            record(2, "Bob Jones", Status::Blocked, "2023-02-15"),
            record(3, "Carol Smithers", Status::Invited, "2023-03-20"),
            record(4, "Dan Brown", Status::Blocked, "garbage"),
        ]
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(filter_indices(&sample(), &Filters::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_status_filter() {
        let filters = Filters {
            status: Some(Status::Blocked),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &filters), vec![1, 3]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let filters = Filters {
            name: Some("SMITH".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &filters), vec![0, 2]);
    }

    #[test]
    fn test_empty_name_is_noop() {
        let filters = Filters {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_empty());
        assert_eq!(filter_indices(&sample(), &filters).len(), 4);
    }

    #[test]
    fn test_date_range_inclusive() {
        let filters = Filters {
            date_range: Some(DateRange::new(Some(ymd(2023, 1, 10)), Some(ymd(2023, 2, 15)))),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &filters), vec![0, 1]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let from = Filters {
            date_range: Some(DateRange::new(Some(ymd(2023, 2, 1)), None)),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &from), vec![1, 2]);

        let until = Filters {
            date_range: Some(DateRange::new(None, Some(ymd(2023, 2, 1)))),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &until), vec![0]);
    }

    #[test]
    fn test_unbounded_range_keeps_unparseable_dates() {
        let filters = Filters {
            date_range: Some(DateRange::default()),
            ..Default::default()
        };
        assert_eq!(filter_indices(&sample(), &filters).len(), 4);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filters = Filters {
            status: Some(Status::Blocked),
            name: Some("bob".to_string()),
            date_range: Some(DateRange::new(Some(ymd(2023, 1, 1)), None)),
        };
        assert_eq!(filter_indices(&sample(), &filters), vec![1]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Filter::Status(Status::Active).display_name(), "Status: Active");
        assert_eq!(Filter::Name("ann".into()).display_name(), "Name: \"ann\"");
        let range = DateRange::new(Some(ymd(2023, 1, 1)), None);
        assert_eq!(Filter::DateRange(range).display_name(), "Date: 2023-01-01..");
    }

    #[test]
    fn test_parse_date_range() {
        assert_eq!(DateRange::parse("  ").unwrap(), None);
        assert_eq!(
            DateRange::parse("2023-01-01..2023-02-01").unwrap(),
            Some(DateRange::new(Some(ymd(2023, 1, 1)), Some(ymd(2023, 2, 1))))
        );
        assert_eq!(
            DateRange::parse("..2023-02-01").unwrap(),
            Some(DateRange::new(None, Some(ymd(2023, 2, 1))))
        );
        assert!(matches!(
            DateRange::parse("2023-01-01"),
            Err(DashError::InvalidDate(_))
        ));
        assert!(DateRange::parse("2023-01-01..soon").is_err());
    }
}
