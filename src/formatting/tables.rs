//! comfy-table renderings of a page of users and of the summary cards.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, ContentArrangement, Table};

use super::FormattingConfig;
use crate::model::{Status, UserRecord};
use crate::pipeline::{PageView, SortConfig, SummaryMetrics};

const HEADERS: [&str; 5] = ["NAME", "EMAIL", "START DATE", "INVITED BY", "STATUS"];

fn base_table(config: &FormattingConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if config.ascii { ASCII_FULL } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic);
    if config.use_color() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Active => Color::Green,
        Status::Invited => Color::Yellow,
        Status::Blocked => Color::Red,
    }
}

/// Percentages are shown with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Header row marks the sorted column with its direction arrow.
fn header_cells(sort: &SortConfig) -> Vec<Cell> {
    let sorted = sort.key.as_ref().and_then(|key| {
        crate::pipeline::SortKey::columns()
            .iter()
            .position(|column| column == key)
    });
    HEADERS
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let text = if Some(idx) == sorted {
                format!("{} {}", title, sort.direction.arrow())
            } else {
                title.to_string()
            };
            Cell::new(text).fg(Color::White)
        })
        .collect()
}

pub fn users_table(rows: &[&UserRecord], sort: &SortConfig, config: &FormattingConfig) -> Table {
    let mut table = base_table(config);
    table.set_header(header_cells(sort));

    for record in rows {
        let status = record.about.status;
        table.add_row(vec![
            Cell::new(&record.about.name),
            Cell::new(&record.about.email).fg(Color::Cyan),
            Cell::new(&record.details.date),
            Cell::new(&record.details.invited_by).fg(Color::DarkGrey),
            Cell::new(status.as_str()).fg(status_color(status)),
        ]);
    }
    table
}

pub fn summary_table(metrics: &SummaryMetrics, config: &FormattingConfig) -> Table {
    let mut table = base_table(config);
    table.set_header(vec![
        Cell::new("TOTAL USERS").fg(Color::White),
        Cell::new("ACTIVE USERS").fg(Color::White),
        Cell::new("INACTIVE USERS").fg(Color::White),
        Cell::new("BLOCKED USERS").fg(Color::White),
    ]);
    table.add_row(vec![
        Cell::new(metrics.total_users),
        Cell::new(metrics.active_users).fg(Color::Green),
        Cell::new(format_percent(metrics.inactive_percent)).fg(Color::Yellow),
        Cell::new(format_percent(metrics.blocked_percent)).fg(Color::Red),
    ]);
    table
}

/// "Page 2 of 3 · 7 matching · 15 of 25 loaded"
pub fn page_footer(view: &PageView, revealed: usize, total: usize) -> String {
    format!(
        "Page {} of {} · {} matching · {} of {} loaded",
        view.page,
        view.total_pages.max(1),
        view.matched,
        revealed,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{About, Details, UserId};
    use crate::pipeline::{SortDirection, SortKey};

    fn record(name: &str, status: Status) -> UserRecord {
        UserRecord {
            id: UserId::from(name),
            about: About {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                status,
            },
            details: Details {
                date: "2023-05-04".to_string(),
                invited_by: "Grace".to_string(),
            },
        }
    }

    #[test]
    fn test_users_table_plain() {
        let ada = record("Ada", Status::Blocked);
        let table = users_table(&[&ada], &SortConfig::default(), &FormattingConfig::plain());
        let out = table.to_string();
        assert!(out.contains("ada@example.com"));
        assert!(out.contains("BLOCKED"));
        assert!(!out.contains('\u{1b}'));
        assert!(!out.contains('│'));
    }

    #[test]
    fn test_sorted_column_has_arrow() {
        let sort = SortConfig::new(SortKey::StartDate, SortDirection::Descending);
        let table = users_table(&[], &sort, &FormattingConfig::plain());
        assert!(table.to_string().contains("START DATE ↓"));
    }

    #[test]
    fn test_summary_percentages() {
        let metrics = SummaryMetrics {
            total_users: 3,
            active_users: 1,
            blocked_users: 1,
            inactive_percent: 100.0 / 3.0,
            blocked_percent: 100.0 / 3.0,
        };
        let out = summary_table(&metrics, &FormattingConfig::plain()).to_string();
        assert!(out.contains("33.3%"));
    }

    #[test]
    fn test_page_footer_never_shows_zero_pages() {
        let view = PageView {
            rows: vec![],
            matched: 0,
            page: 1,
            total_pages: 0,
        };
        assert_eq!(page_footer(&view, 0, 0), "Page 1 of 1 · 0 matching · 0 of 0 loaded");
    }
}
