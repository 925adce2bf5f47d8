use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::dashboard::Dashboard;
use crate::formatting::{formatter_for, page_footer, users_table, FormattingConfig};
use crate::model::UserRecord;
use crate::observability::{set_phase, SessionPhase};
use crate::pipeline::{Filters, SortConfig};
use crate::store::RevealPolicy;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub filters: Filters,
    pub sort: SortConfig,
    pub page: usize,
    /// Reveal the whole dataset before deriving the page
    pub reveal_all: bool,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    page: usize,
    total_pages: usize,
    matched: usize,
    revealed: usize,
    total: usize,
    users: Vec<&'a UserRecord>,
}

/// Mount a dashboard, apply the options and print the resulting page.
pub fn run_list(
    records: Vec<UserRecord>,
    policy: RevealPolicy,
    options: &ListOptions,
    out: &mut impl Write,
) -> Result<()> {
    let _phase = set_phase(SessionPhase::Reporting);
    let mut dashboard = Dashboard::mount(records, policy);
    if options.reveal_all {
        dashboard.reveal_all();
    }
    dashboard.set_status_filter(options.filters.status);
    dashboard.set_name_filter(options.filters.name.clone().unwrap_or_default());
    dashboard.set_date_range(options.filters.date_range);
    dashboard.set_sort(options.sort.clone());
    if options.page != 1 {
        dashboard.select_page(options.page)?;
    }

    let view = dashboard.view();
    let store = dashboard.store();
    tracing::info!(
        page = view.page,
        matched = view.matched,
        revealed = store.revealed().len(),
        "listing users"
    );

    match options.format {
        OutputFormat::Json => {
            let output = ListOutput {
                page: view.page,
                total_pages: view.total_pages,
                matched: view.matched,
                revealed: store.revealed().len(),
                total: store.dataset().len(),
                users: dashboard.page_rows(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let fmt = formatter_for(options.formatting);
            let rows = dashboard.page_rows();
            if rows.is_empty() {
                writeln!(out, "{}", fmt.warning("No users match the current filters"))?;
            } else {
                writeln!(out, "{}", users_table(&rows, dashboard.sort(), &options.formatting))?;
            }
            let active: Vec<String> = options
                .filters
                .active()
                .iter()
                .map(|filter| filter.display_name())
                .collect();
            if !active.is_empty() {
                writeln!(out, "{}", fmt.dim(&format!("Filters: {}", active.join(", "))))?;
            }
            writeln!(
                out,
                "{}",
                fmt.dim(&page_footer(view, store.revealed().len(), store.dataset().len()))
            )?;
        }
    }
    Ok(())
}
