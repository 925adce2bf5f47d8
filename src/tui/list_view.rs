//! Dashboard rendering: summary cards, filter bar, user table and pagination.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::DashboardApp;
use super::layout::{dashboard_areas, LayoutMode};
use super::list_state::calculate_visible_range;
use super::theme::Theme;
use super::view_mode::ViewMode;
use crate::dashboard::Dashboard;
use crate::formatting::format_percent;
use crate::model::UserRecord;
use crate::pipeline::SortKey;

/// Table body rows that fit in a terminal of this size.
pub fn table_body_rows(area: Rect) -> usize {
    let [_, _, table, _] = dashboard_areas(area);
    // borders and header row
    (table.height as usize).saturating_sub(3).max(1)
}

pub fn render(frame: &mut Frame, app: &DashboardApp) {
    let theme = Theme::default();
    let [cards, filters, table, footer] = dashboard_areas(frame.area());

    render_summary_cards(frame, app.dashboard(), cards, &theme);
    render_filter_bar(frame, app.dashboard(), filters, &theme);
    render_table(frame, app, table, &theme);
    render_footer(frame, app, footer, &theme);
}

fn render_summary_cards(frame: &mut Frame, dashboard: &Dashboard, area: Rect, theme: &Theme) {
    let summary = dashboard.summary();
    let cards = [
        ("Total Users", summary.total_users.to_string(), theme.primary),
        ("Active Users", summary.active_users.to_string(), theme.success),
        ("Inactive Users", format_percent(summary.inactive_percent), theme.warning),
        ("Blocked Users", format_percent(summary.blocked_percent), theme.danger),
    ];
    let slots: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);

    for ((title, value, color), slot) in cards.into_iter().zip(slots) {
        let card = Paragraph::new(Span::styled(value, Style::default().fg(color)))
            .block(Block::bordered().title(title).border_style(theme.muted_style()));
        frame.render_widget(card, slot);
    }
}

fn render_filter_bar(frame: &mut Frame, dashboard: &Dashboard, area: Rect, theme: &Theme) {
    let filters = dashboard.filters();
    let status = filters
        .status
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| "All".to_string());
    let name = filters
        .name
        .as_ref()
        .map(|n| format!("\"{}\"", n))
        .unwrap_or_else(|| "-".to_string());
    let date = filters
        .date_range
        .map(|r| r.display_name())
        .unwrap_or_else(|| "any".to_string());

    let mut spans = Vec::new();
    for (label, value) in [
        ("Status", status),
        ("Name", name),
        ("Date", date),
        ("Sort", dashboard.sort().display_name()),
    ] {
        spans.push(Span::styled(format!("{}: ", label), theme.muted_style()));
        spans.push(Span::raw(value));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn header_row(dashboard: &Dashboard, mode: LayoutMode, theme: &Theme) -> Row<'static> {
    let sort = dashboard.sort();
    let cells = SortKey::columns()
        .into_iter()
        .enumerate()
        .filter(|(_, key)| mode.shows_all_columns() || !matches!(key, SortKey::Email | SortKey::InvitedBy))
        .map(|(idx, key)| {
            let arrow = if sort.key.as_ref() == Some(&key) {
                format!(" {}", sort.direction.arrow())
            } else {
                String::new()
            };
            Cell::from(format!("{} {}{}", idx + 1, key.display_name(), arrow))
        })
        .collect::<Vec<_>>();
    Row::new(cells).style(theme.header_style())
}

fn record_row(record: &UserRecord, mode: LayoutMode, selected: bool, theme: &Theme) -> Row<'static> {
    let status = record.about.status;
    let mut cells = vec![Cell::from(record.about.name.clone())];
    if mode.shows_all_columns() {
        cells.push(Cell::from(record.about.email.clone()));
    }
    cells.push(Cell::from(record.details.date.clone()));
    if mode.shows_all_columns() {
        cells.push(Cell::from(Span::styled(
            record.details.invited_by.clone(),
            theme.muted_style(),
        )));
    }
    cells.push(Cell::from(Span::styled(status.as_str(), theme.status_style(status))));

    let row = Row::new(cells);
    if selected {
        row.style(theme.selected_style())
    } else {
        row
    }
}

fn column_widths(mode: LayoutMode) -> Vec<Constraint> {
    match mode {
        LayoutMode::Full => vec![
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Percentage(18),
            Constraint::Length(10),
        ],
        LayoutMode::Compact => vec![
            Constraint::Min(10),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    }
}

fn render_table(frame: &mut Frame, app: &DashboardApp, area: Rect, theme: &Theme) {
    let dashboard = app.dashboard();
    let mode = LayoutMode::from_terminal_width(area.width);
    let rows = dashboard.page_rows();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Users ")
        .border_style(theme.muted_style());

    if rows.is_empty() {
        let text = if dashboard.store().revealed().is_empty() {
            "No users loaded"
        } else {
            "No users match the current filters"
        };
        let empty = Paragraph::new(Line::from(Span::styled(text, theme.muted_style()))).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = app.list();
    let visible = calculate_visible_range(list.scroll_offset(), app.viewport_rows(), rows.len());
    let body: Vec<Row> = rows[visible.clone()]
        .iter()
        .enumerate()
        .map(|(offset, record)| {
            let selected = visible.start + offset == list.selected_index();
            record_row(record, mode, selected, theme)
        })
        .collect();

    let table = Table::new(body, column_widths(mode))
        .header(header_row(dashboard, mode, theme))
        .block(block);
    frame.render_widget(table, area);
}

fn control<'a>(label: &'a str, enabled: bool, theme: &Theme) -> Span<'a> {
    Span::styled(label, theme.control_style(enabled))
}

fn render_footer(frame: &mut Frame, app: &DashboardApp, area: Rect, theme: &Theme) {
    let dashboard = app.dashboard();
    let pager = dashboard.pager();
    let view = dashboard.view();
    let store = dashboard.store();

    let controls = Line::from(vec![
        control("« First", pager.can_go_back(), theme),
        Span::raw("  "),
        control("‹ Prev", pager.can_go_back(), theme),
        Span::raw("  "),
        Span::styled(
            format!("Page {} of {}", pager.current(), pager.total_pages().max(1)),
            theme.header_style(),
        ),
        Span::raw("  "),
        control("Next ›", pager.can_go_forward(), theme),
        Span::raw("  "),
        control("Last »", pager.can_go_forward(), theme),
        Span::styled(
            format!(
                "    {} matching · {} of {} loaded",
                view.matched,
                store.revealed().len(),
                store.dataset().len()
            ),
            theme.muted_style(),
        ),
    ]);

    let second = match app.status_message() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.warning),
        )),
        None => Line::from(vec![
            Span::styled("j/k", theme.key_style()),
            Span::raw(":Scroll  "),
            Span::styled("/", theme.key_style()),
            Span::raw(":Search  "),
            Span::styled("s", theme.key_style()),
            Span::raw(":Status  "),
            Span::styled("d", theme.key_style()),
            Span::raw(":Dates  "),
            Span::styled("1-5", theme.key_style()),
            Span::raw(":Sort  "),
            Span::styled("b/a/i", theme.key_style()),
            Span::raw(":Set status  "),
            Span::styled("?", theme.key_style()),
            Span::raw(":Help  "),
            Span::styled("q", theme.key_style()),
            Span::raw(":Quit"),
        ]),
    };

    let footer = Paragraph::new(vec![controls, second]).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn prompt_title(mode: ViewMode, total_pages: usize) -> String {
    match mode {
        ViewMode::Search => "Search by name (Enter to keep, Esc to cancel)".to_string(),
        ViewMode::DateRange => "Start date YYYY-MM-DD..YYYY-MM-DD (empty clears)".to_string(),
        ViewMode::PageSelect => format!("Go to page (1-{})", total_pages),
        ViewMode::List | ViewMode::Help => String::new(),
    }
}

/// Input box over the dashboard for the prompt modes.
pub fn render_prompt(frame: &mut Frame, app: &DashboardApp) {
    let theme = Theme::default();
    let area = frame.area();
    let prompt_area = Rect {
        x: area.width / 6,
        y: area.y + 2,
        width: area.width * 2 / 3,
        height: 3.min(area.height),
    };
    let title = prompt_title(app.view_mode(), app.dashboard().pager().total_pages());
    let prompt = app.prompt();

    let widget = Paragraph::new(prompt.input().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.header_style()),
    );
    frame.render_widget(Clear, prompt_area);
    frame.render_widget(widget, prompt_area);

    let before_cursor: String = prompt.input().chars().take(prompt.cursor()).collect();
    let x = prompt_area.x + 1 + before_cursor.width() as u16;
    let max_x = prompt_area.right().saturating_sub(2);
    frame.set_cursor_position((x.min(max_x), prompt_area.y + 1));
}
