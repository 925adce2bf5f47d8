//! Keyboard and mouse handling.
//!
//! Pure action determination lives in `list_actions`; this module is the
//! imperative shell that applies actions to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::list_actions::{cycle_status_filter, determine_list_action, ListAction, ListActionContext};
use super::{app::DashboardApp, view_mode::ViewMode};
use crate::pipeline::{DateRange, SortKey};

/// Handle keyboard input and return true if the app should quit.
pub fn handle_key(app: &mut DashboardApp, key: KeyEvent) -> Result<bool> {
    app.clear_status_message();

    match app.view_mode() {
        ViewMode::List => handle_list_key(app, key),
        ViewMode::Search => handle_search_key(app, key),
        ViewMode::DateRange => handle_date_range_key(app, key),
        ViewMode::PageSelect => handle_page_select_key(app, key),
        ViewMode::Help => {
            // Any key closes help
            app.set_view_mode(ViewMode::List);
            Ok(false)
        }
    }
}

/// Mouse wheel over the dashboard is a scroll event.
pub fn handle_mouse(app: &mut DashboardApp, mouse: MouseEvent) {
    if app.view_mode() != ViewMode::List {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => move_selection(app, 1),
        MouseEventKind::ScrollUp => move_selection(app, -1),
        _ => {}
    }
}

fn handle_list_key(app: &mut DashboardApp, key: KeyEvent) -> Result<bool> {
    let pager = app.dashboard().pager();
    let ctx = ListActionContext {
        has_selection: app.has_selection(),
        can_go_back: pager.can_go_back(),
        can_go_forward: pager.can_go_forward(),
        total_pages: pager.total_pages(),
    };

    let Some(action) = determine_list_action(key, ctx) else {
        return Ok(false);
    };

    execute_list_action(app, action)
}

fn execute_list_action(app: &mut DashboardApp, action: ListAction) -> Result<bool> {
    match action {
        ListAction::Quit => return Ok(true),

        ListAction::MoveUp => move_selection(app, -1),
        ListAction::MoveDown => move_selection(app, 1),
        ListAction::JumpToTop => {
            let count = app.row_count() as isize;
            move_selection(app, -count);
        }
        ListAction::JumpToBottom => {
            let count = app.row_count() as isize;
            move_selection(app, count);
        }

        ListAction::EnterSearch => {
            app.save_name_filter();
            let current = app.dashboard().filters().name.clone().unwrap_or_default();
            app.open_prompt(ViewMode::Search, &current);
        }

        ListAction::CycleStatusFilter => {
            let next = cycle_status_filter(app.dashboard().filters().status);
            app.dashboard_mut().set_status_filter(next);
            app.rows_replaced();
        }

        ListAction::EnterDateRange => {
            let current = app
                .dashboard()
                .filters()
                .date_range
                .map(|range| range.display_name())
                .unwrap_or_default();
            app.open_prompt(ViewMode::DateRange, &current);
        }

        ListAction::SortColumn(idx) => {
            if let Some(key) = SortKey::columns().into_iter().nth(idx) {
                app.dashboard_mut().toggle_sort(key);
                app.rows_replaced();
            }
        }

        ListAction::ClearFilters => {
            app.dashboard_mut().clear_filters();
            app.rows_replaced();
        }

        ListAction::SetStatus(status) => {
            if let Some(id) = app.selected_record().map(|record| record.id.clone()) {
                if app.dashboard_mut().update_status(&id, status) {
                    app.set_status_message(format!("User {} is now {}", id, status));
                }
                let (count, viewport) = (app.row_count(), app.viewport_rows());
                app.list_mut().clamp_to(count, viewport);
            }
        }

        ListAction::FirstPage => change_page(app, |d| d.first_page()),
        ListAction::PrevPage => change_page(app, |d| d.prev_page()),
        ListAction::NextPage => change_page(app, |d| d.next_page()),
        ListAction::LastPage => change_page(app, |d| d.last_page()),
        ListAction::SelectPage => {
            let current = app.dashboard().pager().current().to_string();
            app.open_prompt(ViewMode::PageSelect, &current);
        }

        ListAction::ShowHelp => app.set_view_mode(ViewMode::Help),
    }

    Ok(false)
}

fn change_page(app: &mut DashboardApp, navigate: impl FnOnce(&mut crate::dashboard::Dashboard)) {
    let before = app.dashboard().pager().current();
    navigate(app.dashboard_mut());
    let after = app.dashboard().pager().current();
    if before != after {
        tracing::debug!(from = before, to = after, "page changed");
        app.rows_replaced();
    }
}

/// Move the selection and report the scroll to the record store.
fn move_selection(app: &mut DashboardApp, delta: isize) {
    let count = app.row_count();
    let viewport = app.viewport_rows();
    app.list_mut().move_selection(delta, count, viewport);
    app.on_scroll(delta);
}

/// Shared line editing. Returns false when the key was not an edit.
fn edit_prompt(app: &mut DashboardApp, key: KeyEvent) -> bool {
    let prompt = app.prompt_mut();
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => prompt.insert_char(c),
        KeyCode::Backspace => prompt.delete_char(),
        KeyCode::Delete => prompt.delete_char_forward(),
        KeyCode::Left => prompt.move_cursor_left(),
        KeyCode::Right => prompt.move_cursor_right(),
        KeyCode::Home => prompt.move_cursor_home(),
        KeyCode::End => prompt.move_cursor_end(),
        _ => return false,
    }
    true
}

/// Name search applies on every edit, like a live search box.
fn handle_search_key(app: &mut DashboardApp, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            let saved = app.take_saved_name().unwrap_or_default();
            app.dashboard_mut().set_name_filter(saved);
            app.rows_replaced();
            app.set_view_mode(ViewMode::List);
        }
        KeyCode::Enter => {
            app.take_saved_name();
            app.set_view_mode(ViewMode::List);
        }
        _ => {
            if edit_prompt(app, key) {
                let name = app.prompt().input().to_string();
                app.dashboard_mut().set_name_filter(name);
                app.rows_replaced();
            }
        }
    }
    Ok(false)
}

fn handle_date_range_key(app: &mut DashboardApp, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.set_view_mode(ViewMode::List),
        KeyCode::Enter => {
            match DateRange::parse(app.prompt().input()) {
                Ok(range) => {
                    app.dashboard_mut().set_date_range(range);
                    app.rows_replaced();
                }
                Err(e) => app.set_status_message(e.to_string()),
            }
            app.set_view_mode(ViewMode::List);
        }
        _ => {
            edit_prompt(app, key);
        }
    }
    Ok(false)
}

fn handle_page_select_key(app: &mut DashboardApp, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.set_view_mode(ViewMode::List),
        KeyCode::Enter => {
            let input = app.prompt().input().trim().to_string();
            match input.parse::<usize>() {
                Ok(page) => match app.dashboard_mut().select_page(page) {
                    Ok(()) => app.rows_replaced(),
                    Err(e) => app.set_status_message(e.to_string()),
                },
                Err(_) => app.set_status_message(format!("Not a page number: '{}'", input)),
            }
            app.set_view_mode(ViewMode::List);
        }
        KeyCode::Char(c) if c.is_ascii_digit() => app.prompt_mut().insert_char(c),
        _ => {
            if !matches!(key.code, KeyCode::Char(_)) {
                edit_prompt(app, key);
            }
        }
    }
    Ok(false)
}
