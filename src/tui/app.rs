//! Application state for the dashboard TUI.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use super::{
    layout, list_state::ListState, list_view, navigation, prompt::PromptState,
    view_mode::ViewMode,
};
use crate::dashboard::Dashboard;
use crate::model::UserRecord;
use crate::observability;

pub struct DashboardApp {
    dashboard: Dashboard,
    list: ListState,
    view_mode: ViewMode,
    prompt: PromptState,
    /// Name filter to restore when the search prompt is cancelled
    saved_name: Option<String>,
    status_message: Option<String>,
    /// Table body rows visible at the last render
    viewport_rows: usize,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard) -> Self {
        observability::set_page(dashboard.pager().current());
        Self {
            dashboard,
            list: ListState::new(),
            view_mode: ViewMode::List,
            prompt: PromptState::new(),
            saved_name: None,
            status_message: None,
            viewport_rows: 10,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        navigation::handle_key(self, key)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        navigation::handle_mouse(self, mouse)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.viewport_rows = list_view::table_body_rows(frame.area());
        self.list.clamp_to(self.row_count(), self.viewport_rows);

        list_view::render(frame, self);
        match self.view_mode {
            ViewMode::List => {}
            ViewMode::Search | ViewMode::DateRange | ViewMode::PageSelect => {
                list_view::render_prompt(frame, self)
            }
            ViewMode::Help => layout::render_help_overlay(frame),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut PromptState {
        &mut self.prompt
    }

    /// Open a prompt pre-filled with `text`.
    pub fn open_prompt(&mut self, mode: ViewMode, text: &str) {
        self.prompt = PromptState::with_text(text);
        self.view_mode = mode;
    }

    pub fn save_name_filter(&mut self) {
        self.saved_name = self.dashboard.filters().name.clone();
    }

    pub fn take_saved_name(&mut self) -> Option<String> {
        self.saved_name.take()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }

    /// Rows on the current page.
    pub fn row_count(&self) -> usize {
        self.dashboard.view().rows.len()
    }

    pub fn has_selection(&self) -> bool {
        self.selected_record().is_some()
    }

    pub fn selected_record(&self) -> Option<&UserRecord> {
        self.dashboard
            .page_rows()
            .get(self.list.selected_index())
            .copied()
    }

    /// Report a selection move of `delta` rows as a scroll event. Only a
    /// downward move onto the last rows of the page reveals more records.
    pub fn on_scroll(&mut self, delta: isize) {
        let Some(metrics) = self.list.scroll_metrics(delta, self.row_count()) else {
            return;
        };
        let added = self.dashboard.handle_scroll(metrics);
        if added > 0 {
            let store = self.dashboard.store();
            let message = format!(
                "Loaded {} more ({} of {})",
                added,
                store.revealed().len(),
                store.dataset().len()
            );
            self.set_status_message(message);
        }
    }

    /// Selection and scroll go back to the top after the rows change wholesale.
    pub fn rows_replaced(&mut self) {
        self.list.reset();
        observability::set_page(self.dashboard.pager().current());
    }
}
