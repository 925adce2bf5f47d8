//! Interactive terminal dashboard.
//!
//! # Examples
//!
//! ```rust,ignore
//! use userdash::dashboard::Dashboard;
//! use userdash::tui::DashboardExplorer;
//!
//! let dashboard = Dashboard::mount(records, RevealPolicy::default());
//! let mut explorer = DashboardExplorer::new(dashboard)?;
//! explorer.run()?;
//! ```

pub mod app;
pub mod layout;
pub mod list_actions;
pub mod list_state;
pub mod list_view;
pub mod navigation;
pub mod prompt;
pub mod scroll;
pub mod theme;
pub mod view_mode;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::core::DashError;
use crate::dashboard::Dashboard;
use crate::observability::{exit_tui_mode, set_tui_active};
use app::DashboardApp;
use scroll::ScrollListener;

/// Owns the terminal for the lifetime of the dashboard view.
pub struct DashboardExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: DashboardApp,
    listener: ScrollListener<io::Stdout>,
    active: bool,
}

impl DashboardExplorer {
    /// Mount: take over the screen and attach the scroll listener.
    pub fn new(dashboard: Dashboard) -> Result<Self> {
        set_tui_active(true);
        // a half-initialized terminal is restored before the error surfaces
        Self::enter(dashboard).inspect_err(|_| exit_tui_mode())
    }

    fn enter(dashboard: Dashboard) -> Result<Self> {
        enable_raw_mode().map_err(DashError::Terminal)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(DashError::Terminal)?;
        let listener = ScrollListener::attach(io::stdout()).map_err(DashError::Terminal)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(DashError::Terminal)?;

        Ok(Self {
            terminal,
            app: DashboardApp::new(dashboard),
            listener,
            active: true,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        if self.app.handle_key(key)? {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    pub fn app(&self) -> &DashboardApp {
        &self.app
    }

    /// Teardown: detach the listener and give the terminal back.
    fn cleanup(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.listener.detach()?;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        set_tui_active(false);
        Ok(())
    }
}

impl Drop for DashboardExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
