//! Thread-local session context for crash reports.
//!
//! Records what userdash was doing (phase, dataset, current page) so the
//! panic hook can tell the user where it broke. Guards restore the previous
//! context on drop.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

thread_local! {
    static CURRENT_CONTEXT: RefCell<SessionContext> = const { RefCell::new(SessionContext::new()) };
}

/// Snapshot of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub phase: Option<SessionPhase>,
    pub dataset: Option<PathBuf>,
    /// Page shown when the snapshot was taken
    pub page: Option<usize>,
}

impl SessionContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            dataset: None,
            page: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoadingConfig,
    LoadingDataset,
    /// Terminal dashboard event loop
    Browsing,
    /// One-shot `list` or `summary` output
    Reporting,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingConfig => write!(f, "loading_config"),
            Self::LoadingDataset => write!(f, "loading_dataset"),
            Self::Browsing => write!(f, "browsing"),
            Self::Reporting => write!(f, "reporting"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: SessionContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut SessionContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: SessionPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_dataset(path: &Path) -> ContextGuard {
    update(|ctx| ctx.dataset = Some(path.to_path_buf()))
}

/// Record the visible page. No guard: the value tracks navigation.
pub fn set_page(page: usize) {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().page = Some(page));
}

pub fn get_current_context() -> SessionContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
