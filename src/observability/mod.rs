//! Logging setup and crash reports.
//!
//! ```ignore
//! use userdash::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(verbosity);
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, set_dataset, set_page, set_phase, ContextGuard, SessionContext,
    SessionPhase,
};
pub use panic_hook::{exit_tui_mode, install_panic_hook};
pub use self::tracing::{init_tracing, is_tui_active, set_log_file, set_tui_active, LOG_ENV};
