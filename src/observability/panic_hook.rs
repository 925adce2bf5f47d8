//! Panic hook that restores the terminal before printing a crash report.
//!
//! The dashboard runs in raw mode on the alternate screen. A panic there
//! would leave the report invisible and the shell unusable, so the hook
//! leaves TUI mode first.

use super::context::{get_current_context, SessionContext};
use super::tracing::set_tui_active;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    let context = get_current_context();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context);
    print_backtrace_section();
}

/// Leave raw mode and the alternate screen. Errors are ignored, we're already panicking.
pub fn exit_tui_mode() {
    set_tui_active(false);

    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    );
}

fn print_header() {
    let platform = std::env::consts::OS;
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                    USERDASH CRASH REPORT                     ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║  Version: {:<51} ║", VERSION);
    eprintln!("║  Platform: {:<50} ║", platform);
    eprintln!("║  Time: {:<54} ║", timestamp);
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    let message = extract_panic_message(info);
    eprintln!("║  PANIC: {:<53} ║", truncate(&message, 53));

    if let Some(location) = info.location() {
        let loc_str = format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        eprintln!("║  Location: {:<50} ║", truncate(&loc_str, 50));
    }
}

fn print_context_section(context: &SessionContext) {
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    match &context.phase {
        Some(phase) => eprintln!("║  Phase: {:<53} ║", phase.to_string()),
        None => eprintln!("║  Phase: {:<53} ║", "(startup)"),
    }
    if let Some(dataset) = &context.dataset {
        let dataset = dataset.display().to_string();
        eprintln!("║  Dataset: {:<51} ║", truncate(&dataset, 51));
    }
    if let Some(page) = context.page {
        eprintln!("║  Page: {:<54} ║", page);
    }
}

fn print_backtrace_section() {
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("║  STACK TRACE:                                                ║");
        eprintln!("╚══════════════════════════════════════════════════════════════╝");
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("║  Run with RUST_BACKTRACE=1 for stack trace                   ║");
        eprintln!("╚══════════════════════════════════════════════════════════════╝");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Truncate to at most `max_len` characters, marking the cut with `...`.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate("/home/someone/datasets/very/deep/users.json", 20);
        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ünïcödé names", 6), "ünï...");
    }
}
