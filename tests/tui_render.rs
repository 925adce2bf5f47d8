//! Render the dashboard into an in-memory terminal and inspect the screen.

mod common;

use common::{mixed_users, users};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use userdash::model::Status;
use userdash::tui::app::DashboardApp;
use userdash::tui::view_mode::ViewMode;
use userdash::{Dashboard, RevealPolicy};

fn app_with(records: Vec<userdash::UserRecord>) -> DashboardApp {
    DashboardApp::new(Dashboard::mount(records, RevealPolicy::default()))
}

fn screen(app: &mut DashboardApp, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut DashboardApp, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

#[test]
fn test_initial_screen() {
    let mut app = app_with(mixed_users(14, 4, 2));
    let text = screen(&mut app, 110, 30);

    assert!(text.contains("Total Users"));
    assert!(text.contains("Blocked Users"));
    assert!(text.contains("10.0%"));
    assert!(text.contains("1 Name"));
    assert!(text.contains("2 Email"));
    assert!(text.contains("Member 001"));
    assert!(text.contains("Member 005"));
    assert!(!text.contains("Member 006"));
    assert!(text.contains("Page 1 of 2"));
}

#[test]
fn test_empty_dataset_message() {
    let mut app = app_with(Vec::new());
    let text = screen(&mut app, 110, 30);
    assert!(text.contains("No users loaded"));
    assert!(text.contains("0.0%"));
}

#[test]
fn test_no_match_message() {
    let mut app = app_with(users(6));
    app.dashboard_mut().set_status_filter(Some(Status::Blocked));
    let text = screen(&mut app, 110, 30);
    assert!(text.contains("No users match the current filters"));
}

#[test]
fn test_compact_layout_hides_secondary_columns() {
    let mut app = app_with(users(3));
    let text = screen(&mut app, 60, 30);
    assert!(text.contains("1 Name"));
    assert!(!text.contains("2 Email"));
    assert!(!text.contains("4 Invited By"));
}

#[test]
fn test_scrolling_to_the_bottom_reveals_more_rows() {
    let mut app = app_with(users(12));
    screen(&mut app, 110, 30);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    let text = screen(&mut app, 110, 30);
    assert_eq!(app.dashboard().store().revealed().len(), 5);
    assert!(!text.contains("User 06"));

    press(&mut app, KeyCode::Char('j'));
    let text = screen(&mut app, 110, 30);
    assert_eq!(app.dashboard().store().revealed().len(), 10);
    assert!(text.contains("User 10"));
    assert!(text.contains("Loaded 5 more"));
}

#[test]
fn test_scrolling_up_at_the_top_loads_nothing() {
    let mut app = app_with(users(30));
    screen(&mut app, 110, 30);
    press(&mut app, KeyCode::Char('G'));
    screen(&mut app, 110, 30);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.dashboard().store().revealed().len(), 10);

    for _ in 0..3 {
        press(&mut app, KeyCode::Char('k'));
    }
    let text = screen(&mut app, 110, 30);
    assert_eq!(app.dashboard().store().revealed().len(), 10);
    assert!(!text.contains("Loaded"));
    assert!(!text.contains("User 11"));
}

#[test]
fn test_sort_header_shows_direction() {
    let mut app = app_with(users(4));
    press(&mut app, KeyCode::Char('1'));
    let ascending = screen(&mut app, 110, 30);
    press(&mut app, KeyCode::Char('1'));
    let descending = screen(&mut app, 110, 30);
    assert_ne!(ascending, descending);
    assert!(descending.find("User 04").unwrap() < descending.find("User 01").unwrap());
}

#[test]
fn test_help_overlay() {
    let mut app = app_with(users(4));
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.view_mode(), ViewMode::Help);
    let text = screen(&mut app, 110, 30);
    assert!(text.contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view_mode(), ViewMode::List);
}

#[test]
fn test_search_prompt_is_drawn() {
    let mut app = app_with(users(4));
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('0'));
    press(&mut app, KeyCode::Char('2'));
    let text = screen(&mut app, 110, 30);
    assert!(text.contains("Search by name"));
    assert_eq!(app.dashboard().view().matched, 1);
}
