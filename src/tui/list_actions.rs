//! Pure action determination for list view keyboard handling.
//!
//! `determine_list_action` maps a key plus a small context to an action;
//! `navigation` executes it. Disabled controls are modelled as guards here,
//! so a key for an unavailable control yields no action at all.

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Quit,

    /// Move selection up one row (a scroll event).
    MoveUp,
    /// Move selection down one row (a scroll event).
    MoveDown,
    JumpToTop,
    JumpToBottom,

    /// Open the name search prompt.
    EnterSearch,
    /// Step the status filter to the next option.
    CycleStatusFilter,
    /// Open the date range prompt.
    EnterDateRange,
    /// Sort by the table column at this index.
    SortColumn(usize),
    ClearFilters,

    /// Set the status of the selected row.
    SetStatus(Status),

    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// Open the page number prompt.
    SelectPage,

    ShowHelp,
}

/// State needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListActionContext {
    pub has_selection: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub total_pages: usize,
}

impl ListActionContext {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            has_selection: false,
            can_go_back: false,
            can_go_forward: false,
            total_pages: 0,
        }
    }

    #[cfg(test)]
    pub fn middle_page() -> Self {
        Self {
            has_selection: true,
            can_go_back: true,
            can_go_forward: true,
            total_pages: 3,
        }
    }
}

/// Which action a key triggers in list view, if any.
pub fn determine_list_action(key: KeyEvent, ctx: ListActionContext) -> Option<ListAction> {
    match key.code {
        KeyCode::Char('q') => Some(ListAction::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(ListAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(ListAction::MoveDown),
        KeyCode::Char('g') => Some(ListAction::JumpToTop),
        KeyCode::Char('G') => Some(ListAction::JumpToBottom),

        KeyCode::Char('/') => Some(ListAction::EnterSearch),
        KeyCode::Char('s') => Some(ListAction::CycleStatusFilter),
        KeyCode::Char('d') => Some(ListAction::EnterDateRange),
        KeyCode::Char(c @ '1'..='5') => Some(ListAction::SortColumn(c as usize - '1' as usize)),
        KeyCode::Char('x') => Some(ListAction::ClearFilters),

        // Moderation - requires a selected row
        KeyCode::Char('b') if ctx.has_selection => Some(ListAction::SetStatus(Status::Blocked)),
        KeyCode::Char('a') if ctx.has_selection => Some(ListAction::SetStatus(Status::Active)),
        KeyCode::Char('i') if ctx.has_selection => Some(ListAction::SetStatus(Status::Invited)),

        // Pagination - guarded by the disabled state of each control
        KeyCode::Home if ctx.can_go_back => Some(ListAction::FirstPage),
        KeyCode::Left | KeyCode::PageUp if ctx.can_go_back => Some(ListAction::PrevPage),
        KeyCode::Right | KeyCode::PageDown if ctx.can_go_forward => Some(ListAction::NextPage),
        KeyCode::End if ctx.can_go_forward => Some(ListAction::LastPage),
        KeyCode::Char('p') if ctx.total_pages > 0 => Some(ListAction::SelectPage),

        KeyCode::Char('?') => Some(ListAction::ShowHelp),

        _ => None,
    }
}

/// Status filter options in control order: all, then each status.
pub fn cycle_status_filter(current: Option<Status>) -> Option<Status> {
    match current {
        None => Some(Status::Active),
        Some(Status::Active) => Some(Status::Invited),
        Some(Status::Invited) => Some(Status::Blocked),
        Some(Status::Blocked) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_works_with_any_context() {
        for ctx in [ListActionContext::empty(), ListActionContext::middle_page()] {
            assert_eq!(
                determine_list_action(key(KeyCode::Char('q')), ctx),
                Some(ListAction::Quit)
            );
        }
    }

    #[test]
    fn scroll_keys() {
        let ctx = ListActionContext::empty();
        assert_eq!(determine_list_action(key(KeyCode::Char('j')), ctx), Some(ListAction::MoveDown));
        assert_eq!(determine_list_action(key(KeyCode::Down), ctx), Some(ListAction::MoveDown));
        assert_eq!(determine_list_action(key(KeyCode::Char('k')), ctx), Some(ListAction::MoveUp));
    }

    #[test]
    fn number_keys_pick_sort_columns() {
        let ctx = ListActionContext::empty();
        assert_eq!(
            determine_list_action(key(KeyCode::Char('1')), ctx),
            Some(ListAction::SortColumn(0))
        );
        assert_eq!(
            determine_list_action(key(KeyCode::Char('5')), ctx),
            Some(ListAction::SortColumn(4))
        );
        assert_eq!(determine_list_action(key(KeyCode::Char('6')), ctx), None);
    }

    #[test]
    fn moderation_requires_selection() {
        let empty = ListActionContext::empty();
        assert_eq!(determine_list_action(key(KeyCode::Char('b')), empty), None);

        let ctx = ListActionContext::middle_page();
        assert_eq!(
            determine_list_action(key(KeyCode::Char('b')), ctx),
            Some(ListAction::SetStatus(Status::Blocked))
        );
        assert_eq!(
            determine_list_action(key(KeyCode::Char('a')), ctx),
            Some(ListAction::SetStatus(Status::Active))
        );
        assert_eq!(
            determine_list_action(key(KeyCode::Char('i')), ctx),
            Some(ListAction::SetStatus(Status::Invited))
        );
    }

    #[test]
    fn disabled_page_controls_do_nothing() {
        let first_page = ListActionContext {
            has_selection: true,
            can_go_back: false,
            can_go_forward: true,
            total_pages: 2,
        };
        assert_eq!(determine_list_action(key(KeyCode::Left), first_page), None);
        assert_eq!(determine_list_action(key(KeyCode::Home), first_page), None);
        assert_eq!(
            determine_list_action(key(KeyCode::Right), first_page),
            Some(ListAction::NextPage)
        );
        assert_eq!(
            determine_list_action(key(KeyCode::End), first_page),
            Some(ListAction::LastPage)
        );
    }

    #[test]
    fn page_select_needs_pages() {
        assert_eq!(
            determine_list_action(key(KeyCode::Char('p')), ListActionContext::empty()),
            None
        );
        assert_eq!(
            determine_list_action(key(KeyCode::Char('p')), ListActionContext::middle_page()),
            Some(ListAction::SelectPage)
        );
    }

    #[test]
    fn unmapped_keys() {
        let ctx = ListActionContext::middle_page();
        assert_eq!(determine_list_action(key(KeyCode::Char('z')), ctx), None);
        assert_eq!(determine_list_action(key(KeyCode::Tab), ctx), None);
    }

    #[test]
    fn status_filter_cycles_through_all_options() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = cycle_status_filter(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(Status::Active),
                Some(Status::Invited),
                Some(Status::Blocked),
                None
            ]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn page_actions_respect_guards(
            c in proptest::sample::select(vec![
                KeyCode::Home, KeyCode::Left, KeyCode::Right, KeyCode::End,
                KeyCode::PageUp, KeyCode::PageDown,
            ]),
            has_selection: bool,
            can_go_back: bool,
            can_go_forward: bool,
        ) {
            let ctx = ListActionContext { has_selection, can_go_back, can_go_forward, total_pages: 3 };
            match determine_list_action(KeyEvent::new(c, KeyModifiers::NONE), ctx) {
                Some(ListAction::FirstPage) | Some(ListAction::PrevPage) => prop_assert!(can_go_back),
                Some(ListAction::NextPage) | Some(ListAction::LastPage) => prop_assert!(can_go_forward),
                None => {}
                Some(other) => prop_assert!(false, "unexpected action {:?}", other),
            }
        }
    }
}
