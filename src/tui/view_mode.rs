//! View modes of the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Table of users with filters and pagination.
    List,
    /// Name search input, applied as you type.
    Search,
    /// Start date range input, `YYYY-MM-DD..YYYY-MM-DD`.
    DateRange,
    /// Page number input.
    PageSelect,
    /// Help overlay showing keyboard shortcuts.
    Help,
}

impl ViewMode {
    /// Modes that read a line of text.
    pub fn is_prompt(self) -> bool {
        matches!(self, Self::Search | Self::DateRange | Self::PageSelect)
    }
}
