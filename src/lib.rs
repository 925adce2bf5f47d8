//! Userdash: a paginated, filterable user directory.
//!
//! The dataset is a static JSON array of user records. Records are revealed
//! in batches as the table is scrolled; the visible page is always derived
//! from the revealed records through filter, sort and paginate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod formatting;
pub mod io;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod store;
pub mod tui;

pub use crate::core::{DashError, Result};
pub use crate::dashboard::Dashboard;
pub use crate::model::{Status, UserId, UserRecord};
pub use crate::pipeline::{
    derive_page, summarize, DateRange, Filters, PageView, Pager, Query, SortConfig, SortDirection,
    SortKey, SummaryMetrics, PAGE_SIZE,
};
pub use crate::store::{RecordStore, RevealPolicy, ScrollMetrics};
