//! Types shared by every layer of the dashboard.

pub mod errors;

pub use errors::{DashError, Result};
