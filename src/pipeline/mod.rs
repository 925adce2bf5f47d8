//! Pure pipeline from revealed records to the rows on screen.
//!
//! filter → sort → paginate. Every stage works on indices into the revealed
//! records so the derivation never clones a record.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod summary;

pub use filter::{filter_indices, DateRange, Filter, Filters};
pub use paginate::{page_range, paginate, total_pages, Pager, PAGE_SIZE};
pub use sort::{compare_records, sort_indices, SortConfig, SortDirection, SortKey};
pub use summary::{summarize, SummaryMetrics};

use crate::model::UserRecord;

/// Filter and sort criteria selected in the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filters: Filters,
    pub sort: SortConfig,
}

/// Result of running the pipeline for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Indices into the revealed records, in display order
    pub rows: Vec<usize>,
    /// Records that passed the filters, across all pages
    pub matched: usize,
    /// 1-based page number the rows belong to
    pub page: usize,
    /// Page count offered by the navigation controls
    pub total_pages: usize,
}

/// Filter then sort. Returns indices into `records`.
pub fn derive_indices(records: &[UserRecord], query: &Query) -> Vec<usize> {
    let mut indices = filter_indices(records, &query.filters);
    sort_indices(&mut indices, records, &query.sort);
    indices
}

/// Run the whole pipeline for `pager`'s current page.
pub fn derive_page(records: &[UserRecord], query: &Query, pager: &Pager) -> PageView {
    let ordered = derive_indices(records, query);
    PageView {
        rows: paginate(&ordered, pager.current()).to_vec(),
        matched: ordered.len(),
        page: pager.current(),
        total_pages: pager.total_pages(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{About, Details, Status, UserId};

    fn records(n: usize) -> Vec<UserRecord> {
        (0..n)
            .map(|i| UserRecord {
                id: UserId::from(i as u64),
                about: About {
                    name: format!("user {:02}", n - i),
                    email: format!("u{i}@example.com"),
                    status: if i % 3 == 0 { Status::Blocked } else { Status::Active },
                },
                details: Details {
                    date: "2023-06-01".to_string(),
                    invited_by: "root".to_string(),
                },
            })
            .collect()
    }

    #[test]
    fn test_default_query_is_source_order() {
        let recs = records(4);
        assert_eq!(derive_indices(&recs, &Query::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_then_sort() {
        let recs = records(7);
        let query = Query {
            filters: Filters {
                status: Some(Status::Blocked),
                ..Default::default()
            },
            sort: SortConfig::new(SortKey::Name, SortDirection::Ascending),
        };
        // blocked: 0 ("user 07"), 3 ("user 04"), 6 ("user 01")
        assert_eq!(derive_indices(&recs, &query), vec![6, 3, 0]);
    }

    #[test]
    fn test_page_counts_come_from_dataset() {
        let recs = records(25);
        let query = Query {
            filters: Filters {
                status: Some(Status::Blocked),
                ..Default::default()
            },
            ..Default::default()
        };
        let pager = Pager::for_dataset(40);
        let view = derive_page(&recs, &query, &pager);
        assert_eq!(view.matched, 9);
        assert_eq!(view.rows.len(), 9);
        assert_eq!(view.total_pages, 4);
    }

    #[test]
    fn test_second_page() {
        let recs = records(25);
        let mut pager = Pager::for_dataset(25);
        pager.next();
        let view = derive_page(&recs, &Query::default(), &pager);
        assert_eq!(view.page, 2);
        assert_eq!(view.rows, (10..20).collect::<Vec<_>>());
    }
}
