//! Pager state and page-window arithmetic.
//!
//! A [`Pager`] is request-scoped: it arrives with the request, gets its
//! `pages_count` refreshed from the current row count, and is returned to the
//! client to be echoed back on the next action. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sortable catalog columns.
///
/// Case sensitivity is a static property of the column, not a per-request
/// option: the title sort ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Title,
}

impl SortColumn {
    /// Database column this enumerant maps to.
    pub fn column_name(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
        }
    }

    /// Whether string comparison for this column ignores case.
    pub fn ignore_case(&self) -> bool {
        match self {
            SortColumn::Title => true,
        }
    }
}

impl Default for SortColumn {
    fn default() -> Self {
        SortColumn::Title
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

/// Active sort order, carried forward unchanged unless a sort action
/// replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sorter {
    #[serde(default)]
    pub column: SortColumn,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Offset/size range of rows to fetch for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub size: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pager {
    /// 1-based page number. Deliberately not clamped against `pages_count`:
    /// a page beyond range yields an empty result page.
    pub page_number: i32,
    pub page_size: i32,
    /// Derived from the total row count at read time.
    #[serde(default)]
    pub pages_count: i32,
    #[serde(default)]
    pub sorter: Sorter,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
            pages_count: 0,
            sorter: Sorter::default(),
        }
    }
}

impl Pager {
    /// Compute the row window for this pager.
    ///
    /// A non-positive page size yields a zero-row window by policy, never an
    /// error. A negative page number clamps the offset to 0.
    pub fn window(&self) -> PageWindow {
        if self.page_size <= 0 {
            return PageWindow { offset: 0, size: 0 };
        }

        let offset = (i64::from(self.page_number) - 1) * i64::from(self.page_size);
        PageWindow {
            offset: offset.max(0),
            size: i64::from(self.page_size),
        }
    }

    /// Return this pager with `pages_count` recomputed from `total_rows`.
    pub fn with_pages_count(mut self, total_rows: i64) -> Self {
        self.pages_count = if self.page_size <= 0 {
            0
        } else {
            let size = i64::from(self.page_size);
            let pages = (total_rows + size - 1) / size;
            pages.try_into().unwrap_or(i32::MAX)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page_number: i32, page_size: i32) -> Pager {
        Pager {
            page_number,
            page_size,
            ..Pager::default()
        }
    }

    #[test]
    fn pages_count_rounds_up() {
        assert_eq!(pager(1, 13).with_pages_count(50).pages_count, 4);
        assert_eq!(pager(1, 10).with_pages_count(50).pages_count, 5);
        assert_eq!(pager(1, 10).with_pages_count(0).pages_count, 0);
        assert_eq!(pager(1, 10).with_pages_count(1).pages_count, 1);
    }

    #[test]
    fn non_positive_page_size_yields_empty_window() {
        for size in [0, -1, -100] {
            let p = pager(7, size);
            assert_eq!(p.window(), PageWindow { offset: 0, size: 0 });
            assert_eq!(p.with_pages_count(1000).pages_count, 0);
        }
    }

    #[test]
    fn negative_page_number_clamps_offset_to_zero() {
        assert_eq!(pager(-3, 10).window().offset, 0);
        assert_eq!(pager(0, 10).window().offset, 0);
        assert_eq!(pager(1, 10).window().offset, 0);
        assert_eq!(pager(i32::MIN, 10).window().offset, 0);
    }

    #[test]
    fn window_offset_is_zero_based() {
        let w = pager(3, 13).window();
        assert_eq!(w.offset, 26);
        assert_eq!(w.size, 13);
    }

    #[test]
    fn pages_count_saturates_on_huge_row_counts() {
        let total = (i64::from(i32::MAX) + 1) * 10;
        assert_eq!(pager(1, 10).with_pages_count(total).pages_count, i32::MAX);
    }

    #[test]
    fn page_number_is_not_clamped_against_pages_count() {
        let p = pager(99, 10).with_pages_count(50);
        assert_eq!(p.page_number, 99);
        assert_eq!(p.window().offset, 980);
    }

    #[test]
    fn title_sort_ignores_case() {
        assert!(SortColumn::Title.ignore_case());
        assert_eq!(SortColumn::Title.column_name(), "title");
    }
}
