//! Pager actions: sort, go-to-page, set-page-size.
//!
//! Every action maps an incoming pager to an outgoing pager plus messages.
//! Sort and go-to-page accept anything and never produce messages; only
//! set-page-size validates, falling back to the configured default page size.

use crate::models::{
    messages::Messages,
    pager::{Pager, SortColumn, SortDirection, Sorter},
};

pub const PAGE_SIZE_CHANGED: &str = "Page size changed.";
pub const PAGE_SIZE_NOT_POSITIVE: &str =
    "Negative or zero page size is not allowed. Defaults used.";

#[derive(Clone)]
pub struct PagerService {
    default_page_size: i32,
}

impl PagerService {
    pub fn new(default_page_size: i32) -> Self {
        Self { default_page_size }
    }

    /// Replace the sorter; everything else carries over.
    pub fn sort(
        &self,
        pager: Pager,
        column: SortColumn,
        direction: SortDirection,
    ) -> (Pager, Messages) {
        let outgoing = Pager {
            sorter: Sorter { column, direction },
            ..pager
        };
        (outgoing, Messages::new())
    }

    /// Replace the page number. The value is not clamped against
    /// `pages_count`; an out-of-range page reads back empty.
    pub fn go_to_page(&self, pager: Pager, page_number: i32) -> (Pager, Messages) {
        let outgoing = Pager {
            page_number,
            ..pager
        };
        (outgoing, Messages::new())
    }

    /// Set the page size, falling back to the configured default when the
    /// requested value is not positive.
    pub fn set_page_size(&self, pager: Pager, requested: i32) -> (Pager, Messages) {
        let mut messages = Messages::new();

        let page_size = if requested <= 0 {
            messages.add_error(PAGE_SIZE_NOT_POSITIVE);
            self.default_page_size
        } else {
            messages.add_info(PAGE_SIZE_CHANGED);
            requested
        };

        let outgoing = Pager { page_size, ..pager };
        (outgoing, messages)
    }
}
