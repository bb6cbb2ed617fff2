use serde::{Deserialize, Serialize};

use super::params::ItemQuery;
use crate::item::Item;

/// One page of a filtered item listing.
///
/// `total` counts every item that matched the filter, not just the ones on
/// this page. Without pagination, `page` is 1 and `limit` equals `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub items: Vec<Item>,
}

impl QueryPage {
    /// Number of pages at the current `limit`. Zero when `limit` is zero.
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Page a "next" control moves to; stays on the last page.
    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages()).max(1)
    }

    /// Page a "previous" control moves to; stays on page 1.
    pub fn prev_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Filter then paginate `items`, preserving document order.
pub fn run(items: Vec<Item>, query: &ItemQuery) -> QueryPage {
    let filtered: Vec<Item> = match query.search_term() {
        Some(term) => {
            let needle = term.to_lowercase();
            items
                .into_iter()
                .filter(|item| item.name_contains(&needle))
                .collect()
        }
        None => items,
    };
    let total = filtered.len();

    match query.pagination() {
        Some(pagination) => {
            let items = filtered
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.limit())
                .collect();
            QueryPage {
                total,
                page: pagination.page(),
                limit: pagination.limit(),
                items,
            }
        }
        None => QueryPage {
            total,
            page: 1,
            limit: total,
            items: filtered,
        },
    }
}
