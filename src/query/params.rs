//! Raw list parameters and their parsed form.

use serde::{Deserialize, Serialize};

/// Query-string parameters of a list request, as received.
///
/// All fields are kept as raw strings: the browser client sends
/// `page=&limit=` when it does not paginate, and the parsing rules live in
/// [`ItemQuery::from_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// A validated page request. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    /// Returns `None` unless both `page` and `limit` are at least 1.
    pub fn new(page: usize, limit: usize) -> Option<Self> {
        (page >= 1 && limit >= 1).then_some(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the first item on this page. Saturates instead of overflowing.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// A parsed list query: optional name filter and optional pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    search: Option<String>,
    pagination: Option<Pagination>,
}

impl ItemQuery {
    /// Query matching every item, unpaginated.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse raw parameters.
    ///
    /// Pagination applies only when both `page` and `limit` parse as
    /// integers of at least 1. Empty, non-numeric, zero, negative or
    /// overflowing values behave as if both were omitted.
    pub fn from_params(params: &ListParams) -> Self {
        let pagination = match (
            params.page.as_deref().and_then(parse_positive),
            params.limit.as_deref().and_then(parse_positive),
        ) {
            (Some(page), Some(limit)) => Pagination::new(page, limit),
            _ => None,
        };

        Self {
            search: params.q.clone().filter(|q| !q.is_empty()),
            pagination,
        }
    }

    /// Restrict to items whose name contains `term`, ignoring case.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Request one page. Ignored unless both values are at least 1.
    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.pagination = Pagination::new(page, limit);
        self
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n >= 1)
}
