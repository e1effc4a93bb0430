//! Pagination primitives shared by every listing.
//!
//! Stores return full insertion-ordered listings; slicing into pages is
//! pure and happens here. When a listing is filtered, the filter runs
//! first and the page is cut from the filtered set, so `total` counts
//! what matched, not what is stored.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Default page size when the caller doesn't pick one.
pub const DEFAULT_LIMIT: usize = 20;

/// Validated page request: 1-based page, positive limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if page or limit is zero
    pub fn new(page: usize, limit: usize) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::new(
                ErrorCode::OutOfRange,
                "Page numbers start at 1",
            )
            .with_detail("field", "page"));
        }
        if limit == 0 {
            return Err(DomainError::new(
                ErrorCode::OutOfRange,
                "Limit must be at least 1",
            )
            .with_detail("field", "limit"));
        }
        Ok(Self { page, limit })
    }

    /// First page with the default limit.
    pub fn first() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Builds a request from optional query parameters.
    ///
    /// Missing values fall back to page 1 and the default limit;
    /// explicit zeros are still rejected.
    pub fn from_params(page: Option<usize>, limit: Option<usize>) -> Result<Self, DomainError> {
        Self::new(page.unwrap_or(1), limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of a listing, with the counts callers need to page on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, in listing order.
    pub items: Vec<T>,

    /// 1-based page number this slice came from.
    pub page: usize,

    /// Requested page size (the last page may hold fewer).
    pub limit: usize,

    /// Total number of matching records across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Returns true if pages beyond this one exist.
    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.limit) < self.total
    }

    /// Maps the items while keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

/// Cuts one page out of a full listing.
///
/// A page past the end is empty, never an error.
pub fn paginate<T>(records: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = records.len();
    let items = records
        .into_iter()
        .skip(request.offset())
        .take(request.limit())
        .collect();
    Page {
        items,
        page: request.page(),
        limit: request.limit(),
        total,
    }
}

/// Filters a listing, then cuts one page out of the filtered set.
///
/// `total` counts the filtered records, not the stored ones.
pub fn filter_paginate<T>(
    records: Vec<T>,
    filter: impl FnMut(&T) -> bool,
    request: &PageRequest,
) -> Page<T> {
    let filtered: Vec<T> = records.into_iter().filter(filter).collect();
    paginate(filtered, request)
}
