//! Pagination and search contract
//!
//! Every list endpoint (accounts, customers, orders) follows the same rules:
//! - `page` absent or `<= 0` becomes 1, `limit` absent or `<= 0` becomes 10
//! - a non-empty `search` filters one text column by case-insensitive substring
//! - `count` is taken before slicing, `total = ceil(count / limit)`
//! - `offset = (page - 1) * limit`

use serde::{Deserialize, Serialize};

use crate::error::app_error::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Normalized page/limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Apply defaults to raw values
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip before the requested page
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `count` rows
    pub fn total_pages(&self, count: i64) -> i64 {
        let pages = count / self.limit;
        if count % self.limit != 0 {
            pages + 1
        } else {
            pages
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Empty or missing input means "no filter"
    pub fn new(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `%term%` for `ILIKE`, with LIKE wildcards in the term escaped
    pub fn ilike_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// Same predicate as the `ILIKE` pattern, evaluated in memory
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Raw list query string: `?search=&page=&limit=`
///
/// Numbers arrive as strings so that a malformed value produces our own
/// validation message instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// Validate and normalize into a search term and page request
    pub fn parse(self) -> AppResult<(Option<SearchTerm>, PageRequest)> {
        let page = parse_number("page", self.page.as_deref())?;
        let limit = parse_number("limit", self.limit.as_deref())?;
        Ok((SearchTerm::new(self.search), PageRequest::new(page, limit)))
    }
}

fn parse_number(field: &str, raw: Option<&str>) -> AppResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(|e| {
            AppError::bad_request(format!("Invalid {field} given {value}")).with_source(e)
        }),
    }
}

/// One page of results plus the unpaginated match count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, count: i64, request: &PageRequest) -> Self {
        Self {
            items,
            count,
            total_pages: request.total_pages(count),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            total_pages: self.total_pages,
        }
    }
}

/// List response envelope: `{data, page, limit, count, total}`
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub limit: i64,
    /// Matching rows before pagination
    pub count: i64,
    /// Number of pages
    pub total: i64,
}

impl<T> ListResponse<T> {
    pub fn new(page: Page<T>, request: PageRequest) -> Self {
        Self {
            data: page.items,
            page: request.page(),
            limit: request.limit(),
            count: page.count,
            total: page.total_pages,
        }
    }
}
