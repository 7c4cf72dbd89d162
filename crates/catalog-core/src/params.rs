//! Boundary validation for raw request parameters.
//!
//! Both the HTTP handlers and the CLI run their raw inputs through these
//! functions before calling the resolvers, so the resolvers only ever see
//! in-range values.

use crate::error::{CatalogError, CatalogResult};
use crate::models::SortBy;

/// Default upper bound on query length, in characters.
pub const MAX_QUERY_LEN: usize = 100;
/// Default number of related items returned when no limit is given.
pub const DEFAULT_RELATED_LIMIT: usize = 3;
/// Largest accepted related-items limit.
pub const MAX_RELATED_LIMIT: usize = 10;

/// Bounds applied at the boundary. Configurable per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub max_query_len: usize,
    pub default_related_limit: usize,
    pub max_related_limit: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_query_len: MAX_QUERY_LEN,
            default_related_limit: DEFAULT_RELATED_LIMIT,
            max_related_limit: MAX_RELATED_LIMIT,
        }
    }
}

impl QueryLimits {
    /// Trim the query; blank becomes `None`, over-long is rejected.
    pub fn query<'a>(&self, raw: Option<&'a str>) -> CatalogResult<Option<&'a str>> {
        let Some(q) = raw.map(str::trim).filter(|q| !q.is_empty()) else {
            return Ok(None);
        };
        let len = q.chars().count();
        if len > self.max_query_len {
            return Err(CatalogError::validation(format!(
                "q must be at most {} characters (got {})",
                self.max_query_len, len
            )));
        }
        Ok(Some(q))
    }

    /// Parse `sort_by`, defaulting to [`SortBy::Name`] when absent.
    pub fn sort_by(&self, raw: Option<&str>) -> CatalogResult<SortBy> {
        raw.map(str::parse::<SortBy>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Resolve the related-items limit, applying the default and the
    /// inclusive range `[1, max_related_limit]`.
    pub fn related_limit(&self, raw: Option<i64>) -> CatalogResult<usize> {
        let Some(limit) = raw else {
            return Ok(self.default_related_limit);
        };
        if limit < 1 || limit > self.max_related_limit as i64 {
            return Err(CatalogError::validation(format!(
                "limit must be between 1 and {} (got {})",
                self.max_related_limit, limit
            )));
        }
        Ok(limit as usize)
    }
}
