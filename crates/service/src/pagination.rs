//! Pagination utilities for service layer
//!
//! Offset/limit window over an ordered listing.

pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip from the start of the ordering
    pub skip: u64,
    /// maximum rows returned
    pub limit: u64,
}

impl Pagination {
    /// Fill missing query parameters with the defaults (skip 0, limit 10).
    pub fn from_query(skip: Option<u64>, limit: Option<u64>) -> Self {
        let d = Self::default();
        Self { skip: skip.unwrap_or(d.skip), limit: limit.unwrap_or(d.limit) }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}
