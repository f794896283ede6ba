//! Rate-limit and pagination metadata carried in response headers.

use serde::{Deserialize, Serialize};

use crate::http::find_header;

pub const RATE_LIMIT: &str = "X-Ratelimit-Limit";
pub const RATE_LIMIT_REMAINING: &str = "X-Ratelimit-Remaining";
pub const TOTAL: &str = "X-Total";
pub const PER_PAGE: &str = "X-Per-Page";

/// One recognized response header with its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHeader {
    RequestLimit(u64),
    RequestsRemaining(u64),
    TotalNumberOfElements(u64),
    ElementsPerPage(u64),
}

impl ResponseHeader {
    /// Canonical header name this value was read from.
    pub fn name(&self) -> &'static str {
        match self {
            ResponseHeader::RequestLimit(_) => RATE_LIMIT,
            ResponseHeader::RequestsRemaining(_) => RATE_LIMIT_REMAINING,
            ResponseHeader::TotalNumberOfElements(_) => TOTAL,
            ResponseHeader::ElementsPerPage(_) => PER_PAGE,
        }
    }

    pub fn value(&self) -> u64 {
        match *self {
            ResponseHeader::RequestLimit(v)
            | ResponseHeader::RequestsRemaining(v)
            | ResponseHeader::TotalNumberOfElements(v)
            | ResponseHeader::ElementsPerPage(v) => v,
        }
    }
}

const RECOGNIZED: [(&str, fn(u64) -> ResponseHeader); 4] = [
    (RATE_LIMIT, ResponseHeader::RequestLimit),
    (RATE_LIMIT_REMAINING, ResponseHeader::RequestsRemaining),
    (TOTAL, ResponseHeader::TotalNumberOfElements),
    (PER_PAGE, ResponseHeader::ElementsPerPage),
];

/// Read the recognized headers, in table order.
///
/// Absent or non-numeric values are skipped; unknown headers are ignored.
pub fn parse_headers(raw: &[(String, String)]) -> Vec<ResponseHeader> {
    RECOGNIZED
        .iter()
        .filter_map(|(name, make)| {
            let value = find_header(raw, name)?;
            match value.trim().parse::<u64>() {
                Ok(n) => Some(make(n)),
                Err(_) => {
                    tracing::trace!(header = name, value, "skipping non-numeric header");
                    None
                }
            }
        })
        .collect()
}

/// Parsed header counters, each present only when the server sent it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub rate_limit: Option<u64>,
    pub rate_limit_remaining: Option<u64>,
    pub total: Option<u64>,
    pub per_page: Option<u64>,
}

impl ResponseMetadata {
    pub fn from_raw(raw: &[(String, String)]) -> Self {
        Self::from_headers(&parse_headers(raw))
    }

    pub fn from_headers(headers: &[ResponseHeader]) -> Self {
        headers.iter().fold(Self::default(), |mut meta, header| {
            match *header {
                ResponseHeader::RequestLimit(v) => meta.rate_limit = Some(v),
                ResponseHeader::RequestsRemaining(v) => meta.rate_limit_remaining = Some(v),
                ResponseHeader::TotalNumberOfElements(v) => meta.total = Some(v),
                ResponseHeader::ElementsPerPage(v) => meta.per_page = Some(v),
            }
            meta
        })
    }

    /// Number of pages implied by `X-Total` and `X-Per-Page`.
    pub fn total_pages(&self) -> Option<u64> {
        match (self.total, self.per_page) {
            (Some(total), Some(per_page)) if per_page > 0 => Some(total.div_ceil(per_page)),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.rate_limit_remaining == Some(0)
    }
}
