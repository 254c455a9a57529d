//! Uniform success envelope and pagination metadata.

use serde::Serialize;

/// The `{data, paging?}` wrapper used for all successful responses.
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<PageMetadata>,
}

impl<T> WebResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, paging: None }
    }

    pub fn with_paging(data: T, paging: PageMetadata) -> Self {
        Self {
            data,
            paging: Some(paging),
        }
    }
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub page: i64,
    pub size: i64,
    pub total_item: i64,
    pub total_page: i64,
}

impl PageMetadata {
    /// Computes `total_page = ceil(total_item / size)`. `size` must be
    /// positive; the handler resolves defaults before calling this.
    pub fn new(page: i64, size: i64, total_item: i64) -> Self {
        // Equivalent of `total_item.div_ceil(size)`; `i64::div_ceil` is
        // unstable (`int_roundings`) on stable toolchains.
        let quotient = total_item / size;
        let remainder = total_item % size;
        let total_page = if remainder != 0 && (remainder > 0) == (size > 0) {
            quotient + 1
        } else {
            quotient
        };
        Self {
            page,
            size,
            total_item,
            total_page,
        }
    }
}
