//! Pagination parameters and paged results.

use crate::{
    model::api::{PageDto, PageParams},
    server::error::validation::ValidationError,
};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated zero-based pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub size: u64,
}

impl Pagination {
    /// `size` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TryFrom<PageParams> for Pagination {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let page = params.page.unwrap_or(0);
        if page < 0 {
            return Err(ValidationError::InvalidPage(page));
        }

        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE as i64);
        if size < 1 || size > MAX_PAGE_SIZE as i64 {
            return Err(ValidationError::InvalidPageSize {
                size,
                max: MAX_PAGE_SIZE,
            });
        }

        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }
}

/// One page of records plus the total count across all pages.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.pagination.size == 0 {
            return 0;
        }

        self.total_items.div_ceil(self.pagination.size)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
            total_items: self.total_items,
        }
    }
}

impl<T, D: From<T>> From<Page<T>> for PageDto<D> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();

        Self {
            content: page.items.into_iter().map(D::from).collect(),
            page: page.pagination.page,
            size: page.pagination.size,
            total_elements: page.total_items,
            total_pages,
        }
    }
}
