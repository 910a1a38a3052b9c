use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// One page of results.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Items on this page
    pub content: Vec<T>,
    /// Zero-based page index
    pub page: u64,
    /// Requested page size
    pub size: u64,
    /// Number of items across all pages
    pub total_elements: u64,
    /// Number of pages
    pub total_pages: u64,
}

/// Zero-based pagination query parameters.
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page index, defaults to 0
    pub page: Option<i64>,
    /// Page size between 1 and 100, defaults to 10
    pub size: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: u64,
}

/// Number of records changed by a bulk operation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdatedDto {
    pub updated: u64,
}
