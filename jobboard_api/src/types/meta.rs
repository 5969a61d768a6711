use serde::{Deserialize, Serialize};

/// Response metadata attached to list endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct Meta {
    pub paging: Paging,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// Envelope for list endpoints: `{"meta": {...}, "data": [...]}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct PaginatedResponse<T> {
    pub meta: Meta,
    pub data: Vec<T>,
}

/// Envelope for single-resource endpoints: `{"data": {...}}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Response<T> {
    pub data: T,
}
