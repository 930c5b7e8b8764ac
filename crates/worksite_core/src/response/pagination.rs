//! Paginated envelope payloads with navigation links.
//!
//! # Responsibility
//! - Shape page-of-items payloads for the uniform envelope.
//! - Build first/previous/current/next/last links from a base URL.
//!
//! # Invariants
//! - Page size is normalized: defaults to 10, clamps to 100, never 0.
//! - Link query strings are deterministic (page first, then pageSize,
//!   then extra parameters in sorted order).

use crate::response::envelope::ApiResponse;
use serde::Serialize;
use std::collections::BTreeMap;

const DEFAULT_PAGE_SIZE: u32 = 10;
const PAGE_SIZE_MAX: u32 = 100;

/// Navigation links for one result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationLinks {
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub current: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// One page of items plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedData<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub links: PaginationLinks,
}

/// Clamps a requested page size into the supported range.
pub fn normalize_page_size(requested: Option<u32>) -> u32 {
    match requested {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(size) => size.min(PAGE_SIZE_MAX),
    }
}

/// Builds a paginated success envelope with navigation links.
pub fn paginated<T>(
    items: Vec<T>,
    total_count: u64,
    page_number: u32,
    page_size: Option<u32>,
    base_url: &str,
    query_params: &BTreeMap<String, String>,
    message: Option<&str>,
) -> ApiResponse<PagedData<T>> {
    let page_size = normalize_page_size(page_size);
    let page_number = page_number.max(1);
    let total_pages = total_pages_for(total_count, page_size);
    let links = build_links(base_url, page_number, total_pages, page_size, query_params);

    ApiResponse::success(
        PagedData {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            links,
        },
        Some(message.unwrap_or("Data retrieved successfully")),
    )
}

/// Builds navigation links for one page position.
pub fn build_links(
    base_url: &str,
    current_page: u32,
    total_pages: u32,
    page_size: u32,
    query_params: &BTreeMap<String, String>,
) -> PaginationLinks {
    let suffix = link_suffix(page_size, query_params);
    let page_url = |page: u32| format!("{base_url}?page={page}{suffix}");

    PaginationLinks {
        first: page_url(1),
        previous: (current_page > 1).then(|| page_url(current_page - 1)),
        current: page_url(current_page),
        next: (current_page < total_pages).then(|| page_url(current_page + 1)),
        last: (total_pages > 0).then(|| page_url(total_pages)),
    }
}

fn total_pages_for(total_count: u64, page_size: u32) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn link_suffix(page_size: u32, query_params: &BTreeMap<String, String>) -> String {
    let mut suffix = format!("&pageSize={page_size}");
    for (key, value) in query_params {
        suffix.push_str(&format!("&{key}={value}"));
    }
    suffix
}

#[cfg(test)]
mod tests {
    use super::{build_links, normalize_page_size, total_pages_for};
    use std::collections::BTreeMap;

    #[test]
    fn normalize_page_size_applies_default_and_cap() {
        assert_eq!(normalize_page_size(None), 10);
        assert_eq!(normalize_page_size(Some(0)), 10);
        assert_eq!(normalize_page_size(Some(25)), 25);
        assert_eq!(normalize_page_size(Some(5000)), 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages_for(0, 10), 0);
        assert_eq!(total_pages_for(10, 10), 1);
        assert_eq!(total_pages_for(11, 10), 2);
    }

    #[test]
    fn middle_page_has_all_links() {
        let links = build_links("/api/todos", 2, 3, 10, &BTreeMap::new());

        assert_eq!(links.first, "/api/todos?page=1&pageSize=10");
        assert_eq!(links.previous.as_deref(), Some("/api/todos?page=1&pageSize=10"));
        assert_eq!(links.current, "/api/todos?page=2&pageSize=10");
        assert_eq!(links.next.as_deref(), Some("/api/todos?page=3&pageSize=10"));
        assert_eq!(links.last.as_deref(), Some("/api/todos?page=3&pageSize=10"));
    }

    #[test]
    fn boundary_pages_drop_previous_and_next() {
        let first = build_links("/api/todos", 1, 3, 10, &BTreeMap::new());
        assert!(first.previous.is_none());
        assert!(first.next.is_some());

        let last = build_links("/api/todos", 3, 3, 10, &BTreeMap::new());
        assert!(last.previous.is_some());
        assert!(last.next.is_none());
    }

    #[test]
    fn empty_result_has_no_last_link() {
        let links = build_links("/api/todos", 1, 0, 10, &BTreeMap::new());
        assert!(links.last.is_none());
        assert!(links.next.is_none());
    }

    #[test]
    fn extra_query_params_are_preserved_in_sorted_order() {
        let mut params = BTreeMap::new();
        params.insert("status".to_string(), "in_progress".to_string());
        params.insert("assignee".to_string(), "42".to_string());

        let links = build_links("/api/projects", 1, 1, 20, &params);
        assert_eq!(
            links.current,
            "/api/projects?page=1&pageSize=20&assignee=42&status=in_progress"
        );
    }
}
