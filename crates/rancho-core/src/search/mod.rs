//! Name search and pagination over the item list.

use serde::Serialize;

use crate::models::Item;
use crate::util::parse_positive_int;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Normalized listing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,
    pub items_per_page: usize,
    /// Lowercased name filter; empty matches everything
    pub search: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search: String::new(),
        }
    }
}

impl PageRequest {
    /// Build a request from raw query-string values, applying defaults
    #[must_use]
    pub fn from_raw(page: Option<&str>, items_per_page: Option<&str>, search: Option<&str>) -> Self {
        Self {
            page: parse_positive_int(page).unwrap_or(DEFAULT_PAGE),
            items_per_page: parse_positive_int(items_per_page).unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            search: search.unwrap_or_default().to_lowercase(),
        }
    }

    /// Half-open `[start, end)` bounds of this page, before clamping
    #[must_use]
    pub const fn bounds(&self) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.items_per_page);
        let end = self.page.saturating_mul(self.items_per_page);
        (start, end)
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub items: Vec<Item>,
}

/// Items whose name contains the request's search text
pub fn filter_by_name<'a>(items: &'a [Item], request: &PageRequest) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.name_contains(&request.search))
        .collect()
}

/// Slice an already-filtered list into the requested page.
///
/// Pages past the end produce an empty `items` list.
#[must_use]
pub fn paginate(filtered: &[&Item], request: &PageRequest) -> ItemPage {
    let total_items = filtered.len();
    let (start, end) = request.bounds();
    let start = start.min(total_items);
    let end = end.min(total_items);

    ItemPage {
        total_items,
        total_pages: total_items.div_ceil(request.items_per_page.max(1)),
        current_page: request.page,
        items_per_page: request.items_per_page,
        items: filtered[start..end].iter().map(|item| (*item).clone()).collect(),
    }
}
