//! Listing query state and pagination metadata
//!
//! [`QueryState`] is the single source of truth for what a listing shows. It is
//! rebuilt from the URL query string on every request (see [`crate::core::codec`])
//! and never kept as mutable state beside it. To change the view, clone the
//! decoded state, apply a mutator and encode the result.

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Field the listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Rating,
    LastUpdated,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Price, SortKey::Rating, SortKey::LastUpdated];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::LastUpdated => "lastUpdated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            "lastUpdated" => Ok(SortKey::LastUpdated),
            _ => Err(()),
        }
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Lenient parse: `desc` in any case is descending, anything else ascending
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All active filter, sort and page criteria of a listing
///
/// Set filters keep insertion order so that encoding is deterministic and
/// follows the order in which the user selected values.
///
/// Every mutator that changes a filter or the sort resets `page` to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub statuses: IndexSet<String>,
    pub types: IndexSet<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    /// Never `Some("")`
    pub search: Option<String>,
    pub sort_key: Option<SortKey>,
    pub sort_order: SortOrder,
    /// 1-based, never 0
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            statuses: IndexSet::new(),
            types: IndexSet::new(),
            price_min: None,
            price_max: None,
            search: None,
            sort_key: None,
            sort_order: SortOrder::Ascending,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter, sort or page criterion is set
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when at least one constraint would show up in the active filter summary
    pub fn has_constraints(&self) -> bool {
        !self.statuses.is_empty()
            || !self.types.is_empty()
            || self.price_min.is_some()
            || self.price_max.is_some()
            || self.search.is_some()
            || self.sort_key.is_some()
    }

    fn criteria_changed(&mut self) {
        self.page = 1;
    }

    /// Select the status if absent, deselect it if present
    ///
    /// An empty tag cannot be written to the URL and is ignored.
    pub fn toggle_status(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        if !self.statuses.shift_remove(tag) {
            self.statuses.insert(tag.to_string());
        }
        self.criteria_changed();
    }

    pub fn remove_status(&mut self, tag: &str) {
        self.statuses.shift_remove(tag);
        self.criteria_changed();
    }

    /// Select the type if absent, deselect it if present
    ///
    /// An empty tag cannot be written to the URL and is ignored.
    pub fn toggle_type(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        if !self.types.shift_remove(tag) {
            self.types.insert(tag.to_string());
        }
        self.criteria_changed();
    }

    pub fn remove_type(&mut self, tag: &str) {
        self.types.shift_remove(tag);
        self.criteria_changed();
    }

    pub fn set_price_min(&mut self, value: Option<u64>) {
        self.price_min = value;
        self.criteria_changed();
    }

    pub fn set_price_max(&mut self, value: Option<u64>) {
        self.price_max = value;
        self.criteria_changed();
    }

    /// Clear both price bounds
    pub fn clear_price(&mut self) {
        self.price_min = None;
        self.price_max = None;
        self.criteria_changed();
    }

    /// Set the search term; blank text clears it
    pub fn set_search(&mut self, text: &str) {
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.criteria_changed();
    }

    pub fn clear_search(&mut self) {
        self.search = None;
        self.criteria_changed();
    }

    pub fn set_sort(&mut self, key: Option<SortKey>) {
        self.sort_key = key;
        self.criteria_changed();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.criteria_changed();
    }

    /// Drop the sort and return to ascending order
    pub fn clear_sort(&mut self) {
        self.sort_key = None;
        self.sort_order = SortOrder::Ascending;
        self.criteria_changed();
    }

    /// Move to another page; 0 is treated as 1
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total_count: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        // Ensure page_size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total_pages = total_count.div_ceil(page_size).max(1);

        Self {
            page,
            page_size,
            total_count,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered() -> QueryState {
        let mut q = QueryState::new();
        q.toggle_status("active");
        q.set_sort(Some(SortKey::Price));
        q.set_page(3);
        q
    }

    #[test]
    fn test_defaults() {
        let q = QueryState::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.sort_order, SortOrder::Ascending);
        assert!(q.is_default());
        assert!(!q.has_constraints());
    }

    #[test]
    fn test_toggle_status_adds_then_removes() {
        let mut q = QueryState::new();
        q.toggle_status("active");
        q.toggle_status("inactive");
        assert_eq!(
            q.statuses.iter().collect::<Vec<_>>(),
            vec!["active", "inactive"]
        );

        q.toggle_status("active");
        assert_eq!(q.statuses.iter().collect::<Vec<_>>(), vec!["inactive"]);
    }

    #[test]
    fn test_empty_tags_are_ignored() {
        let mut q = QueryState::new();
        q.set_page(3);
        q.toggle_status("");
        q.toggle_type("");

        assert!(q.statuses.is_empty());
        assert!(q.types.is_empty());
        assert_eq!(q.page, 3);
        assert_eq!(crate::core::codec::decode(&crate::core::codec::encode(&q)), q);
    }

    #[test]
    fn test_every_criteria_mutator_resets_page() {
        let mutators: [(&str, fn(&mut QueryState)); 12] = [
            ("toggle_status", |q| q.toggle_status("inactive")),
            ("remove_status", |q| q.remove_status("active")),
            ("toggle_type", |q| q.toggle_type("villa")),
            ("remove_type", |q| q.remove_type("villa")),
            ("set_price_min", |q| q.set_price_min(Some(10))),
            ("set_price_max", |q| q.set_price_max(Some(10))),
            ("clear_price", |q| q.clear_price()),
            ("set_search", |q| q.set_search("villa")),
            ("clear_search", |q| q.clear_search()),
            ("set_sort", |q| q.set_sort(Some(SortKey::Rating))),
            ("set_sort_order", |q| q.set_sort_order(SortOrder::Descending)),
            ("clear_sort", |q| q.clear_sort()),
        ];

        for (name, mutate) in mutators {
            let mut q = filtered();
            assert_eq!(q.page, 3);
            mutate(&mut q);
            assert_eq!(q.page, 1, "{} should reset the page", name);
        }
    }

    #[test]
    fn test_set_page_keeps_criteria_and_clamps_zero() {
        let mut q = filtered();
        q.set_page(0);
        assert_eq!(q.page, 1);
        assert!(q.statuses.contains("active"));
        assert_eq!(q.sort_key, Some(SortKey::Price));
    }

    #[test]
    fn test_blank_search_clears() {
        let mut q = QueryState::new();
        q.set_search("villa");
        assert_eq!(q.search.as_deref(), Some("villa"));
        q.set_search("   ");
        assert!(q.search.is_none());
    }

    #[test]
    fn test_clear_sort_resets_order() {
        let mut q = QueryState::new();
        q.set_sort(Some(SortKey::Rating));
        q.set_sort_order(SortOrder::Descending);
        q.clear_sort();
        assert!(q.sort_key.is_none());
        assert_eq!(q.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn test_clear_all() {
        let mut q = filtered();
        q.clear_all();
        assert!(q.is_default());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("lastUpdated".parse::<SortKey>(), Ok(SortKey::LastUpdated));
        assert!("last_updated".parse::<SortKey>().is_err());
        assert_eq!(SortOrder::parse_lenient("DESC"), SortOrder::Descending);
        assert_eq!(SortOrder::parse_lenient("sideways"), SortOrder::Ascending);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 145);
        assert_eq!(meta.total_count, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_pagination_meta_empty_has_one_page() {
        let meta = PaginationMeta::new(1, 4, 0);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_pagination_meta_past_the_end() {
        let meta = PaginationMeta::new(99, 4, 6);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }
}
