//! Active-filter summary
//!
//! Derives one removable entry per active constraint from a [`QueryState`].
//! Nothing here holds state: removing an entry produces a new `QueryState`
//! (and its encoded query string) with exactly that constraint cleared.

use super::codec::encode;
use super::query::QueryState;
use serde::Serialize;

/// Which part of the query an active filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Status,
    Type,
    Price,
    Search,
    Sort,
}

/// How to clear one active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRemoval {
    Status(String),
    Type(String),
    Price,
    Search,
    Sort,
}

impl FilterRemoval {
    /// New state with this constraint cleared and the page reset to 1
    pub fn apply(&self, state: &QueryState) -> QueryState {
        let mut next = state.clone();
        match self {
            FilterRemoval::Status(tag) => next.remove_status(tag),
            FilterRemoval::Type(tag) => next.remove_type(tag),
            FilterRemoval::Price => next.clear_price(),
            FilterRemoval::Search => next.clear_search(),
            FilterRemoval::Sort => next.clear_sort(),
        }
        next
    }
}

/// A constraint currently applied to the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilter {
    pub id: String,
    pub label: String,
    pub kind: FilterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip)]
    pub removal: FilterRemoval,
}

impl ActiveFilter {
    fn new(id: String, label: String, kind: FilterKind, value: Option<String>, removal: FilterRemoval) -> Self {
        Self {
            id,
            label,
            kind,
            value,
            removal,
        }
    }

    /// State after removing this filter
    pub fn remove_from(&self, state: &QueryState) -> QueryState {
        self.removal.apply(state)
    }

    /// Query string (with leading `?`) of the state after removing this filter
    pub fn remove_href(&self, state: &QueryState) -> String {
        format!("?{}", encode(&self.remove_from(state)))
    }
}

/// List the active constraints of a query
///
/// Order: each status, each type, the price range, the search term, the sort.
pub fn active_filters(state: &QueryState) -> Vec<ActiveFilter> {
    let mut filters = Vec::new();

    for status in &state.statuses {
        filters.push(ActiveFilter::new(
            format!("status-{}", status),
            format!("Status: {}", status),
            FilterKind::Status,
            Some(status.clone()),
            FilterRemoval::Status(status.clone()),
        ));
    }

    for kind in &state.types {
        filters.push(ActiveFilter::new(
            format!("type-{}", kind),
            format!("Type: {}", kind),
            FilterKind::Type,
            Some(kind.clone()),
            FilterRemoval::Type(kind.clone()),
        ));
    }

    if state.price_min.is_some() || state.price_max.is_some() {
        filters.push(ActiveFilter::new(
            "price-range".to_string(),
            format!(
                "Price: {} - {}",
                price_bound_label(state.price_min),
                price_bound_label(state.price_max)
            ),
            FilterKind::Price,
            None,
            FilterRemoval::Price,
        ));
    }

    if let Some(search) = &state.search {
        filters.push(ActiveFilter::new(
            "search".to_string(),
            format!("Search: \"{}\"", search),
            FilterKind::Search,
            Some(search.clone()),
            FilterRemoval::Search,
        ));
    }

    if let Some(key) = state.sort_key {
        filters.push(ActiveFilter::new(
            "sort".to_string(),
            format!("Sort: {} ({})", key, state.sort_order),
            FilterKind::Sort,
            Some(key.as_str().to_string()),
            FilterRemoval::Sort,
        ));
    }

    filters
}

fn price_bound_label(bound: Option<u64>) -> String {
    match bound {
        Some(value) => format!("${}", group_thousands(value)),
        None => "Any".to_string(),
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
