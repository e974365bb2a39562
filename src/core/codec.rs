//! Query-string codec for [`QueryState`]
//!
//! The URL query string is the canonical representation of a listing view.
//! [`encode`] produces the shortest form (defaults are omitted) and [`decode`]
//! accepts anything: malformed values fall back to their defaults and unknown
//! keys are ignored, so a hand-edited or stale link never breaks the page.
//!
//! ```text
//! status=<tag>          repeatable
//! type=<tag>            repeatable
//! priceMin=<integer>
//! priceMax=<integer>
//! search=<text>
//! sortBy=price|rating|lastUpdated
//! sortOrder=asc|desc    only alongside sortBy
//! page=<integer>        omitted when 1
//! ```

use super::query::{QueryState, SortKey, SortOrder};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const KEY_STATUS: &str = "status";
pub const KEY_TYPE: &str = "type";
pub const KEY_PRICE_MIN: &str = "priceMin";
pub const KEY_PRICE_MAX: &str = "priceMax";
pub const KEY_SEARCH: &str = "search";
pub const KEY_SORT_BY: &str = "sortBy";
pub const KEY_SORT_ORDER: &str = "sortOrder";
pub const KEY_PAGE: &str = "page";

/// Serialize a state into its canonical query string (without the leading `?`)
pub fn encode(state: &QueryState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    for status in &state.statuses {
        out.append_pair(KEY_STATUS, status);
    }
    for kind in &state.types {
        out.append_pair(KEY_TYPE, kind);
    }
    if let Some(min) = state.price_min {
        out.append_pair(KEY_PRICE_MIN, &min.to_string());
    }
    if let Some(max) = state.price_max {
        out.append_pair(KEY_PRICE_MAX, &max.to_string());
    }
    if let Some(search) = state.search.as_deref().filter(|s| !s.trim().is_empty()) {
        out.append_pair(KEY_SEARCH, search);
    }
    if let Some(key) = state.sort_key {
        out.append_pair(KEY_SORT_BY, key.as_str());
        out.append_pair(KEY_SORT_ORDER, state.sort_order.as_str());
    }
    if state.page > 1 {
        out.append_pair(KEY_PAGE, &state.page.to_string());
    }

    out.finish()
}

/// Rebuild a state from a query string; never fails
///
/// A leading `?` is tolerated. For scalar keys given more than once, the first
/// occurrence wins.
pub fn decode(query: &str) -> QueryState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = QueryState::default();

    let mut price_min = None;
    let mut price_max = None;
    let mut search = None;
    let mut sort_by = None;
    let mut sort_order = None;
    let mut page = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_STATUS => {
                if !value.is_empty() {
                    state.statuses.insert(value.into_owned());
                }
            }
            KEY_TYPE => {
                if !value.is_empty() {
                    state.types.insert(value.into_owned());
                }
            }
            KEY_PRICE_MIN => {
                price_min.get_or_insert(value);
            }
            KEY_PRICE_MAX => {
                price_max.get_or_insert(value);
            }
            KEY_SEARCH => {
                search.get_or_insert(value);
            }
            KEY_SORT_BY => {
                sort_by.get_or_insert(value);
            }
            KEY_SORT_ORDER => {
                sort_order.get_or_insert(value);
            }
            KEY_PAGE => {
                page.get_or_insert(value);
            }
            _ => {}
        }
    }

    state.price_min = price_min.and_then(|v| leading_integer(&v));
    state.price_max = price_max.and_then(|v| leading_integer(&v));
    state.search = search
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.into_owned());
    state.sort_key = sort_by.and_then(|v| v.parse::<SortKey>().ok());
    state.sort_order = sort_order
        .map(|v| SortOrder::parse_lenient(&v))
        .unwrap_or_default();
    state.page = page
        .and_then(|v| leading_integer(&v))
        .and_then(|p| usize::try_from(p).ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);

    state
}

/// Parse the leading run of decimal digits, the way browsers' `parseInt` does
///
/// `"500000.9"` gives 500000 and `"3abc"` gives 3. Blank, negative, non-numeric
/// or overflowing input gives `None`.
fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().ok()
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for QueryState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(encode(&QueryState::default()), "");
        assert!(decode("").is_default());
        assert!(decode("?").is_default());
    }

    #[test]
    fn test_encode_key_order_and_repetition() {
        let mut q = QueryState::new();
        q.toggle_status("active");
        q.toggle_status("maintenance");
        q.toggle_type("villa");
        q.set_price_min(Some(500_000));
        q.set_price_max(Some(900_000));
        q.set_search("ocean view");
        q.set_sort(Some(SortKey::LastUpdated));
        q.set_sort_order(SortOrder::Descending);
        q.set_page(2);

        assert_eq!(
            encode(&q),
            "status=active&status=maintenance&type=villa&priceMin=500000&priceMax=900000\
             &search=ocean+view&sortBy=lastUpdated&sortOrder=desc&page=2"
        );
    }

    #[test]
    fn test_sort_order_only_emitted_with_sort_key() {
        let mut q = QueryState::new();
        q.set_sort_order(SortOrder::Descending);
        assert_eq!(encode(&q), "");

        q.set_sort(Some(SortKey::Price));
        q.set_sort_order(SortOrder::Ascending);
        assert_eq!(encode(&q), "sortBy=price&sortOrder=asc");
    }

    #[test]
    fn test_decode_full_query() {
        let q = decode(
            "?status=active&status=inactive&type=house&priceMin=100&priceMax=200\
             &search=Villa%20Rosa&sortBy=rating&sortOrder=desc&page=3",
        );
        assert_eq!(
            q.statuses.iter().collect::<Vec<_>>(),
            vec!["active", "inactive"]
        );
        assert_eq!(q.types.iter().collect::<Vec<_>>(), vec!["house"]);
        assert_eq!(q.price_min, Some(100));
        assert_eq!(q.price_max, Some(200));
        assert_eq!(q.search.as_deref(), Some("Villa Rosa"));
        assert_eq!(q.sort_key, Some(SortKey::Rating));
        assert_eq!(q.sort_order, SortOrder::Descending);
        assert_eq!(q.page, 3);
    }

    #[test]
    fn test_decode_malformed_values_fall_back() {
        let q = decode("priceMin=abc&priceMax=-5&page=0&sortBy=name&sortOrder=up");
        assert_eq!(q.price_min, None);
        assert_eq!(q.price_max, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.sort_key, None);
        assert_eq!(q.sort_order, SortOrder::Ascending);

        let q = decode("page=-2&search=%20%20");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, None);
    }

    #[test]
    fn test_decode_integer_prefixes() {
        let q = decode("priceMin=500000.9&priceMax=+900000&page=3abc");
        assert_eq!(q.price_min, Some(500_000));
        assert_eq!(q.price_max, Some(900_000));
        assert_eq!(q.page, 3);
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_empty_tags() {
        let q = decode("utm_source=mail&status=&status=active&status=active&theme=dark");
        assert_eq!(q.statuses.len(), 1);
        assert!(q.statuses.contains("active"));
    }

    #[test]
    fn test_first_scalar_occurrence_wins() {
        let q = decode("page=2&page=5&sortBy=price&sortBy=rating");
        assert_eq!(q.page, 2);
        assert_eq!(q.sort_key, Some(SortKey::Price));
    }

    #[test]
    fn test_round_trip_through_mutators() {
        let mut q = QueryState::new();
        q.toggle_type("apartment");
        q.toggle_status("active");
        q.set_search("city & sea = 100%");
        q.set_price_max(Some(0));
        q.set_sort(Some(SortKey::Rating));
        q.set_page(4);

        assert_eq!(decode(&encode(&q)), q);
    }

    #[test]
    fn test_display_and_from_str() {
        let q: QueryState = "status=active&page=2".parse().unwrap();
        assert_eq!(q.to_string(), "status=active&page=2");
    }
}
