//! Filter, sort and paginate a set of properties
//!
//! The pipeline runs in a fixed order: status, type, minimum price, maximum
//! price, search, sort, then pagination. Values within one set filter are
//! combined with OR, distinct filters with AND.
//!
//! Sorting is stable: records with equal keys keep their input order in both
//! directions, so a page never reshuffles between two identical requests.

use super::property::Property;
use super::query::{PaginationMeta, QueryState, SortKey, SortOrder};
use serde::Serialize;
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// One page of a listing plus the counts needed to render its pager
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub items: Vec<Property>,
    pub page: usize,
    pub page_size: usize,
    /// Records matching the filters, before slicing
    pub total_count: usize,
    /// `max(1, ceil(total_count / page_size))`
    pub total_pages: usize,
    /// The query this page answers
    #[serde(skip)]
    pub query: QueryState,
}

impl Evaluation {
    pub fn has_next(&self) -> bool {
        self.pagination().has_next
    }

    pub fn has_prev(&self) -> bool {
        self.pagination().has_prev
    }

    pub fn pagination(&self) -> PaginationMeta {
        PaginationMeta::new(self.page, self.page_size, self.total_count)
    }
}

/// Run the full pipeline
///
/// Never fails: no match is an empty page with `total_count == 0` and
/// `total_pages == 1`, and a page past the end is simply empty.
pub fn evaluate(records: &[Property], query: &QueryState, page_size: NonZeroUsize) -> Evaluation {
    let mut matched = filter(records, query);
    sort(&mut matched, query.sort_key, query.sort_order);

    let page_size = page_size.get();
    let page = query.page.max(1);
    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size);
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Evaluation {
        items,
        page,
        page_size,
        total_count,
        total_pages,
        query: query.clone(),
    }
}

/// Apply every filter of the query, preserving input order
pub fn filter<'a>(records: &'a [Property], query: &QueryState) -> Vec<&'a Property> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    records
        .iter()
        .filter(|p| query.statuses.is_empty() || query.statuses.contains(p.status.as_str()))
        .filter(|p| query.types.is_empty() || query.types.contains(p.kind.as_str()))
        .filter(|p| query.price_min.is_none_or(|min| p.price >= min))
        .filter(|p| query.price_max.is_none_or(|max| p.price <= max))
        .filter(|p| match needle.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                p.name.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
            }
        })
        .collect()
}

/// Stable in-place sort by the given key; no key keeps input order
pub fn sort(records: &mut [&Property], key: Option<SortKey>, order: SortOrder) {
    let Some(key) = key else {
        return;
    };

    // `sort_by` is stable; reversing the comparator (not the output) keeps ties in input order
    records.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &Property, b: &Property, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::decode;
    use crate::core::property::{PropertyStatus, PropertyType, mock_properties};
    use chrono::NaiveDate;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ids(eval: &Evaluation) -> Vec<u32> {
        eval.items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_query_keeps_input_order() {
        let eval = evaluate(&mock_properties(), &QueryState::default(), size(4));
        assert_eq!(ids(&eval), vec![1, 2, 3, 4]);
        assert_eq!(eval.total_count, 10);
        assert_eq!(eval.total_pages, 3);
    }

    #[test]
    fn test_active_sorted_by_price() {
        let q = decode("status=active&sortBy=price&sortOrder=asc");
        let eval = evaluate(&mock_properties(), &q, size(4));

        assert_eq!(eval.total_count, 6);
        assert_eq!(eval.total_pages, 2);
        assert_eq!(ids(&eval), vec![9, 7, 10, 3]);

        let prices: Vec<u64> = eval.items.iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_price_range_inclusive() {
        let q = decode("priceMin=500000&priceMax=900000");
        let eval = evaluate(&mock_properties(), &q, size(10));
        assert_eq!(eval.total_count, 3);
        assert_eq!(ids(&eval), vec![1, 3, 10]);

        let q = decode("priceMin=580000&priceMax=580000");
        let eval = evaluate(&mock_properties(), &q, size(10));
        assert_eq!(ids(&eval), vec![10]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let eval = evaluate(&mock_properties(), &decode("search=villa"), size(4));
        assert_eq!(eval.total_count, 2);
        assert_eq!(ids(&eval), vec![1, 5]);

        // "downtown" is in the name of #2 and the description of #4
        let eval = evaluate(&mock_properties(), &decode("search=DOWNTOWN"), size(4));
        assert_eq!(ids(&eval), vec![2, 4]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let eval = evaluate(&mock_properties(), &decode("status=active&page=99"), size(4));
        assert!(eval.items.is_empty());
        assert_eq!(eval.total_count, 6);
        assert_eq!(eval.total_pages, 2);
        assert!(!eval.has_next());
    }

    #[test]
    fn test_pager_flags_match_pagination_meta() {
        for query in ["", "page=2", "page=3", "page=4", "status=sold"] {
            let eval = evaluate(&mock_properties(), &decode(query), size(4));
            let meta = eval.pagination();
            assert_eq!(eval.has_next(), meta.has_next, "query {:?}", query);
            assert_eq!(eval.has_prev(), meta.has_prev, "query {:?}", query);
        }

        let middle = evaluate(&mock_properties(), &decode("page=2"), size(4));
        assert!(middle.has_next() && middle.has_prev());
    }

    #[test]
    fn test_no_match_yields_single_empty_page() {
        let eval = evaluate(&mock_properties(), &decode("status=sold"), size(4));
        assert!(eval.items.is_empty());
        assert_eq!(eval.total_count, 0);
        assert_eq!(eval.total_pages, 1);
    }

    #[test]
    fn test_union_within_and_intersection_across_dimensions() {
        let q = decode("status=active&status=maintenance&type=building&type=villa");
        let eval = evaluate(&mock_properties(), &q, size(10));
        assert_eq!(ids(&eval), vec![1, 4, 5, 8]);
    }

    #[test]
    fn test_last_updated_sorts_chronologically() {
        let q = decode("sortBy=lastUpdated&sortOrder=desc");
        let eval = evaluate(&mock_properties(), &q, size(3));
        assert_eq!(ids(&eval), vec![10, 8, 5]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let records: Vec<Property> = (1..=6)
            .map(|id| {
                Property::new(
                    id,
                    format!("p{}", id),
                    PropertyStatus::Active,
                    PropertyType::House,
                    if id % 2 == 0 { 100 } else { 200 },
                    4.0,
                    day,
                    "",
                )
            })
            .collect();

        let asc = evaluate(&records, &decode("sortBy=price"), size(10));
        assert_eq!(ids(&asc), vec![2, 4, 6, 1, 3, 5]);

        let desc = evaluate(&records, &decode("sortBy=price&sortOrder=desc"), size(10));
        assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4, 6]);

        // every record ties on rating
        let ties = evaluate(&records, &decode("sortBy=rating&sortOrder=desc"), size(10));
        assert_eq!(ids(&ties), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = mock_properties();
        let before = records.clone();
        let _ = evaluate(&records, &decode("sortBy=price&sortOrder=desc"), size(4));
        assert_eq!(records, before);
    }
}
