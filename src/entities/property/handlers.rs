//! Property listing HTTP handlers
//!
//! The raw query string is the whole request: it is decoded into a
//! `QueryState`, evaluated against the record source, and echoed back in
//! canonical form together with removal links for each active filter.
//!
//! A client that sends [`LISTING_SESSION_HEADER`] gets last-write-wins
//! sequencing: when one of its requests finishes after a newer request of the
//! same session, it answers with the newer result and `superseded: true`.

use crate::core::codec::{decode, encode};
use crate::core::engine::{Evaluation, evaluate};
use crate::core::error::TaskboardError;
use crate::core::property::{Property, PropertyStatus, PropertyType};
use crate::core::query::{PaginationMeta, SortKey};
use crate::core::service::PropertySource;
use crate::core::summary::{FilterKind, active_filters};
use crate::core::view::ListingSessions;
use axum::{
    extract::{RawQuery, State},
    http::HeaderMap,
    response::Json,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// Property-specific AppState
#[derive(Clone)]
pub struct PropertyAppState {
    pub source: Arc<dyn PropertySource>,
    pub sessions: Arc<ListingSessions>,
    pub page_size: NonZeroUsize,
    /// Artificial delay between evaluation start and commit
    pub simulated_latency: Duration,
}

/// One entry of the active-filter summary, as sent to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilterBody {
    pub id: String,
    pub label: String,
    pub kind: FilterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Query string of the same view with this filter removed
    pub remove_href: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub data: Vec<Property>,
    pub pagination: PaginationMeta,
    /// Canonical form of the request's query string
    pub query: String,
    pub active_filters: Vec<ActiveFilterBody>,
    pub clear_href: String,
    /// Generation of the returned result within the caller's session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<u64>,
    /// A newer request of the same session finished first and its result is returned
    pub superseded: bool,
}

/// Header naming the client session whose listing requests are sequenced
pub const LISTING_SESSION_HEADER: &str = "x-listing-session";

const MAX_SESSION_KEY_LEN: usize = 128;

fn session_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(LISTING_SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty() && key.len() <= MAX_SESSION_KEY_LEN)
}

impl ListingResponse {
    fn from_evaluation(evaluation: Evaluation, cycle: Option<u64>, superseded: bool) -> Self {
        let query = &evaluation.query;
        let active_filters = active_filters(query)
            .into_iter()
            .map(|filter| ActiveFilterBody {
                remove_href: filter.remove_href(query),
                id: filter.id,
                label: filter.label,
                kind: filter.kind,
                value: filter.value,
            })
            .collect();

        Self {
            pagination: evaluation.pagination(),
            query: encode(query),
            active_filters,
            clear_href: "?".to_string(),
            cycle,
            superseded,
            data: evaluation.items,
        }
    }
}

pub async fn list_properties(
    State(state): State<PropertyAppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListingResponse>, TaskboardError> {
    let query = decode(raw.as_deref().unwrap_or_default());
    let cycle = session_key(&headers).map(|key| {
        let view = state.sessions.view(key);
        let ticket = view.begin();
        (view, ticket)
    });

    let records = state.source.load().await?;
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }

    let evaluation = evaluate(&records, &query, state.page_size);
    tracing::debug!(
        query = %query,
        total = evaluation.total_count,
        page = evaluation.page,
        "evaluated property listing"
    );

    let response = match cycle {
        Some((view, ticket)) => {
            let settled = view.settle(ticket, evaluation);
            ListingResponse::from_evaluation(
                settled.evaluation,
                Some(settled.generation),
                settled.superseded,
            )
        }
        None => ListingResponse::from_evaluation(evaluation, None, false),
    };

    Ok(Json(response))
}

/// Values the listing can be filtered and sorted by
pub async fn list_facets() -> Json<Value> {
    Json(json!({
        "statuses": PropertyStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        "types": PropertyType::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        "sortKeys": SortKey::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
        "sortOrders": ["asc", "desc"],
    }))
}
