//! Last-write-wins holder for listing results
//!
//! When evaluation and rendering are separated by latency, an earlier cycle can
//! finish after a later one. [`ListingView`] numbers cycles as they start and
//! only accepts a result if no newer cycle has already committed.
//!
//! Cycles only race within one client, so views are kept per session in
//! [`ListingSessions`]. Requests from different sessions never supersede each
//! other.

use super::engine::Evaluation;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Handle for one evaluate/commit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleTicket(u64);

impl CycleTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Committed {
    generation: u64,
    evaluation: Option<Evaluation>,
}

/// Result of settling a cycle against the view
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    /// The evaluation that should be rendered
    pub evaluation: Evaluation,
    /// Generation of `evaluation`
    pub generation: u64,
    /// True when a newer cycle had already committed and its result was returned instead
    pub superseded: bool,
}

/// Shared slot for the most recent listing result
#[derive(Debug, Default)]
pub struct ListingView {
    next_generation: AtomicU64,
    committed: RwLock<Committed>,
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle
    pub fn begin(&self) -> CycleTicket {
        CycleTicket(self.next_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store the result of a cycle unless a newer cycle already committed
    ///
    /// Returns `false` when the result was stale and dropped.
    pub fn commit(&self, ticket: CycleTicket, evaluation: Evaluation) -> bool {
        !self.settle(ticket, evaluation).superseded
    }

    /// Commit the cycle, or hand back the newer committed result if it is stale
    ///
    /// The check and the read happen under one lock, so the returned
    /// evaluation is always the newest one at the time of the call.
    pub fn settle(&self, ticket: CycleTicket, evaluation: Evaluation) -> Settled {
        let mut committed = match self.committed.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if ticket.0 <= committed.generation {
            if let Some(newer) = committed.evaluation.clone() {
                tracing::debug!(
                    generation = ticket.0,
                    committed = committed.generation,
                    "dropping stale listing result"
                );
                return Settled {
                    evaluation: newer,
                    generation: committed.generation,
                    superseded: true,
                };
            }
        }

        committed.generation = ticket.0;
        committed.evaluation = Some(evaluation.clone());
        Settled {
            evaluation,
            generation: ticket.0,
            superseded: false,
        }
    }

    /// Most recently committed result
    pub fn current(&self) -> Option<Evaluation> {
        let committed = match self.committed.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        committed.evaluation.clone()
    }

    /// Generation of the most recently committed result, 0 if none
    pub fn committed_generation(&self) -> u64 {
        match self.committed.read() {
            Ok(guard) => guard.generation,
            Err(poisoned) => poisoned.into_inner().generation,
        }
    }
}

/// Listing views keyed by client session
///
/// Holds at most `capacity` sessions; the least recently created one is
/// evicted first.
#[derive(Debug)]
pub struct ListingSessions {
    capacity: usize,
    views: RwLock<IndexMap<String, Arc<ListingView>>>,
}

impl ListingSessions {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            views: RwLock::new(IndexMap::new()),
        }
    }

    /// View for a session, created on first use
    pub fn view(&self, session: &str) -> Arc<ListingView> {
        {
            let views = match self.views.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(view) = views.get(session) {
                return view.clone();
            }
        }

        let mut views = match self.views.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(view) = views.get(session) {
            return view.clone();
        }

        while views.len() >= self.capacity {
            if let Some((evicted, _)) = views.shift_remove_index(0) {
                tracing::debug!(session = %evicted, "evicting listing session");
            }
        }

        let view = Arc::new(ListingView::new());
        views.insert(session.to_string(), view.clone());
        view
    }

    pub fn len(&self) -> usize {
        match self.views.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
