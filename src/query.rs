// Per-query fetch state machine and result cache. Each submitted query key
// moves through idle → loading → success/error; completed states are cached
// so re-submitting a key serves the stored result without a network call.

use std::collections::HashMap;

use crate::api::models::Movie;

/// Fetch lifecycle for the active query key.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// No search submitted yet.
    Idle,
    /// A fetch for the active key is outstanding.
    Loading,
    /// The catalog answered; an empty list is still a success.
    Success(Vec<Movie>),
    /// The fetch failed; the reason is kept for display.
    Error(String),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_empty_success(&self) -> bool {
        matches!(self, QueryState::Success(movies) if movies.is_empty())
    }
}

/// What the caller must do after submitting a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Served from the cache; no fetch needed.
    Cached,
    /// A fetch for this key is already outstanding.
    InFlight,
    /// Spawn a fetch and report back with this generation id.
    Fetch { query_id: u64 },
}

/// Owns the active query key, its state, and the per-key result cache.
///
/// The generation counter (`query_id`) enforces last-query-wins: a completion
/// carrying a superseded id is discarded so a slow response for an abandoned
/// key never overwrites the state of the current one.
pub struct QueryController {
    active_key: String,
    state: QueryState,
    query_id: u64,
    cache: HashMap<String, QueryState>,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            active_key: String::new(),
            state: QueryState::Idle,
            query_id: 0,
            cache: HashMap::new(),
        }
    }

    pub fn active_key(&self) -> &str {
        &self.active_key
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Generation id of the most recent fetch.
    pub fn current_query_id(&self) -> u64 {
        self.query_id
    }

    /// Make `key` the active query. Serves a cached success/error without
    /// re-fetching, reports an identical in-flight fetch as such, and
    /// otherwise transitions to loading under a fresh generation id. Every
    /// change of the displayed key advances the generation so that earlier
    /// fetches can no longer complete.
    pub fn submit(&mut self, key: &str) -> Submission {
        if key == self.active_key && self.state.is_loading() {
            tracing::debug!(key, "fetch already in flight");
            return Submission::InFlight;
        }

        self.active_key = key.to_string();

        if let Some(cached) = self.cache.get(key) {
            // Retire any outstanding generation: a late completion for an
            // abandoned key must not land on the key now on display.
            self.query_id += 1;
            tracing::debug!(key, "serving cached result");
            self.state = cached.clone();
            return Submission::Cached;
        }

        self.query_id += 1;
        self.state = QueryState::Loading;
        tracing::debug!(key, query_id = self.query_id, "fetch needed");
        Submission::Fetch {
            query_id: self.query_id,
        }
    }

    /// Apply a fetch result. Returns false when the result belongs to a
    /// superseded generation and was discarded.
    pub fn complete(&mut self, query_id: u64, result: Result<Vec<Movie>, String>) -> bool {
        if query_id != self.query_id {
            tracing::debug!(
                query_id,
                current = self.query_id,
                "discarding stale response"
            );
            return false;
        }

        let state = match result {
            Ok(movies) => QueryState::Success(movies),
            Err(reason) => QueryState::Error(reason),
        };
        self.cache.insert(self.active_key.clone(), state.clone());
        self.state = state;
        true
    }

    /// Drop the cached entry for the active key so the next submission of it
    /// issues a fresh fetch. Failures are never retried automatically; this
    /// backs the explicit retry key.
    pub fn invalidate_active(&mut self) {
        self.cache.remove(&self.active_key);
    }
}

