// Query state machine: idle → loading → success/error, caching, and the
// last-query-wins discard of stale responses.

use cinesearch::api::models::Movie;
use cinesearch::query::{QueryController, QueryState, Submission};

fn make_movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: None,
        overview: None,
        vote_average: 0.0,
    }
}

#[test]
fn test_starts_idle_with_empty_key() {
    let ctl = QueryController::new();
    assert_eq!(ctl.active_key(), "");
    assert_eq!(*ctl.state(), QueryState::Idle);
}

#[test]
fn test_submit_unknown_key_requires_fetch() {
    let mut ctl = QueryController::new();
    let sub = ctl.submit("batman");
    assert_eq!(sub, Submission::Fetch { query_id: 1 });
    assert!(ctl.state().is_loading());
    assert_eq!(ctl.active_key(), "batman");
}

#[test]
fn test_resubmitting_loading_key_is_in_flight() {
    let mut ctl = QueryController::new();
    ctl.submit("batman");
    assert_eq!(ctl.submit("batman"), Submission::InFlight);
    // No new generation was started.
    assert_eq!(ctl.current_query_id(), 1);
}

#[test]
fn test_complete_stores_and_caches_success() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id } = ctl.submit("batman") else {
        panic!("expected fetch");
    };
    assert!(ctl.complete(query_id, Ok(vec![make_movie(1, "Batman")])));
    match ctl.state() {
        QueryState::Success(movies) => assert_eq!(movies.len(), 1),
        other => panic!("expected success, got {:?}", other),
    }

    // Re-entering the key serves the cache without a fetch.
    ctl.submit("superman");
    assert_eq!(ctl.submit("batman"), Submission::Cached);
    match ctl.state() {
        QueryState::Success(movies) => assert_eq!(movies[0].title, "Batman"),
        other => panic!("expected cached success, got {:?}", other),
    }
}

#[test]
fn test_empty_success_is_distinct_from_error() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id } = ctl.submit("zzzzxx123") else {
        panic!("expected fetch");
    };
    assert!(ctl.complete(query_id, Ok(vec![])));
    assert!(ctl.state().is_empty_success());
    assert!(!matches!(ctl.state(), QueryState::Error(_)));
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id: first } = ctl.submit("q1") else {
        panic!("expected fetch");
    };
    ctl.submit("q2");

    // q1's late response must not overwrite q2's loading state.
    assert!(!ctl.complete(first, Ok(vec![make_movie(1, "Stale")])));
    assert_eq!(ctl.active_key(), "q2");
    assert!(ctl.state().is_loading());

    let current = ctl.current_query_id();
    assert!(ctl.complete(current, Ok(vec![])));
    assert!(ctl.state().is_empty_success());
}

#[test]
fn test_cache_hit_retires_outstanding_fetch() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id: b_id } = ctl.submit("b") else {
        panic!("expected fetch");
    };
    assert!(ctl.complete(b_id, Ok(vec![make_movie(1, "B")])));

    // "a" is still in flight when the display moves back to cached "b".
    let Submission::Fetch { query_id: a_id } = ctl.submit("a") else {
        panic!("expected fetch");
    };
    assert_eq!(ctl.submit("b"), Submission::Cached);

    // a's late response must be discarded, not applied to the display.
    assert!(!ctl.complete(a_id, Ok(vec![make_movie(2, "A")])));
    match ctl.state() {
        QueryState::Success(movies) => assert_eq!(movies[0].title, "B"),
        other => panic!("expected b's cached success, got {:?}", other),
    }

    // And b's cache entry must not be poisoned with a's movies.
    ctl.submit("c");
    assert_eq!(ctl.submit("b"), Submission::Cached);
    match ctl.state() {
        QueryState::Success(movies) => assert_eq!(movies[0].title, "B"),
        other => panic!("expected b's cached success, got {:?}", other),
    }
}

#[test]
fn test_errors_are_cached_and_invalidated_on_retry() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id } = ctl.submit("batman") else {
        panic!("expected fetch");
    };
    assert!(ctl.complete(query_id, Err("HTTP 500".to_string())));
    assert_eq!(*ctl.state(), QueryState::Error("HTTP 500".to_string()));

    // Without invalidation the error is served from cache.
    ctl.submit("other");
    assert_eq!(ctl.submit("batman"), Submission::Cached);

    // After invalidation a fresh fetch is issued.
    ctl.invalidate_active();
    assert!(matches!(ctl.submit("batman"), Submission::Fetch { .. }));
}

#[test]
fn test_generation_ids_are_monotonic_per_fetch() {
    let mut ctl = QueryController::new();
    let Submission::Fetch { query_id: a } = ctl.submit("one") else {
        panic!("expected fetch");
    };
    let Submission::Fetch { query_id: b } = ctl.submit("two") else {
        panic!("expected fetch");
    };
    assert!(b > a, "each new fetch gets a fresh generation id");
}
