// TMDB response deserialization, Movie display helpers, and the HTTP client
// against a wiremock server.

use cinesearch::api::models::{Movie, SearchResponse};
use cinesearch::api::tmdb::TmdbClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── API deserialization ──────────────────────────────────────────────────────

#[test]
fn test_search_response_deserializes() {
    let json = r#"{
        "page": 1,
        "results": [
            {
                "adult": false,
                "backdrop_path": "/b0PlSiywjkz0aTzGUfnRJdJwCy1.jpg",
                "genre_ids": [28, 80],
                "id": 268,
                "original_language": "en",
                "original_title": "Batman",
                "overview": "Batman must face his most ruthless nemesis...",
                "popularity": 41.6,
                "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                "release_date": "1989-06-21",
                "title": "Batman",
                "video": false,
                "vote_average": 7.2,
                "vote_count": 7800
            },
            {
                "adult": false,
                "backdrop_path": null,
                "genre_ids": [],
                "id": 125249,
                "original_language": "en",
                "original_title": "Batman",
                "overview": "",
                "popularity": 8.4,
                "poster_path": null,
                "release_date": "",
                "title": "Batman",
                "video": false,
                "vote_average": 0.0,
                "vote_count": 0
            }
        ],
        "total_pages": 10,
        "total_results": 186
    }"#;

    let resp: SearchResponse =
        serde_json::from_str(json).expect("should deserialize SearchResponse");
    assert_eq!(resp.page, 1);
    assert_eq!(resp.results.len(), 2);
    assert_eq!(resp.total_results, 186);

    let first = &resp.results[0];
    assert_eq!(first.id, 268);
    assert_eq!(first.title, "Batman");
    assert_eq!(
        first.poster_path.as_deref(),
        Some("/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg")
    );
    assert_eq!(first.release_date.as_deref(), Some("1989-06-21"));
    assert!((first.vote_average - 7.2).abs() < f64::EPSILON);

    let second = &resp.results[1];
    assert!(second.poster_path.is_none());
    assert_eq!(second.release_date.as_deref(), Some(""));
    assert_eq!(second.vote_average, 0.0);
}

#[test]
fn test_empty_results_deserialize() {
    let json = r#"{ "page": 1, "results": [], "total_pages": 0, "total_results": 0 }"#;
    let resp: SearchResponse =
        serde_json::from_str(json).expect("should deserialize empty SearchResponse");
    assert!(resp.results.is_empty());
}

// ── Movie display helpers ────────────────────────────────────────────────────

fn make_movie() -> Movie {
    Movie {
        id: 268,
        title: "Batman".to_string(),
        poster_path: Some("/poster.jpg".to_string()),
        release_date: Some("1989-06-21".to_string()),
        overview: Some("Batman must face his most ruthless nemesis.".to_string()),
        vote_average: 7.2,
    }
}

#[test]
fn test_release_year() {
    let mut movie = make_movie();
    assert_eq!(movie.release_year(), Some("1989"));

    movie.release_date = Some(String::new());
    assert_eq!(movie.release_year(), None);

    movie.release_date = None;
    assert_eq!(movie.release_year(), None);
}

#[test]
fn test_rating_label() {
    let mut movie = make_movie();
    assert_eq!(movie.rating_label(), "7.2/10");

    movie.vote_average = 0.0;
    assert_eq!(movie.rating_label(), "unrated");
}

#[test]
fn test_overview_snippet() {
    let mut movie = make_movie();
    assert_eq!(
        movie.overview_snippet(100),
        "Batman must face his most ruthless nemesis."
    );

    let snippet = movie.overview_snippet(20);
    assert!(snippet.chars().count() <= 20);
    assert!(snippet.ends_with('…'));

    movie.overview = None;
    assert_eq!(movie.overview_snippet(20), "");
}

// ── TMDB client against a mock server ────────────────────────────────────────

#[tokio::test]
async fn test_search_movies_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "batman"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "results": [
                { "id": 268, "title": "Batman", "poster_path": "/p.jpg",
                  "release_date": "1989-06-21", "overview": "Gotham.", "vote_average": 7.2 },
                { "id": 272, "title": "Batman Begins", "poster_path": null,
                  "release_date": "2005-06-10", "overview": "Origins.", "vote_average": 7.7 },
                { "id": 155, "title": "The Dark Knight", "poster_path": null,
                  "release_date": "2008-07-16", "overview": "Joker.", "vote_average": 8.5 }
            ],
            "total_pages": 1,
            "total_results": 3
        })))
        .mount(&server)
        .await;

    let client = TmdbClient::with_base_url("test-key", server.uri());
    let movies = client
        .search_movies("batman")
        .await
        .expect("search should succeed");
    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].title, "Batman");
    assert_eq!(movies[2].release_year(), Some("2008"));
}

#[tokio::test]
async fn test_search_movies_empty_results_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1, "results": [], "total_pages": 0, "total_results": 0
        })))
        .mount(&server)
        .await;

    let client = TmdbClient::with_base_url("test-key", server.uri());
    let movies = client
        .search_movies("zzzzxx123")
        .await
        .expect("empty result set is a success");
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_search_movies_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = TmdbClient::with_base_url("test-key", server.uri());
    let err = client
        .search_movies("batman")
        .await
        .expect_err("HTTP 500 should be an error");
    assert!(
        err.to_string().contains("500"),
        "error should carry the status, got: {err}"
    );
}

#[tokio::test]
async fn test_search_movies_transport_error() {
    // Nothing listens on this address.
    let client = TmdbClient::with_base_url("test-key", "http://127.0.0.1:1");
    let result = client.search_movies("batman").await;
    assert!(result.is_err(), "connection failure should be an error");
}

#[tokio::test]
async fn test_search_movies_malformed_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = TmdbClient::with_base_url("test-key", server.uri());
    assert!(client.search_movies("batman").await.is_err());
}
