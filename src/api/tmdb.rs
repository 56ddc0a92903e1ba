// src/api/tmdb.rs

use anyhow::Context;

use crate::api::models::{Movie, SearchResponse};

const TMDB_BASE: &str = "https://api.themoviedb.org/3";

/// Thin client for the TMDB v3 HTTP API. One request per call; the query
/// controller owns all caching.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, TMDB_BASE)
    }

    /// Client pointed at an alternative base URL (mock servers in tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the movie catalog. An empty `results` array is a successful
    /// empty match, not an error.
    pub async fn search_movies(&self, query: &str) -> anyhow::Result<Vec<Movie>> {
        tracing::debug!(query, "searching movies");

        let resp = self
            .http
            .get(format!("{}/search/movie", self.base_url))
            .query(&[
                ("query", query),
                ("api_key", self.api_key.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .context("movie search request failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("TMDB returned HTTP {} for movie search", status);
        }

        let body: SearchResponse = resp
            .json()
            .await
            .context("failed to decode movie search response")?;

        tracing::debug!(query, count = body.results.len(), "search completed");
        Ok(body.results)
    }
}
