// TMDB API response types.

use serde::{Deserialize, Serialize};

/// One movie record from a TMDB search. Immutable once parsed; the grid and
/// modal only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Four-digit release year, if the record carries a usable date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| d.len() >= 4)
            .map(|d| &d[..4])
    }

    /// Rating formatted for display. TMDB reports unrated titles as 0.0.
    pub fn rating_label(&self) -> String {
        if self.vote_average > 0.0 {
            format!("{:.1}/10", self.vote_average)
        } else {
            "unrated".to_string()
        }
    }

    /// Overview truncated to `max` characters for grid rows.
    pub fn overview_snippet(&self, max: usize) -> String {
        let text = self.overview.as_deref().unwrap_or("");
        if text.chars().count() <= max {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max.saturating_sub(1)).collect();
            format!("{}…", cut.trim_end())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u64,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub total_results: u64,
}
