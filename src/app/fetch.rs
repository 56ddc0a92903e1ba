// Data fetching: spawns the async task that queries TMDB for the active key.

use crate::action::Action;
use crate::app::App;

impl App {
    /// Spawn a background search whose result (or error) comes back as a
    /// SearchCompleted action tagged with the generation id. The controller
    /// discards results for superseded generations.
    pub(super) fn spawn_search(&self, query: String, query_id: u64) {
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = client
                .search_movies(&query)
                .await
                .map_err(|e| e.to_string());
            if let Err(ref reason) = result {
                tracing::warn!(query = %query, reason = %reason, "movie search failed");
            }
            tx.send(Action::SearchCompleted { query_id, result }).ok();
        });
    }
}
