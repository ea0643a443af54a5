//! Debounced artist search: route settled queries into tagged lookups and
//! apply only the freshest response.

use std::time::Instant;

use crate::model::{FeedApi, SEARCH_LIMIT};

use super::AppController;

impl<C: FeedApi> AppController<C> {
    /// Feeds a raw input change into the debouncer. Clearing the input
    /// settles immediately and resets search state, so the feed view returns
    /// without waiting out the delay; non-empty values debounce as usual.
    pub(crate) async fn search_input_changed(&self, value: String, now: Instant) {
        if value.is_empty() {
            self.debouncer.lock().await.reset("");
            let model = self.model.lock().await;
            model.clear_search().await;
        } else {
            self.debouncer.lock().await.input(&value, now);
        }
    }

    /// Routes a freshly settled query: empty clears search state, anything
    /// else starts a tagged lookup in the background.
    pub(crate) async fn dispatch_search(&self, query: String) {
        let model = self.model.lock().await;
        if query.is_empty() {
            model.clear_search().await;
            return;
        }
        let tag = model.begin_search(query.clone()).await;
        drop(model);

        let controller = self.clone();
        tokio::spawn(async move {
            controller.run_search(query, tag).await;
        });
    }

    /// Performs one tagged lookup. A response for a superseded tag is
    /// dropped, never displayed.
    pub(crate) async fn run_search(&self, query: String, tag: u64) {
        tracing::debug!(query, tag, "Performing artist search");
        match self.client.search_artists(&query, SEARCH_LIMIT).await {
            Ok(artists) => {
                let model = self.model.lock().await;
                if model.apply_search_results(tag, artists).await {
                    tracing::info!(query, "Search completed");
                } else {
                    tracing::debug!(query, tag, "Dropped stale search response");
                }
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                let model = self.model.lock().await;
                if model.search_failed(tag).await {
                    model.set_error(Self::format_error(&e)).await;
                }
            }
        }
    }
}
