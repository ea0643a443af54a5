//! Feed pagination: guarded next-page fetches and the viewport prefetch trigger.

use crate::model::{FeedApi, PAGE_LIMIT};

use super::AppController;

impl<C: FeedApi> AppController<C> {
    /// Prefetch trigger, re-evaluated every tick: fires a next-page fetch
    /// when the sentinel row is visible, no search text is active, more data
    /// exists, and no fetch is outstanding. Active search suppresses
    /// pagination even with the sentinel in view.
    pub(crate) async fn maybe_fetch_next_page(&self) {
        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;
        if !ui_state.sentinel.in_view() || !ui_state.search_input.is_empty() {
            return;
        }
        let feed = model.get_feed_state().await;
        if !feed.has_next_page() || feed.is_fetching() {
            return;
        }
        drop(model);

        let controller = self.clone();
        tokio::spawn(async move {
            controller.fetch_next_page().await;
        });
    }

    /// Requests the next page. A no-op while a fetch is outstanding or when
    /// the feed is exhausted, so bursts of triggers collapse into at most one
    /// request.
    pub async fn fetch_next_page(&self) {
        let request = {
            let model = self.model.lock().await;
            model.try_begin_page_fetch().await
        };
        let Some(request) = request else {
            return;
        };

        tracing::debug!(cursor = ?request.cursor, "Fetching next feed page");
        match self.client.fetch_page(request.cursor.as_deref(), PAGE_LIMIT).await {
            Ok(page) => {
                tracing::info!(
                    posts = page.posts.len(),
                    has_more = page.next_cursor.is_some(),
                    "Feed page loaded"
                );
                let model = self.model.lock().await;
                model.apply_page(page).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Feed page fetch failed");
                let model = self.model.lock().await;
                model.page_fetch_failed().await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }
}
