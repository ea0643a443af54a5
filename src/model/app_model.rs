//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use super::feed::{FeedState, Page, PageRequest};
use super::search::SearchState;
use super::types::{ActiveSection, Artist, UiState};

/// Main application model containing all state. FeedState and SearchState are
/// owned here for the lifetime of the view and mutated only through these
/// methods; the view reads cloned snapshots.
pub struct AppModel {
    feed: Arc<Mutex<FeedState>>,
    search: Arc<Mutex<SearchState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            feed: Arc::new(Mutex::new(FeedState::new())),
            search: Arc::new(Mutex::new(SearchState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn get_feed_state(&self) -> FeedState {
        self.feed.lock().await.clone()
    }

    pub async fn get_search_state(&self) -> SearchState {
        self.search.lock().await.clone()
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Feed pagination
    // ========================================================================

    /// Marks a page fetch in flight and returns its cursor, or `None` when a
    /// fetch is already outstanding or the feed is exhausted.
    pub async fn try_begin_page_fetch(&self) -> Option<PageRequest> {
        self.feed.lock().await.try_begin_fetch()
    }

    /// Appends a fetched page and keeps the sentinel geometry in step with
    /// the grown feed.
    pub async fn apply_page(&self, page: Page) {
        let mut feed = self.feed.lock().await;
        feed.apply_page(page);
        let total = feed.total_posts();
        drop(feed);

        let mut state = self.ui_state.lock().await;
        state.sentinel.set_content_rows(total);
    }

    pub async fn page_fetch_failed(&self) {
        self.feed.lock().await.fetch_failed();
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn begin_search(&self, query: String) -> u64 {
        self.search.lock().await.begin(query)
    }

    pub async fn apply_search_results(&self, tag: u64, artists: Vec<Artist>) -> bool {
        self.search.lock().await.apply(tag, artists)
    }

    pub async fn search_failed(&self, tag: u64) -> bool {
        self.search.lock().await.fail(tag)
    }

    pub async fn clear_search(&self) {
        self.search.lock().await.clear();
    }

    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
        state.search_input.clone()
    }

    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
        state.search_input.clone()
    }

    pub async fn clear_search_input(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.clear();
        state.search_input.clone()
    }

    // ========================================================================
    // Sections, scrolling, sentinel geometry
    // ========================================================================

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn scroll_feed_up(&self, lines: usize) {
        let mut state = self.ui_state.lock().await;
        state.sentinel.scroll_up(lines);
    }

    pub async fn scroll_feed_down(&self, lines: usize) {
        let mut state = self.ui_state.lock().await;
        state.sentinel.scroll_down(lines);
    }

    pub async fn set_viewport_rows(&self, rows: usize) {
        let mut state = self.ui_state.lock().await;
        state.sentinel.set_viewport_rows(rows);
    }

    // ========================================================================
    // Errors & overlays
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
