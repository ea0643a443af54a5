//! Feed pagination state: fetched pages and continuation tracking.

use serde::Deserialize;

use super::types::Post;

/// One batch of posts returned by a single fetch, plus continuation info.
/// Immutable once fetched; items arrive pre-sorted by the data layer.
#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    pub posts: Vec<Post>,
    pub next_cursor: Option<String>,
}

/// Cursor handed to the data layer for the next page fetch.
#[derive(Clone, Debug)]
pub struct PageRequest {
    pub cursor: Option<String>,
}

/// Accumulated feed pages, in fetch order. Append-only: pages are never
/// reordered or deduplicated here. Mutated only through the methods below so
/// a failed fetch can never leave a half-appended page behind.
#[derive(Clone, Debug)]
pub struct FeedState {
    pages: Vec<Page>,
    has_more: bool,
    is_fetching: bool,
    initial_loaded: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            has_more: true,
            is_fetching: false,
            initial_loaded: false,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// True until a page arrives without a continuation cursor. Also true
    /// before the first fetch.
    pub fn has_next_page(&self) -> bool {
        self.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Whether any page response has arrived at all. Distinguishes the
    /// loading pre-state from a loaded-but-empty feed.
    pub fn loaded(&self) -> bool {
        self.initial_loaded
    }

    /// Marks a fetch in flight and returns the continuation cursor, or `None`
    /// when a fetch is already outstanding or the feed is exhausted.
    /// Reentrant triggers therefore collapse into a single request.
    pub fn try_begin_fetch(&mut self) -> Option<PageRequest> {
        if self.is_fetching || !self.has_more {
            return None;
        }
        self.is_fetching = true;
        Some(PageRequest {
            cursor: self.pages.last().and_then(|p| p.next_cursor.clone()),
        })
    }

    /// Appends the fetched page and updates continuation state.
    pub fn apply_page(&mut self, page: Page) {
        self.has_more = page.next_cursor.is_some();
        self.pages.push(page);
        self.is_fetching = false;
        self.initial_loaded = true;
    }

    /// Clears the in-flight flag after a failed fetch. Prior pages and the
    /// continuation state stay untouched, so the same trigger can retry.
    pub fn fetch_failed(&mut self) {
        self.is_fetching = false;
    }

    pub fn total_posts(&self) -> usize {
        self.pages.iter().map(|p| p.posts.len()).sum()
    }

    pub fn all_pages_empty(&self) -> bool {
        self.pages.iter().all(|p| p.posts.is_empty())
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            caption: format!("caption {id}"),
            creator_name: "Maya".to_string(),
            creator_username: "maya".to_string(),
            image_url: None,
            created_at: Utc::now(),
            likes: 0,
        }
    }

    fn page(ids: &[&str], next_cursor: Option<&str>) -> Page {
        Page {
            posts: ids.iter().map(|id| post(id)).collect(),
            next_cursor: next_cursor.map(str::to_string),
        }
    }

    #[test]
    fn has_next_page_before_any_fetch() {
        let feed = FeedState::new();
        assert!(feed.has_next_page());
        assert!(!feed.loaded());
    }

    #[test]
    fn begin_fetch_is_exclusive_while_outstanding() {
        let mut feed = FeedState::new();
        let first = feed.try_begin_fetch().expect("first fetch allowed");
        assert!(first.cursor.is_none());
        assert!(feed.try_begin_fetch().is_none());

        feed.apply_page(page(&["a", "b"], Some("2")));
        let second = feed.try_begin_fetch().expect("fetch allowed after apply");
        assert_eq!(second.cursor.as_deref(), Some("2"));
    }

    #[test]
    fn final_page_exhausts_the_feed() {
        let mut feed = FeedState::new();
        feed.try_begin_fetch().unwrap();
        feed.apply_page(page(&["a"], None));

        assert!(!feed.has_next_page());
        assert!(feed.try_begin_fetch().is_none());
        assert!(feed.loaded());
        assert!(!feed.all_pages_empty());
    }

    #[test]
    fn failed_fetch_leaves_prior_pages_and_allows_retry() {
        let mut feed = FeedState::new();
        feed.try_begin_fetch().unwrap();
        feed.apply_page(page(&["a"], Some("1")));

        feed.try_begin_fetch().unwrap();
        feed.fetch_failed();

        assert_eq!(feed.pages().len(), 1);
        assert!(feed.has_next_page());
        let retry = feed.try_begin_fetch().expect("retry allowed after failure");
        assert_eq!(retry.cursor.as_deref(), Some("1"));
    }

    #[test]
    fn empty_terminal_feed_is_loaded_and_empty() {
        let mut feed = FeedState::new();
        feed.try_begin_fetch().unwrap();
        feed.apply_page(page(&[], None));

        assert!(feed.loaded());
        assert!(feed.all_pages_empty());
        assert_eq!(feed.total_posts(), 0);
        assert!(!feed.has_next_page());
    }
}
