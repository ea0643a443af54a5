//! Derived view selection for the feed screen.

use super::feed::FeedState;
use super::search::SearchState;

/// The mutually exclusive display state of the feed screen. Recomputed from
/// primitive state on every evaluation and never stored, so switching between
/// typing and clearing search can never leave a stale view behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Pre-state: no page response has arrived yet, everything renders as a
    /// global loader.
    Loading,
    /// A debounced query is active; search output replaces the grid.
    SearchResults,
    /// Query empty and every fetched page came back without posts.
    EndOfFeed,
    /// Query empty and at least one fetched page has posts.
    PaginatedGrid,
}

/// Pure function of (FeedState, SearchState); there is no stored
/// "current view" field anywhere.
pub fn view_mode(feed: &FeedState, search: &SearchState) -> ViewMode {
    if !feed.loaded() {
        return ViewMode::Loading;
    }
    if search.is_active() {
        return ViewMode::SearchResults;
    }
    if feed.all_pages_empty() {
        ViewMode::EndOfFeed
    } else {
        ViewMode::PaginatedGrid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feed::Page;
    use crate::model::types::Post;
    use chrono::Utc;

    fn loaded_feed(page_sizes: &[usize], has_more: bool) -> FeedState {
        let mut feed = FeedState::new();
        for (i, &size) in page_sizes.iter().enumerate() {
            feed.try_begin_fetch().unwrap();
            let last = i == page_sizes.len() - 1;
            let posts = (0..size)
                .map(|n| Post {
                    id: format!("p{i}-{n}"),
                    caption: String::new(),
                    creator_name: "Ada".to_string(),
                    creator_username: "ada".to_string(),
                    image_url: None,
                    created_at: Utc::now(),
                    likes: 0,
                })
                .collect();
            feed.apply_page(Page {
                posts,
                next_cursor: (!last || has_more).then(|| "c".to_string()),
            });
        }
        feed
    }

    #[test]
    fn unloaded_feed_is_the_loading_pre_state() {
        let feed = FeedState::new();
        let mut search = SearchState::default();
        assert_eq!(view_mode(&feed, &search), ViewMode::Loading);

        // The pre-state gates everything, even an active query.
        search.begin("jo".to_string());
        assert_eq!(view_mode(&feed, &search), ViewMode::Loading);
    }

    #[test]
    fn active_query_wins_regardless_of_feed_contents() {
        let mut search = SearchState::default();
        search.begin("jazz".to_string());

        assert_eq!(
            view_mode(&loaded_feed(&[3, 2], false), &search),
            ViewMode::SearchResults
        );
        assert_eq!(
            view_mode(&loaded_feed(&[0], false), &search),
            ViewMode::SearchResults
        );
    }

    #[test]
    fn all_empty_pages_mean_end_of_feed() {
        let search = SearchState::default();
        assert_eq!(
            view_mode(&loaded_feed(&[0], false), &search),
            ViewMode::EndOfFeed
        );
        assert_eq!(
            view_mode(&loaded_feed(&[0, 0], false), &search),
            ViewMode::EndOfFeed
        );
    }

    #[test]
    fn any_non_empty_page_means_grid() {
        let search = SearchState::default();
        assert_eq!(
            view_mode(&loaded_feed(&[3], true), &search),
            ViewMode::PaginatedGrid
        );
        assert_eq!(
            view_mode(&loaded_feed(&[0, 2], false), &search),
            ViewMode::PaginatedGrid
        );
    }

    #[test]
    fn clearing_the_query_reverts_to_the_grid() {
        let feed = loaded_feed(&[3], false);
        let mut search = SearchState::default();
        let tag = search.begin("jo".to_string());
        search.apply(tag, Vec::new());
        assert_eq!(view_mode(&feed, &search), ViewMode::SearchResults);

        search.clear();
        assert_eq!(view_mode(&feed, &search), ViewMode::PaginatedGrid);
    }
}
