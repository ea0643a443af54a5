//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! drives the debounced search, and evaluates the prefetch trigger.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `feed`: Guarded page fetches and the viewport prefetch trigger
//! - `search`: Debounce routing and tagged artist lookups

mod input;
mod feed;
mod search;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::debounce::Debouncer;
use crate::model::{AppModel, FeedApi};

/// How long the search input must stay unchanged before a lookup runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct AppController<C: FeedApi> {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) client: C,
    pub(crate) debouncer: Arc<Mutex<Debouncer>>,
}

impl<C: FeedApi> Clone for AppController<C> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            client: self.client.clone(),
            debouncer: self.debouncer.clone(),
        }
    }
}

impl<C: FeedApi> AppController<C> {
    pub fn new(model: Arc<Mutex<AppModel>>, client: C) -> Self {
        Self {
            model,
            client,
            debouncer: Arc::new(Mutex::new(Debouncer::new(SEARCH_DEBOUNCE))),
        }
    }

    /// One pass of the timed work the main loop runs every poll interval:
    /// settle the debouncer, then re-evaluate the prefetch trigger.
    pub async fn on_tick(&self, now: Instant) {
        let settled = self.debouncer.lock().await.poll(now);
        if let Some(query) = settled {
            self.dispatch_search(query).await;
        }
        self.maybe_fetch_next_page().await;
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        format!("Error: {error:#}")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, VecDeque};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    use anyhow::Result;
    use chrono::Utc;
    use tokio::sync::{Mutex, Semaphore};

    use crate::model::{AppModel, Artist, FeedApi, Page, Post};

    use super::AppController;

    /// Scriptable data layer for controller tests. Page responses pop from a
    /// queue; search responses are keyed by query. Both paths can be gated on
    /// a semaphore so tests control when a response "arrives".
    #[derive(Clone)]
    pub(crate) struct StubApi {
        pub page_calls: Arc<AtomicUsize>,
        pub search_calls: Arc<AtomicUsize>,
        pub page_gate: Arc<Semaphore>,
        pub search_gate: Arc<Semaphore>,
        pages: Arc<StdMutex<VecDeque<Result<Page>>>>,
        searches: Arc<StdMutex<HashMap<String, Result<Vec<Artist>>>>>,
    }

    impl StubApi {
        /// Ungated stub: responses resolve as soon as they are requested.
        pub(crate) fn open(pages: Vec<Result<Page>>) -> Self {
            Self::with_gates(pages, usize::MAX >> 4, usize::MAX >> 4)
        }

        /// Fully gated stub: nothing resolves until a test adds permits.
        pub(crate) fn gated(pages: Vec<Result<Page>>) -> Self {
            Self::with_gates(pages, 0, 0)
        }

        fn with_gates(pages: Vec<Result<Page>>, page_permits: usize, search_permits: usize) -> Self {
            Self {
                page_calls: Arc::new(AtomicUsize::new(0)),
                search_calls: Arc::new(AtomicUsize::new(0)),
                page_gate: Arc::new(Semaphore::new(page_permits)),
                search_gate: Arc::new(Semaphore::new(search_permits)),
                pages: Arc::new(StdMutex::new(pages.into_iter().collect())),
                searches: Arc::new(StdMutex::new(HashMap::new())),
            }
        }

        pub(crate) fn on_search(&self, query: &str, response: Result<Vec<Artist>>) {
            self.searches.lock().unwrap().insert(query.to_string(), response);
        }
    }

    impl FeedApi for StubApi {
        async fn fetch_page(&self, _cursor: Option<&str>, _limit: usize) -> Result<Page> {
            self.page_calls.fetch_add(1, Ordering::SeqCst);
            let permit = self.page_gate.acquire().await.expect("gate closed");
            permit.forget();
            match self.pages.lock().unwrap().pop_front() {
                Some(response) => response,
                None => Ok(empty_page()),
            }
        }

        async fn search_artists(&self, query: &str, _limit: usize) -> Result<Vec<Artist>> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            let permit = self.search_gate.acquire().await.expect("gate closed");
            permit.forget();
            match self.searches.lock().unwrap().remove(query) {
                Some(response) => response,
                None => Ok(Vec::new()),
            }
        }
    }

    pub(crate) fn controller(stub: StubApi) -> AppController<StubApi> {
        AppController::new(Arc::new(Mutex::new(AppModel::new())), stub)
    }

    pub(crate) fn empty_page() -> Page {
        Page {
            posts: Vec::new(),
            next_cursor: None,
        }
    }

    pub(crate) fn page_of(count: usize, next_cursor: Option<&str>) -> Page {
        Page {
            posts: (0..count)
                .map(|i| Post {
                    id: format!("post-{i}"),
                    caption: format!("caption {i}"),
                    creator_name: "Joan Mir".to_string(),
                    creator_username: "joanmir".to_string(),
                    image_url: None,
                    created_at: Utc::now(),
                    likes: 0,
                })
                .collect(),
            next_cursor: next_cursor.map(str::to_string),
        }
    }

    pub(crate) fn artist(id: &str, name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            username: name.to_lowercase().replace(' ', ""),
            image_url: None,
        }
    }

}
