//! Data-layer seam: the backend contract the feed screen consumes, plus the
//! bundled local implementation that backs the binary.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use serde::Deserialize;

use super::feed::Page;
use super::types::{Artist, Post};

/// Number of posts per fetched page.
pub const PAGE_LIMIT: usize = 9;
/// Maximum artists returned for one search.
pub const SEARCH_LIMIT: usize = 40;

const LIBRARY_FILE: &str = ".cache/library.json";
const LIBRARY_ENV: &str = "FEEDGRAM_LIBRARY";

/// Backend contract the feed screen depends on. Pages arrive pre-sorted; the
/// core never re-sorts or deduplicates. Futures are Send so fetches can run
/// as background tasks.
pub trait FeedApi: Clone + Send + Sync + 'static {
    fn fetch_page(
        &self,
        cursor: Option<&str>,
        limit: usize,
    ) -> impl Future<Output = Result<Page>> + Send;

    fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Artist>>> + Send;
}

#[derive(Deserialize)]
struct Library {
    posts: Vec<Post>,
    artists: Vec<Artist>,
}

/// Serves the feed from a local JSON library file. Stands in for the remote
/// backend so the binary runs without one; posts are served newest-first in
/// library order with opaque offset cursors.
#[derive(Clone)]
pub struct LocalFeedClient {
    posts: Arc<Vec<Post>>,
    artists: Arc<Vec<Artist>>,
}

impl LocalFeedClient {
    /// Loads the library from `FEEDGRAM_LIBRARY` (or `.cache/library.json`)
    /// when present, otherwise falls back to the built-in sample feed.
    pub fn load() -> Result<Self> {
        let path = std::env::var(LIBRARY_ENV).unwrap_or_else(|_| LIBRARY_FILE.to_string());
        let library = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading library file {path}"))?;
            serde_json::from_str::<Library>(&content)
                .with_context(|| format!("parsing library file {path}"))?
        } else {
            tracing::debug!(path, "No library file found, using built-in sample");
            sample_library()
        };
        tracing::info!(
            posts = library.posts.len(),
            artists = library.artists.len(),
            "Feed library loaded"
        );
        Ok(Self {
            posts: Arc::new(library.posts),
            artists: Arc::new(library.artists),
        })
    }

    pub fn from_data(posts: Vec<Post>, artists: Vec<Artist>) -> Self {
        Self {
            posts: Arc::new(posts),
            artists: Arc::new(artists),
        }
    }
}

impl FeedApi for LocalFeedClient {
    async fn fetch_page(&self, cursor: Option<&str>, limit: usize) -> Result<Page> {
        let offset = match cursor {
            Some(c) => c.parse::<usize>().context("malformed page cursor")?,
            None => 0,
        };
        let end = (offset + limit).min(self.posts.len());
        let posts = self
            .posts
            .get(offset..end)
            .map(|s| s.to_vec())
            .unwrap_or_default();
        let next_cursor = (end < self.posts.len()).then(|| end.to_string());
        Ok(Page { posts, next_cursor })
    }

    async fn search_artists(&self, query: &str, limit: usize) -> Result<Vec<Artist>> {
        let needle = query.to_lowercase();
        Ok(self
            .artists
            .iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&needle)
                    || a.username.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

fn sample_library() -> Library {
    let creators: [(&str, &str); 6] = [
        ("Joan Mir", "joanmir"),
        ("Maya Selle", "mayaselle"),
        ("Jazz Otieno", "jazzotieno"),
        ("Lena Park", "lenapark"),
        ("Dario Funes", "dariofunes"),
        ("Ines Vidal", "inesvidal"),
    ];
    let captions = [
        "Late session at the studio",
        "New single drops Friday",
        "Soundcheck before doors",
        "Vinyl test pressing arrived",
        "Writing on the road",
        "Thanks for an unreal night",
        "Acoustic set, old songs only",
        "Back in the rehearsal room",
    ];

    let now = Utc::now();
    let posts = (0..24)
        .map(|i| {
            let (name, username) = creators[i % creators.len()];
            Post {
                id: format!("post-{i:03}"),
                caption: captions[i % captions.len()].to_string(),
                creator_name: name.to_string(),
                creator_username: username.to_string(),
                image_url: Some(format!("https://images.feedgram.dev/{i:03}.jpg")),
                created_at: now - Duration::hours(3 * i as i64),
                likes: ((i * 37) % 220) as u32,
            }
        })
        .collect();

    let artists = creators
        .iter()
        .enumerate()
        .map(|(i, (name, username))| Artist {
            id: format!("artist-{i:02}"),
            name: name.to_string(),
            username: username.to_string(),
            image_url: Some(format!("https://images.feedgram.dev/a{i:02}.jpg")),
        })
        .collect();

    Library { posts, artists }
}
