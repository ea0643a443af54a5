//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (entities, UI state, etc.)
//! - `feed`: Paginated feed state (fetched pages, continuation tracking)
//! - `search`: Debounced artist search state with stale-response suppression
//! - `view_mode`: Derived view selection for the feed screen
//! - `client`: Data-layer contract and the bundled local implementation
//! - `app_model`: Main application model with state management methods

mod types;
mod feed;
mod search;
mod view_mode;
mod client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Artist, Post, UiState};

pub use feed::{FeedState, Page, PageRequest};

pub use search::SearchState;

pub use view_mode::{view_mode, ViewMode};

pub use client::{FeedApi, LocalFeedClient, PAGE_LIMIT, SEARCH_LIMIT};

pub use app_model::AppModel;
