//! Core type definitions for the application

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::sentinel::ViewportSentinel;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Feed,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Feed,
            ActiveSection::Feed => ActiveSection::Search,
        }
    }
}

/// A post in the feed, as returned by the data layer. Immutable snapshot;
/// the core never edits post contents.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    pub id: String,
    pub caption: String,
    pub creator_name: String,
    pub creator_username: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

/// An artist from search results
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Raw, undebounced search input. The debounced value lives in
    /// `SearchState`; this one gates the prefetch trigger and the trailing
    /// loader row.
    pub search_input: String,
    pub sentinel: ViewportSentinel,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_input: String::new(),
            sentinel: ViewportSentinel::new(),
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
