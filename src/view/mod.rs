//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, truncation)
//! - `layout`: Search bar and status line
//! - `content`: Main content area (feed grid, search results, notices)
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{FeedState, SearchState, UiState};

/// Rows reserved above/below the content area: search bar (3) + status line (1).
const CHROME_ROWS: u16 = 4;
/// Border rows inside the content block.
const CONTENT_BORDER_ROWS: u16 = 2;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, feed: &FeedState, search: &SearchState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Feed grid / search results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state);

        content::render_content(frame, chunks[1], ui_state, feed, search);

        layout::render_status_line(frame, chunks[2], ui_state, feed, search);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }

    /// Rows the feed list gets inside the content block for a terminal of the
    /// given height. The main loop feeds this to the viewport sentinel so
    /// prefetch geometry matches what is actually drawn.
    pub fn content_viewport_rows(frame_height: u16) -> usize {
        frame_height
            .saturating_sub(CHROME_ROWS)
            .saturating_sub(CONTENT_BORDER_ROWS) as usize
    }
}
