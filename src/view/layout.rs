//! Search bar and status line rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{view_mode, ActiveSection, FeedState, SearchState, UiState, ViewMode};

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Search;

    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_input.is_empty() {
        "Search artists..."
    } else {
        &ui_state.search_input
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, area);
}

pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    feed: &FeedState,
    search: &SearchState,
) {
    let text = match view_mode(feed, search) {
        ViewMode::Loading => "Loading feed...".to_string(),
        ViewMode::SearchResults => {
            if search.is_fetching() {
                format!("Searching \"{}\"...", search.query())
            } else {
                let count = search.results().map(<[_]>::len).unwrap_or(0);
                format!("{} artists match \"{}\"", count, search.query())
            }
        }
        ViewMode::EndOfFeed => "Feed is empty".to_string(),
        ViewMode::PaginatedGrid => {
            let mut text = format!(
                "{} posts across {} pages",
                feed.total_posts(),
                feed.pages().len()
            );
            if feed.is_fetching() {
                text.push_str("  ·  loading more");
            } else if !feed.has_next_page() {
                text.push_str("  ·  all caught up");
            }
            text
        }
    };

    let help_hint = if ui_state.show_help_popup { "" } else { "  [H]elp" };
    let status = Paragraph::new(format!(" {text}{help_hint}"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
