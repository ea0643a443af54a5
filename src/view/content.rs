//! Main content area rendering (feed grid, search results, notices)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{view_mode, ActiveSection, FeedState, SearchState, UiState, ViewMode};

use super::utils::{format_relative_time, truncate_string};

pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    feed: &FeedState,
    search: &SearchState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Feed;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match view_mode(feed, search) {
        ViewMode::Loading => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Feed ")
                        .border_style(border_style),
                );
            frame.render_widget(loading, area);
        }
        ViewMode::SearchResults => {
            render_search_results(frame, area, search, border_style);
        }
        ViewMode::EndOfFeed => {
            let notice = Paragraph::new("End of posts")
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Feed ")
                        .padding(Padding::horizontal(1))
                        .border_style(border_style),
                );
            frame.render_widget(notice, area);
        }
        ViewMode::PaginatedGrid => {
            render_post_grid(frame, area, ui_state, feed, border_style);
        }
    }
}

fn render_search_results(frame: &mut Frame, area: Rect, search: &SearchState, border_style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Results ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if search.is_fetching() {
        let loading = Paragraph::new("Searching...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if search.failed() {
        let failed = Paragraph::new("Search failed")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(failed, area);
        return;
    }

    match search.results() {
        Some(artists) if !artists.is_empty() => {
            let items: Vec<ListItem> = artists
                .iter()
                .map(|artist| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            artist.name.clone(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            format!("@{}", artist.username),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
        Some(_) => {
            let empty = Paragraph::new("No results found")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
        }
        // begin() has run but no poll resolved yet; render like the spinner
        None => {
            let loading = Paragraph::new("Searching...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
    }
}

fn render_post_grid(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    feed: &FeedState,
    border_style: Style,
) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let caption_width = inner_width.saturating_sub(40).max(16);

    let mut items: Vec<ListItem> = Vec::with_capacity(feed.total_posts() + 1);
    for page in feed.pages() {
        for post in &page.posts {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    post.creator_name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" @{}", post.creator_username),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(
                    truncate_string(&post.caption, caption_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  ♥ {}", post.likes),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!("  {}", format_relative_time(post.created_at)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])));
        }
    }

    // Trailing sentinel row: only while more pages exist and no search text
    // is active, mirroring the prefetch conditions.
    if feed.has_next_page() && ui_state.search_input.is_empty() {
        items.push(
            ListItem::new("Loading more...").style(Style::default().fg(Color::Yellow)),
        );
    }

    let visible: Vec<ListItem> = items
        .into_iter()
        .skip(ui_state.sentinel.scroll_offset())
        .collect();

    let list = List::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Feed ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}
