//! Key event handling

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, FeedApi};

use super::AppController;

impl<C: FeedApi> AppController<C> {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let now = Instant::now();
        let model = self.model.lock().await;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.cycle_section().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    let value = model.clear_search_input().await;
                    drop(model);
                    self.search_input_changed(value, now).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    let value = model.backspace_search().await;
                    drop(model);
                    self.search_input_changed(value, now).await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    let value = model.append_to_search(c).await;
                    drop(model);
                    self.search_input_changed(value, now).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Feed scrolling (drives the sentinel geometry)
        if ui_state.active_section == ActiveSection::Feed {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    model.scroll_feed_up(1).await;
                    return Ok(());
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    model.scroll_feed_down(1).await;
                    return Ok(());
                }
                KeyCode::PageUp => {
                    model.scroll_feed_up(10).await;
                    return Ok(());
                }
                KeyCode::PageDown => {
                    model.scroll_feed_down(10).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.cycle_section().await;
            }
            // Focus search
            KeyCode::Char('g') | KeyCode::Char('G') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
