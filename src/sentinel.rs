//! Viewport sentinel for infinite scrolling.
//!
//! The feed list ends with a trailing loader row; the sentinel tracks whether
//! that row currently falls inside the visible window. Pure geometry, no
//! terminal access: the main loop pushes viewport size and scroll input into
//! it, and the prefetch trigger reads [`ViewportSentinel::in_view`].

/// Tracks the visible window over the feed rows and whether the trailing
/// loader row is on screen. A zero-height surface (no rendering surface at
/// all) never reports visibility.
#[derive(Clone, Debug, Default)]
pub struct ViewportSentinel {
    viewport_rows: usize,
    scroll_offset: usize,
    content_rows: usize,
}

impl ViewportSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.clamp_scroll();
    }

    pub fn set_content_rows(&mut self, rows: usize) {
        self.content_rows = rows;
        self.clamp_scroll();
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
    }

    /// Whether the trailing loader row is inside the visible window.
    pub fn in_view(&self) -> bool {
        if self.viewport_rows == 0 {
            return false;
        }
        // The loader row sits directly after the last content row.
        self.content_rows < self.scroll_offset + self.viewport_rows
    }

    fn total_rows(&self) -> usize {
        self.content_rows + 1
    }

    fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.viewport_rows.max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}
