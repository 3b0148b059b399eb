// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Scroll state management for the message area
//!
//! Auto-scroll follows new messages; manual scrolling disables it until
//! the user returns to the bottom. The total-height cache is keyed on
//! width and message count, since both change the wrapped height.

use super::messages::Message;

/// Scroll state and viewport for the message area
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll position in lines from the top
    pub offset: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Whether auto-scroll is enabled (follows new messages)
    pub auto_scroll: bool,
    /// Cached (width, message count, total height)
    cache: Option<(u16, usize, usize)>,
    /// Most recently computed total height, kept across invalidation
    last_total: usize,
}

impl ScrollState {
    /// Create a new scroll state with auto-scroll enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport_height: 20,
            auto_scroll: true,
            cache: None,
            last_total: 0,
        }
    }

    /// Update the viewport height (called on every draw)
    pub fn update_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    /// Total height of all messages at the given width, cached until the
    /// width or the message count changes.
    pub fn total_height(&mut self, messages: &[Message], width: u16) -> usize {
        if let Some((cached_width, cached_count, cached_height)) = self.cache {
            if cached_width == width && cached_count == messages.len() {
                return cached_height;
            }
        }

        let total = messages
            .iter()
            .map(|message| message.height(width) as usize)
            .sum();

        self.cache = Some((width, messages.len(), total));
        self.last_total = total;
        total
    }

    /// Scroll up by the specified number of lines, disabling auto-scroll
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        if lines > 0 {
            self.auto_scroll = false;
        }
    }

    /// Scroll down by the specified number of lines; reaching the bottom
    /// re-enables auto-scroll
    pub fn scroll_down(&mut self, lines: usize, total_height: usize) {
        let max_offset = self.max_offset(total_height);
        self.offset = (self.offset + lines).min(max_offset);
        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    /// Scroll to the bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self, total_height: usize) {
        self.offset = self.max_offset(total_height);
        self.auto_scroll = true;
    }

    /// Snap to the bottom if auto-scroll is enabled
    pub fn maybe_auto_scroll(&mut self, total_height: usize) {
        if self.auto_scroll {
            self.offset = self.max_offset(total_height);
        }
    }

    /// Half-viewport page scrolls
    pub fn page_up(&mut self) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_up(page);
    }

    pub fn page_down(&mut self, total_height: usize) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_down(page, total_height);
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self, total_height: usize) -> bool {
        self.offset >= self.max_offset(total_height)
    }

    /// Total height from the most recent draw pass, 0 before the first draw.
    /// Key handling uses this since it has no width on hand. The transcript
    /// only grows, so a value stale by one append under-clamps at worst and
    /// the next draw corrects it.
    pub fn last_total_height(&self) -> usize {
        self.last_total
    }

    /// Invalidate the height cache (call when a message's geometry could
    /// change without the count changing). The last computed total stays
    /// available for clamping until the next draw recomputes it.
    pub fn invalidate_cache(&mut self) {
        self.cache = None;
    }

    fn max_offset(&self, total_height: usize) -> usize {
        total_height.saturating_sub(self.viewport_height as usize)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
