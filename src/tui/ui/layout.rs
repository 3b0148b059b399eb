// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! Widget geometry
//!
//! Layout is a pure function of the terminal area and the three view
//! flags. No state is read or written here, so every flag combination is
//! testable without a terminal.

use ratatui::prelude::*;

/// Anchored (non-fullscreen) widget dimensions
const ANCHORED_WIDTH: u16 = 80;
const ANCHORED_HEIGHT: u16 = 24;

/// Width of the sources panel when open
const SOURCES_WIDTH: u16 = 32;

/// Layout regions. `sources` and `input` are `None` when their region is
/// hidden (panel closed, or the widget is minimized).
#[derive(Clone, Copy, Debug)]
pub struct WidgetLayout {
    /// Outer bounds of the whole widget
    pub widget: Rect,
    pub title_bar: Rect,
    pub messages: Rect,
    pub sources: Option<Rect>,
    pub input: Option<Rect>,
}

/// Compute the widget regions for the given terminal area and view flags.
///
/// Fullscreen fills the terminal; otherwise the widget anchors to the
/// bottom-right corner, shrinking to fit small terminals. Minimized
/// collapses everything but the title bar.
pub fn calculate_layout(
    area: Rect,
    minimized: bool,
    fullscreen: bool,
    sources_open: bool,
) -> WidgetLayout {
    let widget = if fullscreen {
        area
    } else {
        anchored_rect(area, minimized)
    };

    let title_height = 1;
    let title_bar = Rect {
        x: widget.x,
        y: widget.y,
        width: widget.width,
        height: title_height.min(widget.height),
    };

    if minimized {
        return WidgetLayout {
            widget: title_bar,
            title_bar,
            messages: Rect::default(),
            sources: None,
            input: None,
        };
    }

    let input_height = 3;
    let body_height = widget
        .height
        .saturating_sub(title_height)
        .saturating_sub(input_height);

    let sources_width = if sources_open {
        SOURCES_WIDTH.min(widget.width / 2)
    } else {
        0
    };

    let messages = Rect {
        x: widget.x,
        y: widget.y + title_height,
        width: widget.width.saturating_sub(sources_width),
        height: body_height,
    };

    let sources = (sources_width > 0).then_some(Rect {
        x: widget.x + widget.width - sources_width,
        y: widget.y + title_height,
        width: sources_width,
        height: body_height,
    });

    let input = Rect {
        x: widget.x,
        y: widget.y + title_height + body_height,
        width: widget.width,
        height: input_height.min(widget.height.saturating_sub(title_height)),
    };

    WidgetLayout {
        widget,
        title_bar,
        messages,
        sources,
        input: Some(input),
    }
}

/// Bottom-right anchored rect, clamped to the terminal.
fn anchored_rect(area: Rect, minimized: bool) -> Rect {
    let width = ANCHORED_WIDTH.min(area.width);
    let height = if minimized {
        1
    } else {
        ANCHORED_HEIGHT.min(area.height)
    };

    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn test_anchored_bottom_right() {
        let layout = calculate_layout(terminal(), false, false, false);

        assert_eq!(layout.widget.width, 80);
        assert_eq!(layout.widget.height, 24);
        assert_eq!(layout.widget.x + layout.widget.width, 120);
        assert_eq!(layout.widget.y + layout.widget.height, 40);
    }

    #[test]
    fn test_fullscreen_fills_terminal() {
        let layout = calculate_layout(terminal(), false, true, false);
        assert_eq!(layout.widget, terminal());
    }

    #[test]
    fn test_minimized_is_title_bar_only() {
        let layout = calculate_layout(terminal(), true, false, false);

        assert_eq!(layout.widget.height, 1);
        assert_eq!(layout.title_bar, layout.widget);
        assert_eq!(layout.messages.height, 0);
        assert!(layout.sources.is_none());
        assert!(layout.input.is_none());
    }

    #[test]
    fn test_minimized_fullscreen_keeps_full_width_bar() {
        let layout = calculate_layout(terminal(), true, true, false);

        assert_eq!(layout.title_bar.width, 120);
        assert_eq!(layout.title_bar.height, 1);
        assert!(layout.input.is_none());
    }

    #[test]
    fn test_sources_panel_splits_body() {
        let layout = calculate_layout(terminal(), false, false, true);

        let sources = layout.sources.unwrap();
        assert_eq!(sources.width, 32);
        assert_eq!(layout.messages.width + sources.width, layout.widget.width);
        assert_eq!(sources.y, layout.messages.y);
        assert_eq!(sources.height, layout.messages.height);
    }

    #[test]
    fn test_sources_panel_clamped_on_narrow_widget() {
        let narrow = Rect::new(0, 0, 40, 24);
        let layout = calculate_layout(narrow, false, false, true);

        let sources = layout.sources.unwrap();
        assert!(sources.width <= layout.widget.width / 2);
    }

    #[test]
    fn test_regions_tile_the_widget() {
        let layout = calculate_layout(terminal(), false, false, false);
        let input = layout.input.unwrap();

        assert_eq!(layout.messages.y, layout.title_bar.y + 1);
        assert_eq!(input.y, layout.messages.y + layout.messages.height);
        assert_eq!(
            input.y + input.height,
            layout.widget.y + layout.widget.height
        );
    }

    #[test]
    fn test_toggle_twice_restores_layout() {
        let base = calculate_layout(terminal(), false, false, false);

        for (minimized, fullscreen, sources) in
            [(true, false, false), (false, true, false), (false, false, true)]
        {
            let toggled = calculate_layout(terminal(), minimized, fullscreen, sources);
            assert_ne!(format!("{toggled:?}"), format!("{base:?}"));
            let restored = calculate_layout(terminal(), false, false, false);
            assert_eq!(format!("{restored:?}"), format!("{base:?}"));
        }
    }

    #[test]
    fn test_flags_independent() {
        // Fullscreen + sources: panel carves out of the full terminal
        let layout = calculate_layout(terminal(), false, true, true);
        assert_eq!(layout.widget, terminal());
        assert!(layout.sources.is_some());
    }

    #[test]
    fn test_small_terminal_clamps() {
        let tiny = Rect::new(0, 0, 30, 8);
        let layout = calculate_layout(tiny, false, false, false);

        assert!(layout.widget.width <= 30);
        assert!(layout.widget.height <= 8);
        assert!(layout.messages.height > 0);
    }
}
