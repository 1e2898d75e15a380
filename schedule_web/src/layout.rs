// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Which search box variant the navbar shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport, only the search icon is shown.
    CompactCollapsed,
    /// Narrow viewport, the compact search panel is open.
    CompactExpanded,
    /// Wide viewport, the full search form is shown.
    Full,
}

/// Breakpoint and paddings of the responsive navbar.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this use the compact search box.
    pub breakpoint_px: f64,
    /// Top padding of the body in [`LayoutMode::Full`].
    pub full_padding_px: f64,
    /// Top padding of the body in [`LayoutMode::CompactCollapsed`].
    pub compact_collapsed_padding_px: f64,
    /// Top padding of the body in [`LayoutMode::CompactExpanded`], room for the open panel.
    pub compact_expanded_padding_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            full_padding_px: 60.0,
            compact_collapsed_padding_px: 60.0,
            compact_expanded_padding_px: 110.0,
        }
    }
}

/// How the page looks in a given [`LayoutMode`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutFrame {
    /// The mode this frame renders.
    pub mode: LayoutMode,
    /// Top padding of the body, below the fixed navbar.
    pub padding_top_px: f64,
    /// The full search form in the navbar.
    pub full_form_visible: bool,
    /// The link opening the compact search panel.
    pub show_link_visible: bool,
    /// The link closing the compact search panel.
    pub hide_link_visible: bool,
    /// The compact search panel itself.
    pub compact_panel_visible: bool,
}

/// Tracks the navbar layout across resizes and show/hide link clicks.
#[derive(Clone, Debug)]
pub struct LayoutController {
    config: LayoutConfig,
    mode: LayoutMode,
}

impl LayoutController {
    /// Starts in the mode for `width`, with the compact panel collapsed.
    pub fn new(config: LayoutConfig, width: f64) -> Self {
        let mut this = Self {
            config,
            mode: LayoutMode::CompactCollapsed,
        };
        this.resize(width);
        this
    }

    /// The current mode.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Whether the viewport is wide enough for the full search form.
    pub fn is_full(&self) -> bool {
        self.mode == LayoutMode::Full
    }

    /// Re-evaluates the mode from the new viewport width.
    ///
    /// Wide viewports always go to [`LayoutMode::Full`]. Narrow ones keep the compact sub-state,
    /// coming from `Full` starts collapsed.
    pub fn resize(&mut self, width: f64) -> LayoutFrame {
        let previous = self.mode;
        self.mode = if width >= self.config.breakpoint_px {
            LayoutMode::Full
        } else if previous == LayoutMode::Full {
            LayoutMode::CompactCollapsed
        } else {
            previous
        };
        if previous != self.mode {
            tracing::debug!(?previous, mode = ?self.mode, width, "Layout mode changed");
        }
        self.frame()
    }

    /// The show link was clicked. Ignored unless compact.
    pub fn show_compact(&mut self) -> LayoutFrame {
        if self.mode == LayoutMode::CompactCollapsed {
            self.mode = LayoutMode::CompactExpanded;
        }
        self.frame()
    }

    /// The hide link was clicked. Ignored unless compact.
    pub fn hide_compact(&mut self) -> LayoutFrame {
        if self.mode == LayoutMode::CompactExpanded {
            self.mode = LayoutMode::CompactCollapsed;
        }
        self.frame()
    }

    /// How the current mode looks.
    pub fn frame(&self) -> LayoutFrame {
        let config = &self.config;
        match self.mode {
            LayoutMode::Full => LayoutFrame {
                mode: self.mode,
                padding_top_px: config.full_padding_px,
                full_form_visible: true,
                show_link_visible: false,
                hide_link_visible: false,
                compact_panel_visible: false,
            },
            LayoutMode::CompactCollapsed => LayoutFrame {
                mode: self.mode,
                padding_top_px: config.compact_collapsed_padding_px,
                full_form_visible: false,
                show_link_visible: true,
                hide_link_visible: false,
                compact_panel_visible: false,
            },
            LayoutMode::CompactExpanded => LayoutFrame {
                mode: self.mode,
                padding_top_px: config.compact_expanded_padding_px,
                full_form_visible: false,
                show_link_visible: false,
                hide_link_visible: true,
                compact_panel_visible: true,
            },
        }
    }

    /// CSS width of the search box, it widens on focus when there is room for it.
    pub fn search_box_width(&self, focused: bool) -> &'static str {
        if focused && self.is_full() {
            "150%"
        } else {
            "100%"
        }
    }
}
