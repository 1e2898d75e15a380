// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::debounce::SEARCH_DEBOUNCE_MS;
use crate::error::Result;
use crate::layout::LayoutConfig;
use crate::search::Category;

/// Attribute on `<body>` which may hold a JSON [`PageConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-schedule-config";

/// Everything the scripts need to know about the page markup and the server.
///
/// Every field has a default matching the schedule templates, so the page only has to
/// provide what differs, e.g. `{"debounce_ms": 300, "layout": {"breakpoint_px": 992}}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Where searches are posted.
    pub search_endpoint: String,
    /// Quiet period after the last keystroke before searching.
    pub debounce_ms: u32,
    /// Duration of the search box widening on focus.
    pub search_box_slide_ms: u32,
    /// Category selected when the page loads.
    pub initial_category: Category,
    /// Breakpoint and paddings of the navbar.
    pub layout: LayoutConfig,
    /// Ids of the controls.
    pub ids: ElementIds,
    /// Class names of the swept elements.
    pub classes: ClassNames,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "/search".to_owned(),
            debounce_ms: SEARCH_DEBOUNCE_MS,
            search_box_slide_ms: 250,
            initial_category: Category::All,
            layout: LayoutConfig::default(),
            ids: ElementIds::default(),
            classes: ClassNames::default(),
        }
    }
}

impl PageConfig {
    /// Parses a configuration, missing fields get their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the configuration from the body of `document`, falling back to the defaults.
    pub fn from_document(document: &web_sys::Document) -> Result<Self> {
        match document
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}

/// Ids of the controls the scripts attach to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// The navbar search input.
    pub search_box: String,
    /// The dropdown wrapping the search input.
    pub search_box_container: String,
    /// The `<select>` holding the search category.
    pub category_selector: String,
    /// The control advancing to the next category.
    pub category_rotation: String,
    /// Checkbox hiding closed sections.
    pub toggle_closed: String,
    /// Checkbox hiding freshmen-only sections.
    pub toggle_freshmen: String,
    /// Checkbox hiding sections requiring a withdrawal mark.
    pub toggle_withdrawal: String,
    /// Checkbox hiding class descriptions.
    pub toggle_description: String,
    /// The search form shown on wide viewports.
    pub full_search_form: String,
    /// The search panel shown on narrow viewports.
    pub compact_search_panel: String,
    /// Link opening the compact panel.
    pub show_compact_search: String,
    /// Link closing the compact panel.
    pub hide_compact_search: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_box: "magic-search-box".to_owned(),
            search_box_container: "magic-search-box-div".to_owned(),
            category_selector: "magic-search-category".to_owned(),
            category_rotation: "magic-search-filter".to_owned(),
            toggle_closed: "toggle-closed".to_owned(),
            toggle_freshmen: "toggle-freshmen".to_owned(),
            toggle_withdrawal: "toggle-withdrawal".to_owned(),
            toggle_description: "toggle-class-description".to_owned(),
            full_search_form: "magic-search-form".to_owned(),
            compact_search_panel: "compact-search-panel".to_owned(),
            show_compact_search: "show-compact-search".to_owned(),
            hide_compact_search: "hide-compact-search".to_owned(),
        }
    }
}

/// Class names of the elements the filters sweep over.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Every section row.
    pub section: String,
    /// Every class description.
    pub description: String,
    /// Added to the search box container while the results dropdown is open.
    pub open: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            section: "sect-target".to_owned(),
            description: "toggle-description-target".to_owned(),
            open: "open".to_owned(),
        }
    }
}
