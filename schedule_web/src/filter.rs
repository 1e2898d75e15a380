// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use crate::dom::{DomAdapter, Visibility};
use crate::marker::{FilterSet, MarkerTag};
use crate::visibility::{apply_visibility, set_class_visibility};

/// One of the section filter checkboxes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterSwitch {
    /// Hide closed sections.
    Closed,
    /// Hide sections restricted to freshmen.
    Freshmen,
    /// Hide sections requiring a withdrawal mark.
    Withdrawal,
}

impl FilterSwitch {
    /// Every switch, in page order.
    pub const ALL: [Self; 3] = [Self::Closed, Self::Freshmen, Self::Withdrawal];

    /// The marker tag this switch hides.
    pub fn tag(self) -> MarkerTag {
        match self {
            Self::Closed => MarkerTag::CLOSED,
            Self::Freshmen => MarkerTag::FRESHMEN,
            Self::Withdrawal => MarkerTag::WITHDRAWAL,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Closed => 0,
            Self::Freshmen => 1,
            Self::Withdrawal => 2,
        }
    }
}

/// State of the section filters and the class description toggle on a section index page.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    switches: [bool; 3],
    active: FilterSet,
    hide_descriptions: bool,
}

impl FilterState {
    /// All switches off, descriptions shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `switch` is on.
    pub fn is_active(&self, switch: FilterSwitch) -> bool {
        self.switches[switch.index()]
    }

    /// The union of the tags of all active switches.
    pub fn active_tags(&self) -> &FilterSet {
        &self.active
    }

    /// Whether class descriptions are hidden.
    pub fn hides_descriptions(&self) -> bool {
        self.hide_descriptions
    }

    /// Sets `switch`, returns whether the filter set changed.
    pub fn set(&mut self, switch: FilterSwitch, on: bool) -> bool {
        self.switches[switch.index()] = on;
        if on {
            self.active.insert(switch.tag())
        } else {
            self.active.remove(&switch.tag())
        }
    }

    /// Flips `switch` and returns its new state.
    pub fn toggle(&mut self, switch: FilterSwitch) -> bool {
        let on = !self.is_active(switch);
        self.set(switch, on);
        tracing::debug!(?switch, on, "Toggled section filter");
        on
    }

    /// Flips `switch` and re-applies visibility to every element with `section_class`.
    pub fn toggle_and_apply<D: DomAdapter>(
        &mut self,
        switch: FilterSwitch,
        dom: &D,
        section_class: &str,
    ) -> bool {
        let on = self.toggle(switch);
        self.apply(dom, section_class);
        on
    }

    /// Shows or hides every element with `section_class` according to the active tags.
    pub fn apply<D: DomAdapter>(&self, dom: &D, section_class: &str) {
        let sections = dom.elements_with_class(section_class);
        apply_visibility(dom, &sections, &self.active);
    }

    /// Flips the description toggle, and hides or shows every element with `description_class`.
    pub fn toggle_descriptions<D: DomAdapter>(&mut self, dom: &D, description_class: &str) -> bool {
        let hide = !self.hide_descriptions;
        self.set_descriptions(hide, dom, description_class);
        hide
    }

    /// Hides every element with `description_class` when `hide` is set, shows them otherwise.
    pub fn set_descriptions<D: DomAdapter>(
        &mut self,
        hide: bool,
        dom: &D,
        description_class: &str,
    ) {
        self.hide_descriptions = hide;
        tracing::debug!(hidden = hide, "Set class descriptions");
        set_class_visibility(dom, description_class, Visibility::hidden_if(hide));
    }
}
