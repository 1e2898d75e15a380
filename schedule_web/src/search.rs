// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::Deserialize;

use crate::debounce::{Debouncer, Scheduler};

/// What kind of results the search box asks for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    /// Everything that matches.
    #[default]
    All,
    /// Classes, e.g. `CSE 142`.
    Classes,
    /// Departments, e.g. Computer Science & Engineering.
    Departments,
    /// Colleges, e.g. Engineering.
    Colleges,
}

/// Prefixes typed at the start of the search box, in the order they are tried.
const PREFIXES: [(&str, Category); 4] = [
    (".a", Category::All),
    (".g", Category::Colleges),
    (".d", Category::Departments),
    (".c", Category::Classes),
];

impl Category {
    /// The value sent in the `category` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Classes => "Classes",
            Self::Departments => "Departments",
            Self::Colleges => "Colleges",
        }
    }

    /// The next category of the rotation control, which wraps around after four steps.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Classes,
            Self::Classes => Self::Departments,
            Self::Departments => Self::Colleges,
            Self::Colleges => Self::All,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The given string isn't a category name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown search category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" => Ok(Self::All),
            "Classes" => Ok(Self::Classes),
            "Departments" => Ok(Self::Departments),
            "Colleges" => Ok(Self::Colleges),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Splits a leading category prefix such as `.c` off `raw`.
///
/// Whitespace following the prefix is dropped as well, so `".c algorithms"` becomes
/// `(Some(Classes), "algorithms")`. Without a prefix the input is returned unchanged.
pub fn parse_category_prefix(raw: &str) -> (Option<Category>, &str) {
    PREFIXES
        .iter()
        .find_map(|(prefix, category)| {
            raw.strip_prefix(prefix)
                .map(|rest| (Some(*category), rest.trim_start()))
        })
        .unwrap_or((None, raw))
}

/// One outbound search, as sent to the `/search` endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// Sent as the `category` form field.
    pub category: Category,
    /// Sent as the `search` form field.
    pub text: String,
}

/// What the page has to update after a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEdit {
    /// New contents for the search box, when a prefix was stripped.
    pub text: Option<String>,
    /// New value for the category selector, when a prefix was found.
    pub category: Option<Category>,
}

/// Callback sending a search to the server.
pub type SubmitFn = Rc<dyn Fn(SearchQuery)>;

/// The navbar search box: current text and category, and the debounce of outbound searches.
pub struct SearchController<S: Scheduler> {
    text: String,
    category: Category,
    debouncer: Debouncer<S>,
    submit: SubmitFn,
}

impl<S: Scheduler> SearchController<S> {
    /// An empty search box in [`Category::All`], sending searches through `submit`.
    pub fn new(debouncer: Debouncer<S>, submit: SubmitFn) -> Self {
        Self {
            text: String::new(),
            category: Category::default(),
            debouncer,
            submit,
        }
    }

    /// Starts with `category` instead of [`Category::All`].
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// The search text, without any category prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The search the current state asks for.
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            category: self.category,
            text: self.text.clone(),
        }
    }

    /// Handles a change of the search box contents.
    ///
    /// A category prefix is consumed, and a search for the result is scheduled, replacing any
    /// search still waiting from an earlier keystroke.
    pub fn input(&mut self, raw: &str) -> InputEdit {
        let (category, text) = parse_category_prefix(raw);
        let edit = InputEdit {
            text: category.map(|_| text.to_owned()),
            category,
        };
        if let Some(category) = category {
            tracing::debug!(%category, "Category prefix in search box");
            self.category = category;
        }
        self.text = text.to_owned();
        self.schedule();
        edit
    }

    /// Sends a search right away, without touching the typed text.
    pub fn activate(&mut self, raw: &str) {
        self.debouncer.cancel();
        self.text = raw.to_owned();
        (self.submit)(self.query());
    }

    /// Advances the rotation control and returns the new category.
    pub fn cycle_category(&mut self) -> Category {
        self.select_category(self.category.next());
        self.category
    }

    /// Sets the category, e.g. from the category selector. Returns whether it changed.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.schedule();
        true
    }

    fn schedule(&mut self) {
        let query = self.query();
        let submit = self.submit.clone();
        self.debouncer.debounce(move || submit(query));
    }
}

impl<S: Scheduler> fmt::Debug for SearchController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("text", &self.text)
            .field("category", &self.category)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use super::*;
    use crate::debounce::SEARCH_DEBOUNCE_MS;
    use crate::testing::MockTimerQueue;

    type Sent = Rc<RefCell<Vec<SearchQuery>>>;

    fn controller() -> (MockTimerQueue, Sent, SearchController<MockTimerQueue>) {
        let timers = MockTimerQueue::new();
        let sent = Sent::default();
        let submit: SubmitFn = {
            let sent = sent.clone();
            Rc::new(move |query: SearchQuery| sent.borrow_mut().push(query))
        };
        let debouncer = Debouncer::new(timers.clone(), SEARCH_DEBOUNCE_MS);
        (timers, sent, SearchController::new(debouncer, submit))
    }

    fn query(category: Category, text: &str) -> SearchQuery {
        SearchQuery {
            category,
            text: text.to_owned(),
        }
    }

    #[test]
    fn prefixes_select_categories() {
        assert_eq!(parse_category_prefix(".c algorithms"), (Some(Category::Classes), "algorithms"));
        assert_eq!(parse_category_prefix(".ghealth"), (Some(Category::Colleges), "health"));
        assert_eq!(parse_category_prefix(".d cse"), (Some(Category::Departments), "cse"));
        assert_eq!(parse_category_prefix(".a"), (Some(Category::All), ""));
    }

    #[test]
    fn input_without_prefix_is_untouched() {
        assert_eq!(parse_category_prefix("cse 142"), (None, "cse 142"));
        assert_eq!(parse_category_prefix(" .c cse"), (None, " .c cse"));
        assert_eq!(parse_category_prefix(".x cse"), (None, ".x cse"));
        assert_eq!(parse_category_prefix(""), (None, ""));
    }

    #[test]
    fn only_the_leading_prefix_is_consumed() {
        assert_eq!(
            parse_category_prefix(".a .c arch"),
            (Some(Category::All), ".c arch")
        );
    }

    #[test]
    fn rotation_has_length_four() {
        let mut category = Category::Departments;
        let mut seen = Vec::new();
        for _ in 0..4 {
            category = category.next();
            seen.push(category);
        }
        assert_eq!(category, Category::Departments);
        assert_eq!(
            seen,
            [
                Category::Colleges,
                Category::All,
                Category::Classes,
                Category::Departments
            ]
        );
    }

    #[test]
    fn category_names_round_trip() {
        for category in [
            Category::All,
            Category::Classes,
            Category::Departments,
            Category::Colleges,
        ] {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
        assert_eq!(
            "Sections".parse::<Category>(),
            Err(UnknownCategory("Sections".to_owned()))
        );
    }

    #[test]
    fn typed_prefix_rewrites_box_and_selector() {
        let (timers, sent, mut search) = controller();
        let edit = search.input(".c algorithms");

        assert_eq!(edit.text.as_deref(), Some("algorithms"));
        assert_eq!(edit.category, Some(Category::Classes));
        assert_eq!(search.category(), Category::Classes);

        let _ = timers.move_forward(Duration::from_millis(150));
        assert_eq!(*sent.borrow(), [query(Category::Classes, "algorithms")]);
    }

    #[test]
    fn plain_input_needs_no_rewrite() {
        let (_timers, _sent, mut search) = controller();
        let edit = search.input("archi");
        assert_eq!(
            edit,
            InputEdit {
                text: None,
                category: None
            }
        );
        assert_eq!(search.text(), "archi");
    }

    #[test]
    fn keystroke_burst_sends_one_request() {
        let (timers, sent, mut search) = controller();
        search.input("c");
        let _ = timers.move_forward(Duration::from_millis(20));
        search.input("cs");
        let _ = timers.move_forward(Duration::from_millis(20));
        search.input(".d cse");

        assert!(sent.borrow().is_empty());
        let _ = timers.move_forward(Duration::from_millis(SEARCH_DEBOUNCE_MS.into()));
        assert_eq!(*sent.borrow(), [query(Category::Departments, "cse")]);

        let _ = timers.move_forward(Duration::from_secs(5));
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn activation_sends_immediately() {
        let (timers, sent, mut search) = controller();
        search.input(".g eng");
        search.activate("eng");

        assert_eq!(*sent.borrow(), [query(Category::Colleges, "eng")]);
        assert_eq!(search.text(), "eng");

        // the pending keystroke search was superseded
        let _ = timers.move_forward(Duration::from_secs(1));
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn activation_keeps_prefix_text() {
        let (_timers, sent, mut search) = controller();
        search.activate(".c algorithms");
        assert_eq!(*sent.borrow(), [query(Category::All, ".c algorithms")]);
    }

    #[test]
    fn last_category_change_wins() {
        let (timers, sent, mut search) = controller();
        search.input(".c graph");
        assert_eq!(search.cycle_category(), Category::Departments);
        let _ = timers.move_forward(Duration::from_millis(150));
        assert_eq!(*sent.borrow(), [query(Category::Departments, "graph")]);

        search.input(".g graph");
        assert_eq!(search.category(), Category::Colleges);
        assert!(!search.select_category(Category::Colleges));
        assert!(search.select_category(Category::All));
        let _ = timers.move_forward(Duration::from_millis(150));
        assert_eq!(sent.borrow().last(), Some(&query(Category::All, "graph")));
    }

    #[test]
    fn four_rotations_restore_category() {
        let (_timers, _sent, mut search) = controller();
        let start = search.category();
        for _ in 0..4 {
            search.cycle_category();
        }
        assert_eq!(search.category(), start);
    }
}
