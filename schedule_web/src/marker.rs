// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

type CowStr = Cow<'static, str>;

/// A class name marking a filterable property of a section, e.g. `sect-closed`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkerTag(CowStr);

impl MarkerTag {
    /// The section is closed for enrollment.
    pub const CLOSED: Self = Self(Cow::Borrowed("sect-closed"));
    /// The section is restricted to freshmen.
    pub const FRESHMEN: Self = Self(Cow::Borrowed("sect-freshmen"));
    /// The section only accepts enrollment with a withdrawal mark.
    pub const WITHDRAWAL: Self = Self(Cow::Borrowed("sect-withdrawal"));

    /// A tag for any other class name.
    pub fn new(tag: impl Into<CowStr>) -> Self {
        Self(tag.into())
    }

    /// The class name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The marker tags currently selected for hiding.
///
/// Kept in insertion order, but only membership matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    tags: Vec<MarkerTag>,
}

impl FilterSet {
    /// An empty set, nothing is hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag`, returns `false` if it was already present.
    pub fn insert(&mut self, tag: MarkerTag) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes `tag`, returns `false` if it wasn't present.
    pub fn remove(&mut self, tag: &MarkerTag) -> bool {
        let len = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != len
    }

    /// Whether `tag` is selected.
    pub fn contains(&self, tag: &MarkerTag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether no tag is selected.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of selected tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// The selected tags, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MarkerTag> {
        self.tags.iter()
    }
}

impl FromIterator<MarkerTag> for FilterSet {
    fn from_iter<I: IntoIterator<Item = MarkerTag>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Returns `true` if the whitespace separated `class_attr` contains any tag of `tags`.
///
/// A missing or empty class attribute never matches.
pub fn class_list_has_any(class_attr: Option<&str>, tags: &FilterSet) -> bool {
    let Some(class_attr) = class_attr else {
        return false;
    };
    class_attr
        .split_ascii_whitespace()
        .any(|class| tags.iter().any(|tag| tag.as_str() == class))
}
