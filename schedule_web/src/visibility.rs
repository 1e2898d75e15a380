// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use crate::dom::{DomAdapter, Visibility};
use crate::marker::{FilterSet, class_list_has_any};

/// Returns `true` if `node` carries any tag in `tags`.
pub fn has_any_tag<D: DomAdapter>(dom: &D, node: &D::Node, tags: &FilterSet) -> bool {
    class_list_has_any(dom.attribute(node, "class").as_deref(), tags)
}

/// Hides every element carrying an active tag and shows all others.
///
/// This is a full sweep with no memory of earlier runs, so applying it twice with the same
/// inputs gives the same result.
pub fn apply_visibility<D: DomAdapter>(dom: &D, nodes: &[D::Node], tags: &FilterSet) {
    for node in nodes {
        let visibility = Visibility::hidden_if(has_any_tag(dom, node, tags));
        dom.set_visibility(node, visibility);
    }
}

/// Sets every element with `class` to `visibility`.
pub fn set_class_visibility<D: DomAdapter>(dom: &D, class: &str, visibility: Visibility) {
    for node in dom.elements_with_class(class) {
        dom.set_visibility(&node, visibility);
    }
}
