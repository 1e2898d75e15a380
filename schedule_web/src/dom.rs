// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! The narrow view of the document the filters need.

use wasm_bindgen::JsCast;

/// Whether an element is displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Displayed the way the stylesheet says.
    Shown,
    /// Not displayed at all.
    Hidden,
}

impl Visibility {
    /// [`Visibility::Hidden`] when `hidden` is set.
    pub fn hidden_if(hidden: bool) -> Self {
        if hidden { Self::Hidden } else { Self::Shown }
    }
}

/// Lookup and mutation of elements, so that the classifier and applicator work without a browser.
pub trait DomAdapter {
    /// Handle of one element.
    type Node;

    /// All elements carrying `class`, in document order. Nothing matching is an empty list.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    /// The value of attribute `name` of `node`, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Shows or hides `node`.
    fn set_visibility(&self, node: &Self::Node, visibility: Visibility);
}

/// [`DomAdapter`] over a live [`web_sys::Document`].
#[derive(Clone, Debug)]
pub struct WebDom {
    document: web_sys::Document,
}

impl WebDom {
    /// Wraps `document`.
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The wrapped document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl DomAdapter for WebDom {
    type Node = web_sys::HtmlElement;

    fn elements_with_class(&self, class: &str) -> Vec<Self::Node> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|idx| collection.item(idx))
            .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .collect()
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_visibility(&self, node: &Self::Node, visibility: Visibility) {
        set_element_visibility(node, visibility);
    }
}

/// Hidden sets an inline `display: none`, shown drops the inline override so the stylesheet
/// applies again.
pub(crate) fn set_element_visibility(node: &web_sys::HtmlElement, visibility: Visibility) {
    let style = node.style();
    let result = match visibility {
        Visibility::Hidden => style.set_property("display", "none"),
        Visibility::Shown => style.remove_property("display").map(drop),
    };
    if let Err(err) = result {
        tracing::warn!("Unable to set display of element: {err:?}");
    }
}
