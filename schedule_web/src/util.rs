// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use wasm_bindgen::JsCast;

use crate::error::{Error, Result};

/// Helper to get the global window
pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

/// Helper to get the HTML document
pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(Error::NoDocument)
}

/// Helper to get a DOM element by id, `None` if the page doesn't have it.
pub fn element_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Width of the viewport in CSS pixels.
pub fn viewport_width(window: &web_sys::Window) -> Result<f64> {
    window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| Error::Js("window.innerWidth is not a number".to_owned()))
}

/// Returns `true` if the event target is the element with `id`, or inside it.
pub(crate) fn event_within(event: &web_sys::Event, id: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!("#{id}")).ok().flatten())
        .is_some()
}

/// The value of an input or select element, or the text of any other element.
pub(crate) fn control_value(el: &web_sys::HtmlElement) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        Some(select.value())
    } else {
        el.text_content()
    }
}

/// Counterpart of [`control_value`].
pub(crate) fn set_control_value(el: &web_sys::HtmlElement, value: &str) {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else {
        el.set_text_content(Some(value));
    }
}

/// `Some(checked)` if `el` is a checkbox or radio input.
pub(crate) fn checked_state(el: &web_sys::HtmlElement) -> Option<bool> {
    let input = el.dyn_ref::<web_sys::HtmlInputElement>()?;
    matches!(input.type_().as_str(), "checkbox" | "radio").then(|| input.checked())
}
