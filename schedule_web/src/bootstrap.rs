// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! Bootstrap tooltips and popovers, which are jQuery plugins loaded by the page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use crate::error::{Error, Result};

/// Selectors of the elements to enable, and the plugin each gets.
const PLUGINS: [(&str, &str); 2] = [
    ("[data-toggle='tooltip']", "tooltip"),
    ("[data-toggle='popover']", "popover"),
];

/// Enables the tooltip and popover plugins on every element declaring them with `data-toggle`.
pub(crate) fn activate_plugins(window: &web_sys::Window) -> Result<()> {
    let jquery = Reflect::get(window, &JsValue::from_str("jQuery"))?;
    let jquery = jquery
        .dyn_ref::<Function>()
        .ok_or(Error::MissingScript("jQuery"))?;

    for (selector, plugin) in PLUGINS {
        let matched = jquery.call1(&JsValue::NULL, &JsValue::from_str(selector))?;
        let method = Reflect::get(&matched, &JsValue::from_str(plugin))?;
        match method.dyn_ref::<Function>() {
            Some(method) => {
                method.call0(&matched)?;
            }
            None => tracing::warn!("Bootstrap {plugin} plugin isn't loaded"),
        }
    }
    Ok(())
}
