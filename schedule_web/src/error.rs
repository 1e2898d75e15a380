// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use wasm_bindgen::JsValue;

/// Errors of the page scripts.
///
/// None of these reach the user, event handlers log and drop them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not running in a browser window.
    #[error("no global `window` exists")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element isn't in the document.
    #[error("document has no {0}")]
    MissingElement(String),
    /// A JavaScript library the page should load is missing.
    #[error("`{0}` isn't loaded on this page")]
    MissingScript(&'static str),
    /// An exception thrown by a browser API.
    #[error("JavaScript error: {0}")]
    Js(String),
    /// The `data-schedule-config` attribute isn't valid.
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The search request failed or got an error response.
    #[error("search request failed: {0}")]
    Request(#[from] gloo_net::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
