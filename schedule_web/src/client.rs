// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! The outbound search request.

use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::error::{Error, Result};
use crate::search::SearchQuery;
use crate::util;

/// Posts `query` to `endpoint` in the background.
///
/// Failures are logged and otherwise ignored, the next keystroke sends a fresh request anyway.
pub fn submit_search(endpoint: &str, query: SearchQuery) {
    let endpoint = endpoint.to_owned();
    spawn_local(async move {
        if let Err(err) = post_search(&endpoint, &query).await {
            tracing::warn!("Search for {:?} failed: {err}", query.text);
        }
    });
}

/// Posts `query` as form data, and runs the script the server answers with.
pub async fn post_search(endpoint: &str, query: &SearchQuery) -> Result<()> {
    tracing::debug!(category = %query.category, text = %query.text, "Send search");
    let form = web_sys::UrlSearchParams::new()?;
    form.append("search", &query.text);
    form.append("category", query.category.as_str());

    let response = Request::post(endpoint).body(form)?.send().await?;
    if !response.ok() {
        return Err(Error::Js(format!(
            "{endpoint} answered {} {}",
            response.status(),
            response.status_text()
        )));
    }
    let script = response.text().await?;
    run_script(&script)
}

/// Evaluates `source` in the page, like a `<script>` tag would.
fn run_script(source: &str) -> Result<()> {
    let document = util::document()?;
    let head = document
        .head()
        .ok_or_else(|| Error::MissingElement("<head>".to_owned()))?;
    let script = document.create_element("script")?;
    script.set_text_content(Some(source));
    // The script runs synchronously on insertion, so it can be removed right away.
    head.append_child(&script)?;
    head.remove_child(&script)?;
    Ok(())
}
