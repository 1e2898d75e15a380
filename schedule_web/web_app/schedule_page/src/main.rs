// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! Script bundle loaded by every schedule page.

pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Start schedule page scripts");

    if let Err(err) = schedule_web::run_when_ready() {
        tracing::error!("Unable to start schedule page scripts: {err}");
    }
}
