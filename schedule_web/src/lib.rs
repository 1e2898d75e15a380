// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

//! Browser scripting for the course schedule pages.
//!
//! The server renders the pages; this crate attaches to the finished markup and handles
//!
//! - the section filters, which hide closed, freshmen only or withdrawal sections
//!   ([`FilterState`], [`apply_visibility`]),
//! - the navbar search box, which debounces keystrokes into `POST /search` requests and
//!   understands category prefixes like `.c` ([`SearchController`], [`Debouncer`]),
//! - the responsive navbar, switching between the compact and full search box
//!   ([`LayoutController`]),
//! - Bootstrap tooltips and popovers.
//!
//! Everything but [`Page`] and the request glue is independent of the browser and works
//! against the [`DomAdapter`] and [`Scheduler`] traits.
//!
//! A page binary only has to install its logging and call [`run_when_ready`]:
//!
//! ```no_run
//! if let Err(err) = schedule_web::run_when_ready() {
//!     tracing::error!("Unable to start: {err}");
//! }
//! ```

mod bootstrap;
mod client;
mod config;
mod debounce;
mod dom;
mod error;
mod filter;
mod layout;
mod marker;
mod page;
mod search;
mod util;
mod visibility;

#[cfg(test)]
mod testing;

pub use client::{post_search, submit_search};
pub use config::{CONFIG_ATTRIBUTE, ClassNames, ElementIds, PageConfig};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS, Scheduler, WebScheduler};
pub use dom::{DomAdapter, Visibility, WebDom};
pub use error::{Error, Result};
pub use filter::{FilterState, FilterSwitch};
pub use layout::{LayoutConfig, LayoutController, LayoutFrame, LayoutMode};
pub use marker::{FilterSet, MarkerTag, class_list_has_any};
pub use page::{Page, run_when_ready};
pub use search::{
    Category, InputEdit, SearchController, SearchQuery, SubmitFn, UnknownCategory,
    parse_category_prefix,
};
pub use util::{document, element_by_id, viewport_width, window};
pub use visibility::{apply_visibility, has_any_tag, set_class_visibility};
