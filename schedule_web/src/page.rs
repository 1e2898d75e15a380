// Copyright 2026 the Schedule Web Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

use crate::bootstrap;
use crate::client;
use crate::config::PageConfig;
use crate::debounce::{Debouncer, WebScheduler};
use crate::dom::{Visibility, WebDom, set_element_visibility};
use crate::error::Result;
use crate::filter::{FilterState, FilterSwitch};
use crate::layout::{LayoutController, LayoutFrame};
use crate::search::{Category, SearchController, SearchQuery, SubmitFn};
use crate::util;

/// The scripts of one schedule page, attached to its document.
pub struct Page {
    inner: Rc<RefCell<PageInner>>,
    // Closures are retained so they can be called by the browser
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

struct PageInner {
    config: PageConfig,
    window: web_sys::Window,
    dom: WebDom,
    filters: FilterState,
    search: SearchController<WebScheduler>,
    layout: LayoutController,
}

type Handler = dyn FnMut(&mut PageInner, &web_sys::Event) -> Result<()>;

impl Page {
    /// Reads the page configuration, brings the page into its initial state and registers all
    /// event handlers.
    pub fn attach(window: web_sys::Window, document: web_sys::Document) -> Result<Self> {
        let config = PageConfig::from_document(&document)?;
        tracing::debug!(?config, "Attach schedule page");

        let submit: SubmitFn = {
            let endpoint: Rc<str> = config.search_endpoint.as_str().into();
            Rc::new(move |query: SearchQuery| client::submit_search(&endpoint, query))
        };
        let debouncer = Debouncer::new(WebScheduler, config.debounce_ms);
        let search =
            SearchController::new(debouncer, submit).with_category(config.initial_category);
        let layout = LayoutController::new(config.layout.clone(), util::viewport_width(&window)?);

        let mut inner = PageInner {
            config,
            window: window.clone(),
            dom: WebDom::new(document.clone()),
            filters: FilterState::new(),
            search,
            layout,
        };
        inner.restore_filters();
        inner.apply_layout(inner.layout.frame());
        inner.show_category(inner.search.category());

        if let Err(err) = bootstrap::activate_plugins(&window) {
            tracing::warn!("Tooltips and popovers are disabled: {err}");
        }

        let mut page = Self {
            inner: Rc::new(RefCell::new(inner)),
            listeners: Vec::new(),
        };
        page.register(&window, &document);
        Ok(page)
    }

    /// Keep responding to events for the rest of the page's life.
    ///
    /// Because we don't want to block the render thread, we return immediately here. The page is
    /// forgotten, which keeps the closures alive.
    pub fn run(self) {
        std::mem::forget(self);
    }

    fn register(&mut self, window: &web_sys::Window, document: &web_sys::Document) {
        let ids = self.inner.borrow().config.ids.clone();

        // The search box may be re-rendered, so its events are delegated to the document.
        self.on_within(document, "click", &ids.search_box, |page, _| {
            page.open_search_dropdown();
            let raw = page.search_box_value().unwrap_or_default();
            page.search.activate(&raw);
            Ok(())
        });
        self.on_within(document, "focusin", &ids.search_box, |page, _| {
            page.open_search_dropdown();
            page.set_search_box_width(true);
            Ok(())
        });
        self.on_within(document, "focusout", &ids.search_box, |page, _| {
            page.set_search_box_width(false);
            Ok(())
        });
        self.on_within(document, "keyup", &ids.search_box, |page, _| {
            let raw = page.search_box_value().unwrap_or_default();
            let edit = page.search.input(&raw);
            if let Some(text) = edit.text {
                page.set_search_box_value(&text);
            }
            if let Some(category) = edit.category {
                page.show_category(category);
            }
            Ok(())
        });

        self.on_id(document, "click", &ids.category_rotation, |page, _| {
            let category = page.search.cycle_category();
            page.show_category(category);
            Ok(())
        });
        self.on_id(document, "change", &ids.category_selector, |page, _| {
            let value = page
                .element(&page.config.ids.category_selector)
                .and_then(|el| util::control_value(&el));
            match value.as_deref().map(str::parse::<Category>) {
                Some(Ok(category)) => {
                    page.search.select_category(category);
                }
                Some(Err(err)) => tracing::warn!("Ignoring category selection: {err}"),
                None => {}
            }
            Ok(())
        });

        for (switch, id) in [
            (FilterSwitch::Closed, &ids.toggle_closed),
            (FilterSwitch::Freshmen, &ids.toggle_freshmen),
            (FilterSwitch::Withdrawal, &ids.toggle_withdrawal),
        ] {
            let checkbox_id = id.clone();
            self.on_id(document, "click", id, move |page, _| {
                let checked = page
                    .element(&checkbox_id)
                    .and_then(|el| util::checked_state(&el));
                let section_class = &page.config.classes.section;
                match checked {
                    Some(on) => {
                        page.filters.set(switch, on);
                        page.filters.apply(&page.dom, section_class);
                    }
                    None => {
                        page.filters.toggle_and_apply(switch, &page.dom, section_class);
                    }
                }
                Ok(())
            });
        }
        self.on_id(document, "click", &ids.toggle_description, |page, _| {
            let checked = page
                .element(&page.config.ids.toggle_description)
                .and_then(|el| util::checked_state(&el));
            let description_class = &page.config.classes.description;
            match checked {
                Some(hide) => page.filters.set_descriptions(hide, &page.dom, description_class),
                None => {
                    page.filters.toggle_descriptions(&page.dom, description_class);
                }
            }
            Ok(())
        });

        self.on_id_prevent_default(document, "click", &ids.show_compact_search, |page, _| {
            let frame = page.layout.show_compact();
            page.apply_layout(frame);
            Ok(())
        });
        self.on_id_prevent_default(document, "click", &ids.hide_compact_search, |page, _| {
            let frame = page.layout.hide_compact();
            page.apply_layout(frame);
            Ok(())
        });

        self.listen(
            window,
            "resize",
            true,
            Box::new(|page: &mut PageInner, _: &web_sys::Event| {
                let width = util::viewport_width(&page.window)?;
                let frame = page.layout.resize(width);
                page.apply_layout(frame);
                Ok(())
            }),
        );
    }

    /// Handles `event` when it targets the element with `id` or one of its descendants.
    fn on_within(
        &mut self,
        document: &web_sys::Document,
        event: &'static str,
        id: &str,
        mut handler: impl FnMut(&mut PageInner, &web_sys::Event) -> Result<()> + 'static,
    ) {
        let id = id.to_owned();
        self.listen(
            document,
            event,
            true,
            Box::new(move |page: &mut PageInner, ev: &web_sys::Event| {
                if util::event_within(ev, &id) {
                    handler(page, ev)
                } else {
                    Ok(())
                }
            }),
        );
    }

    /// Handles `event` on the element with `id`, a page without it just never calls `handler`.
    fn on_id(
        &mut self,
        document: &web_sys::Document,
        event: &'static str,
        id: &str,
        handler: impl FnMut(&mut PageInner, &web_sys::Event) -> Result<()> + 'static,
    ) {
        match util::element_by_id(document, id) {
            Some(el) => self.listen(&el, event, true, Box::new(handler)),
            None => tracing::debug!("No #{id} on this page"),
        }
    }

    /// Like [`Page::on_id`], for links which shouldn't navigate.
    fn on_id_prevent_default(
        &mut self,
        document: &web_sys::Document,
        event: &'static str,
        id: &str,
        mut handler: impl FnMut(&mut PageInner, &web_sys::Event) -> Result<()> + 'static,
    ) {
        match util::element_by_id(document, id) {
            Some(el) => self.listen(
                &el,
                event,
                false,
                Box::new(move |page: &mut PageInner, ev: &web_sys::Event| {
                    ev.prevent_default();
                    handler(page, ev)
                }),
            ),
            None => tracing::debug!("No #{id} on this page"),
        }
    }

    fn listen(
        &mut self,
        target: &web_sys::EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: Box<Handler>,
    ) {
        let inner = self.inner.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Ok(mut page) = inner.try_borrow_mut() else {
                tracing::warn!("Dropped re-entrant {event} event");
                return;
            };
            if let Err(err) = handler(&mut page, &ev) {
                tracing::warn!("Handling {event} failed: {err}");
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!("Unable to listen for {event}: {err:?}");
            return;
        }
        self.listeners.push(callback);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl PageInner {
    fn element(&self, id: &str) -> Option<web_sys::HtmlElement> {
        util::element_by_id(self.dom.document(), id)
    }

    /// Picks up checkboxes the browser restored on reload.
    fn restore_filters(&mut self) {
        let ids = &self.config.ids;
        let mut changed = false;
        for (switch, id) in [
            (FilterSwitch::Closed, &ids.toggle_closed),
            (FilterSwitch::Freshmen, &ids.toggle_freshmen),
            (FilterSwitch::Withdrawal, &ids.toggle_withdrawal),
        ] {
            let checked = util::element_by_id(self.dom.document(), id)
                .and_then(|el| util::checked_state(&el))
                .unwrap_or(false);
            changed |= self.filters.set(switch, checked);
        }
        if changed {
            self.filters.apply(&self.dom, &self.config.classes.section);
        }

        let hide_descriptions = util::element_by_id(self.dom.document(), &ids.toggle_description)
            .and_then(|el| util::checked_state(&el))
            .unwrap_or(false);
        if hide_descriptions {
            self.filters.set_descriptions(true, &self.dom, &self.config.classes.description);
        }
    }

    fn search_box_value(&self) -> Option<String> {
        self.element(&self.config.ids.search_box)
            .and_then(|el| util::control_value(&el))
    }

    fn set_search_box_value(&self, value: &str) {
        if let Some(el) = self.element(&self.config.ids.search_box) {
            util::set_control_value(&el, value);
        }
    }

    fn set_search_box_width(&self, focused: bool) {
        let Some(el) = self.element(&self.config.ids.search_box) else {
            return;
        };
        let style = el.style();
        let transition = format!("width {}ms", self.config.search_box_slide_ms);
        let width = self.layout.search_box_width(focused);
        if let Err(err) = style
            .set_property("transition", &transition)
            .and_then(|()| style.set_property("width", width))
        {
            tracing::warn!("Unable to resize the search box: {err:?}");
        }
    }

    fn open_search_dropdown(&self) {
        let Some(container) = self.element(&self.config.ids.search_box_container) else {
            return;
        };
        if let Err(err) = container.class_list().add_1(&self.config.classes.open) {
            tracing::warn!("Unable to open the search dropdown: {err:?}");
        }
    }

    fn show_category(&self, category: Category) {
        if let Some(el) = self.element(&self.config.ids.category_selector) {
            util::set_control_value(&el, category.as_str());
        }
    }

    fn apply_layout(&self, frame: LayoutFrame) {
        let ids = &self.config.ids;
        for (id, visible) in [
            (&ids.full_search_form, frame.full_form_visible),
            (&ids.show_compact_search, frame.show_link_visible),
            (&ids.hide_compact_search, frame.hide_link_visible),
            (&ids.compact_search_panel, frame.compact_panel_visible),
        ] {
            if let Some(el) = self.element(id) {
                set_element_visibility(&el, Visibility::hidden_if(!visible));
            }
        }
        if let Some(body) = self.dom.document().body() {
            let padding = format!("{}px", frame.padding_top_px);
            if let Err(err) = body.style().set_property("padding-top", &padding) {
                tracing::warn!("Unable to set page padding: {err:?}");
            }
        }
    }
}

/// Attaches the scripts once the document is parsed, and keeps them running.
pub fn run_when_ready() -> Result<()> {
    let window = util::window()?;
    let document = util::document()?;
    if document.ready_state() != "loading" {
        Page::attach(window, document)?.run();
        return Ok(());
    }

    let attach = Closure::once_into_js(move || match util::document() {
        Ok(document) => match Page::attach(window, document) {
            Ok(page) => page.run(),
            Err(err) => tracing::error!("Unable to attach page scripts: {err}"),
        },
        Err(err) => tracing::error!("{err}"),
    });
    document.add_event_listener_with_callback("DOMContentLoaded", attach.unchecked_ref())?;
    Ok(())
}
