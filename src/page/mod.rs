//! DOM wiring for the portfolio page.
//!
//! `mount` is the one initialization step: it looks up the elements each
//! behavior needs and attaches listeners. A behavior whose elements are absent
//! is skipped; nothing here fails because the markup is incomplete. Only a
//! missing `window`/`document` or a failing DOM call is an error.
//!
//! Mounting again is safe: every wired element is tagged with
//! `data-fx-bound` and skipped on later passes, and the visual mode carries
//! over, so only markup added since the last mount gets new listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, window};

use crate::config::FxConfig;
use crate::mode::ModeState;

mod cards;
mod form;
mod nav;
mod profile;

pub use nav::show_section;
pub use profile::ElementSurface;

/// Live page context kept for the exported query functions.
struct Page {
    config: Rc<FxConfig>,
    mode: ModeState,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub fn mount(cfg: FxConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Wait for the markup if the module loaded before the parser finished.
    if doc.ready_state() == "loading" {
        let mut pending = Some(cfg);
        let doc_ready = doc.clone();
        on(&doc, "DOMContentLoaded", move |_| {
            if let Some(cfg) = pending.take() {
                if let Err(err) = mount_into(&doc_ready, cfg) {
                    tracing::error!(?err, "deferred mount failed");
                }
            }
        })?;
        tracing::debug!("document still loading, mount deferred");
        return Ok(());
    }
    mount_into(&doc, cfg)
}

fn mount_into(doc: &Document, cfg: FxConfig) -> Result<(), JsValue> {
    let cfg = Rc::new(cfg);
    let mode = PAGE.with(|p| p.borrow().as_ref().map(|page| page.mode.clone()));
    let mode = mode.unwrap_or_default();

    let nav_buttons = nav::mount(doc, &cfg.router)?;
    let form = form::mount(doc, &cfg.madlib)?;
    let card_groups = cards::mount(doc, &cfg.stagger)?;
    let flip_controls = profile::mount(doc, &cfg, mode.clone())?;

    tracing::info!(nav_buttons, form, card_groups, flip_controls, "portfolio behaviors mounted");
    PAGE.with(|p| p.replace(Some(Page { config: cfg, mode })));
    Ok(())
}

pub fn is_colorful() -> bool {
    PAGE.with(|p| {
        p.borrow()
            .as_ref()
            .map(|page| page.mode.get().is_colorful())
            .unwrap_or(false)
    })
}

pub(crate) fn config() -> Rc<FxConfig> {
    PAGE.with(|p| {
        p.borrow()
            .as_ref()
            .map(|page| page.config.clone())
            .unwrap_or_default()
    })
}

/// Attach a listener for the page's lifetime.
pub(crate) fn on(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

const BOUND_ATTR: &str = "data-fx-bound";

/// Tag `el` as wired. Returns `false` if an earlier mount already took it.
pub(crate) fn claim(el: &Element) -> bool {
    if el.has_attribute(BOUND_ATTR) {
        return false;
    }
    log_dom_err(el.set_attribute(BOUND_ATTR, ""), "claim");
    true
}

/// Cosmetic DOM writes are best-effort; failures only show up in trace logs.
pub(crate) fn log_dom_err<T>(res: Result<T, JsValue>, op: &str) {
    if let Err(err) = res {
        tracing::trace!(?err, op, "dom write failed");
    }
}

/// Element nodes of a query result; other node kinds are skipped.
pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
