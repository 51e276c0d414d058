//! Navigation buttons and section visibility.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, window};

use super::{claim, elements, on};
use crate::config::RouterConfig;
use crate::router::SectionRouter;

const SECTION_ATTR: &str = "data-section";

pub fn mount(doc: &Document, cfg: &RouterConfig) -> Result<usize, JsValue> {
    let buttons: Vec<_> = elements(&doc.query_selector_all(&cfg.nav_selector)?)
        .into_iter()
        .filter(claim)
        .collect();
    let cfg = Rc::new(cfg.clone());
    for button in &buttons {
        let target = button.clone();
        let cfg = cfg.clone();
        on(button, "click", move |_| {
            let Some(id) = target.get_attribute(SECTION_ATTR) else { return };
            if let Err(err) = apply(&cfg, &id) {
                tracing::warn!(?err, section = %id, "section switch failed");
            }
        })?;
    }
    Ok(buttons.len())
}

/// Show section `id` using the mounted page configuration.
pub fn show_section(id: &str) -> Result<(), JsValue> {
    apply(&super::config().router, id)
}

fn apply(cfg: &RouterConfig, id: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let sections = elements(&doc.query_selector_all(&cfg.section_selector)?);
    for section in &sections {
        section.class_list().remove_1(&cfg.active_class)?;
    }
    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let route = SectionRouter::new(cfg).route(id, ids.iter().map(String::as_str));
    if let Some(pos) = route.active.as_ref().and_then(|a| ids.iter().position(|s| s == a)) {
        sections[pos].class_list().add_1(&cfg.active_class)?;
    }

    for button in elements(&doc.query_selector_all(&cfg.nav_selector)?) {
        let selected = button.get_attribute(SECTION_ATTR).as_deref() == Some(id);
        button.class_list().toggle_with_force(&cfg.active_class, selected)?;
    }

    if let Some(header) = doc.get_element_by_id(&cfg.header_id) {
        header
            .class_list()
            .toggle_with_force(&cfg.header_visible_class, route.header_visible)?;
    }

    win.scroll_to_with_x_and_y(0.0, 0.0);
    tracing::debug!(section = id, found = route.active.is_some(), "section shown");
    Ok(())
}
