//! Card grids whose siblings lean away from the hovered card.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{claim, elements, log_dom_err, on};
use crate::config::StaggerConfig;
use crate::stagger;

/// Returns the number of card groups wired.
pub fn mount(doc: &Document, cfg: &StaggerConfig) -> Result<usize, JsValue> {
    let groups: Vec<_> = elements(&doc.query_selector_all(&cfg.group_selector)?)
        .into_iter()
        .filter(claim)
        .collect();
    let cfg = Rc::new(cfg.clone());
    for group in &groups {
        let cards: Rc<Vec<HtmlElement>> = Rc::new(
            elements(&group.query_selector_all(&cfg.card_selector)?)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
        );
        for (index, card) in cards.iter().enumerate() {
            let (siblings, cfg_enter) = (cards.clone(), cfg.clone());
            on(card, "mouseenter", move |_| {
                let layout = stagger::layout(index, siblings.len(), &cfg_enter);
                for (other, transform) in siblings.iter().zip(layout) {
                    let Some(transform) = transform else { continue };
                    let style = other.style();
                    log_dom_err(style.set_property("transform", &transform), "transform");
                    log_dom_err(style.set_property("transition", &cfg_enter.transition), "transition");
                }
            })?;

            let siblings = cards.clone();
            on(card, "mouseleave", move |_| {
                for other in siblings.iter() {
                    log_dom_err(other.style().remove_property("transform"), "transform");
                }
            })?;
        }
    }
    Ok(groups.len())
}
