//! Mad-lib contact form wiring.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::{claim, elements, log_dom_err, on};
use crate::config::MadlibConfig;
use crate::madlib::{self, MadlibFields};

/// Offscreen 2d context used to measure input text.
struct TextMeasure {
    ctx: CanvasRenderingContext2d,
}

impl TextMeasure {
    fn new(doc: &Document, font: &str) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        ctx.set_font(font);
        Ok(Self { ctx })
    }

    fn width(&self, text: &str) -> f64 {
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }
}

fn resize(input: &HtmlInputElement, measure: &TextMeasure, cfg: &MadlibConfig) {
    let value = input.value();
    let placeholder = input.placeholder();
    let text = madlib::measure_source(&value, &placeholder);
    let width = madlib::fit_width(measure.width(text), cfg);
    log_dom_err(input.style().set_property("width", &format!("{width}px")), "width");
}

fn field_value(doc: &Document, id: &str) -> String {
    let Some(el) = doc.get_element_by_id(id) else {
        return String::new();
    };
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(el) => el
            .dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default(),
    }
}

fn set_field_value(el: Element, value: &str) {
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.set_value(value),
        Err(el) => {
            if let Ok(area) = el.dyn_into::<HtmlTextAreaElement>() {
                area.set_value(value);
            }
        }
    }
}

/// Returns `false` when the page has no mad-lib form.
pub fn mount(doc: &Document, cfg: &MadlibConfig) -> Result<bool, JsValue> {
    let Some(form) = doc.query_selector(&cfg.form_selector)? else {
        tracing::debug!("no mad-lib form on page");
        return Ok(false);
    };
    if !claim(&form) {
        return Ok(false);
    }
    let cfg = Rc::new(cfg.clone());
    let measure = Rc::new(TextMeasure::new(doc, &cfg.font)?);

    let inputs = elements(&form.query_selector_all(&cfg.input_selector)?)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok());
    for input in inputs {
        for event in ["input", "blur"] {
            let (target, measure, cfg) = (input.clone(), measure.clone(), cfg.clone());
            on(&input, event, move |_| resize(&target, &measure, &cfg))?;
        }
        resize(&input, &measure, &cfg);
    }

    let doc_submit = doc.clone();
    let form_submit = form.clone();
    on(&form, "submit", move |_| {
        let fields = MadlibFields {
            name: field_value(&doc_submit, &cfg.name_id),
            reason: field_value(&doc_submit, &cfg.reason_id),
            email: field_value(&doc_submit, &cfg.email_id),
            socials: field_value(&doc_submit, &cfg.socials_id),
        };
        if let Some(hidden) = doc_submit.get_element_by_id(&cfg.message_id) {
            set_field_value(hidden, &fields.compose());
        }
        if let Ok(Some(button)) = form_submit.query_selector(&cfg.submit_selector) {
            button.set_text_content(Some(&cfg.sending_label));
            if let Ok(button) = button.dyn_into::<HtmlElement>() {
                log_dom_err(button.style().set_property("transform", "scale(0.98)"), "transform");
            }
        }
        tracing::info!("contact message composed");
    })?;
    Ok(true)
}
