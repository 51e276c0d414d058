//! Profile-flip controls: click flips the visual mode, hover streams emoji.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{claim, log_dom_err, on};
use crate::config::FxConfig;
use crate::emitter::{ParticleEmitter, ParticleSurface};
use crate::mode::{ModeIndicator, ModeState, ModeToggle, VisualMode};
use crate::particle::{self, Particle};
use crate::timer::BrowserScheduler;

/// A DOM element that particles are appended to.
#[derive(Clone)]
pub struct ElementSurface {
    el: Element,
    class: Rc<str>,
}

impl ElementSurface {
    pub fn new(el: Element, class: &str) -> Self {
        Self { el, class: Rc::from(class) }
    }
}

impl ParticleSurface for ElementSurface {
    type Node = HtmlElement;

    fn attach(&self, p: &Particle) -> Option<HtmlElement> {
        let doc = self.el.owner_document()?;
        let node: HtmlElement = doc.create_element("div").ok()?.dyn_into().ok()?;
        node.set_class_name(&self.class);
        node.set_text_content(Some(p.glyph));
        let style = node.style();
        for (name, value) in p.css_vars() {
            style.set_property(name, &value).ok()?;
        }
        self.el.append_child(&node).ok()?;
        Some(node)
    }

    fn detach(&self, node: HtmlElement) {
        // No-op if the node or its container already left the page.
        node.remove();
    }
}

/// Mirrors the mode into a class on one element.
struct ClassIndicator {
    el: Element,
    class: String,
}

impl ModeIndicator for ClassIndicator {
    fn show(&self, mode: VisualMode) {
        log_dom_err(self.el.class_list().toggle_with_force(&self.class, mode.is_colorful()), "toggle");
    }
}

struct FooterGlyph(Element);

impl ModeIndicator for FooterGlyph {
    fn show(&self, mode: VisualMode) {
        self.0.set_text_content(Some(mode.footer_glyph()));
    }
}

/// Wire every flip control not yet bound. Returns how many were wired.
pub fn mount(doc: &Document, cfg: &FxConfig, mode: ModeState) -> Result<usize, JsValue> {
    let sel = &cfg.selectors;
    let controls: Vec<Element> = sel
        .flip_control_ids
        .iter()
        .filter_map(|id| doc.get_element_by_id(id))
        .filter(claim)
        .collect();
    if controls.is_empty() {
        tracing::debug!("no profile-flip controls, particle stream disabled");
        return Ok(0);
    }

    let mut toggle = ModeToggle::new(mode.clone());
    if let Some(body) = doc.body() {
        toggle.bind(Box::new(ClassIndicator {
            el: body.into(),
            class: sel.colorful_body_class.clone(),
        }));
    }
    for control in &controls {
        toggle.bind(Box::new(ClassIndicator {
            el: control.clone(),
            class: sel.flipped_class.clone(),
        }));
    }
    if let Some(footer) = doc.get_element_by_id(&sel.footer_glyph_id) {
        toggle.bind(Box::new(FooterGlyph(footer)));
    }
    let toggle = Rc::new(toggle);

    let seed = particle::seed();
    for (i, control) in controls.iter().enumerate() {
        let emitter = ParticleEmitter::new(
            BrowserScheduler,
            mode.clone(),
            cfg.emitter.clone(),
            seed.wrapping_add(i as u64),
        );

        let t = toggle.clone();
        on(control, "click", move |_| {
            t.toggle();
        })?;

        let em = emitter.clone();
        let surface = ElementSurface::new(control.clone(), &cfg.emitter.particle_class);
        on(control, "mouseenter", move |_| {
            em.start_session(surface.clone());
        })?;

        let em = emitter;
        on(control, "mouseleave", move |_| em.stop_session())?;
    }
    Ok(controls.len())
}
