//! Portfolio FX core crate.
//!
//! Client-side behavior for the portfolio page: section navigation, card hover
//! stagger, the auto-sizing mad-lib contact form and the profile-flip theme
//! toggle with its emoji particle stream. `start_portfolio()` wires everything
//! to the DOM; the decision logic lives in plain modules that run natively.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod emitter;
pub mod logging;
pub mod madlib;
pub mod mode;
pub mod page;
pub mod particle;
pub mod router;
pub mod stagger;
pub mod timer;

pub use config::{ConfigError, FxConfig};
pub use emitter::{ParticleEmitter, ParticleSurface, SessionState};
pub use mode::{ModeIndicator, ModeState, ModeToggle, VisualMode};
pub use particle::Particle;
pub use timer::{BrowserScheduler, Scheduler, VirtualScheduler};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    start_with(FxConfig::default())
}

/// Start with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_portfolio_with_config(json: &str) -> Result<(), JsValue> {
    start_with(FxConfig::from_json(json)?)
}

pub fn start_with(cfg: FxConfig) -> Result<(), JsValue> {
    cfg.validate()?;
    logging::init(cfg.max_log_level());
    tracing::info!("Portfolio behavior layer (Rust/WASM)");
    page::mount(cfg)
}

#[wasm_bindgen]
pub fn is_colorful_mode() -> bool {
    page::is_colorful()
}

#[wasm_bindgen]
pub fn show_section(id: &str) -> Result<(), JsValue> {
    page::show_section(id)
}
