//! One decorative glyph flung out of a profile-flip control.

use std::f64::consts::TAU;

use crate::config::EmitterConfig;
use crate::mode::VisualMode;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    /// Emission angle in radians, `[0, 2π)`.
    pub angle: f64,
    pub distance: f64,
    pub rotation_deg: f64,
}

impl Particle {
    /// Roll a particle for `mode`. The glyph set is taken from the mode passed
    /// in, so callers must read the mode at emission time.
    pub fn roll(mode: VisualMode, rng: &mut fastrand::Rng, cfg: &EmitterConfig) -> Self {
        let glyphs = mode.particle_glyphs();
        let glyph = glyphs[rng.usize(..glyphs.len())];
        let angle = rng.f64() * TAU;
        let distance = cfg.min_distance + rng.f64() * (cfg.max_distance - cfg.min_distance);
        let rotation_deg = rng.f64() * 2.0 * cfg.max_rotation_deg - cfg.max_rotation_deg;
        Self { glyph, angle, distance, rotation_deg }
    }

    pub fn tx(&self) -> f64 {
        self.angle.cos() * self.distance
    }

    pub fn ty(&self) -> f64 {
        self.angle.sin() * self.distance
    }

    /// CSS custom properties consumed by the particle keyframes.
    pub fn css_vars(&self) -> [(&'static str, String); 3] {
        [
            ("--tx", format!("{}px", self.tx())),
            ("--ty", format!("{}px", self.ty())),
            ("--rotation", format!("{}deg", self.rotation_deg)),
        ]
    }
}

/// Seed for the particle RNG. Uses platform entropy when the `rng` feature is
/// on, otherwise the page clock.
pub fn seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    (now * 1000.0) as u64 ^ 0x9E37_79B9_7F4A_7C15
}
