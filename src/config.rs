//! Tunables for every behavior on the page.
//!
//! `FxConfig::default()` reproduces the constants the portfolio stylesheet and
//! markup were authored against. With the `serde` feature the whole tree can be
//! deserialized; every field falls back to its default when omitted, so a host
//! page only has to spell out what it changes.

#[cfg(feature = "serde")]
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("emission period must be greater than zero")]
    ZeroEmissionPeriod,
    #[error("particle lifetime must be greater than zero")]
    ZeroLifetime,
    #[error("particle distance range is inverted or negative ({min}..={max})")]
    BadDistanceRange { min: f64, max: f64 },
    #[error("minimum input width must be positive, got {0}")]
    BadMinInputWidth(f64),
    #[cfg(feature = "serde_json")]
    #[error("invalid config json: {0}")]
    Json(String),
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

impl From<ConfigError> for wasm_bindgen::JsValue {
    fn from(err: ConfigError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

/// Particle stream timing and trajectory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct EmitterConfig {
    pub emission_period_ms: u32,
    pub particle_lifetime_ms: u32,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Rotation is drawn from `[-max_rotation_deg, max_rotation_deg)`.
    pub max_rotation_deg: f64,
    pub particle_class: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            emission_period_ms: 200,
            particle_lifetime_ms: 2000,
            min_distance: 30.0,
            max_distance: 70.0,
            max_rotation_deg: 360.0,
            particle_class: "profile-emoji".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct RouterConfig {
    pub home_section: String,
    pub nav_selector: String,
    pub section_selector: String,
    pub header_id: String,
    pub active_class: String,
    pub header_visible_class: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            home_section: "home".to_string(),
            nav_selector: ".nav-btn".to_string(),
            section_selector: ".content-section".to_string(),
            header_id: "fixed-header".to_string(),
            active_class: "active".to_string(),
            header_visible_class: "visible".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct StaggerConfig {
    pub group_selector: String,
    pub card_selector: String,
    pub adjacent_shift_px: i32,
    pub distant_shift_px: i32,
    pub lift_px: i32,
    pub transition: String,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            group_selector: ".skills-grid, .cert-grid".to_string(),
            card_selector: ".card".to_string(),
            adjacent_shift_px: 8,
            distant_shift_px: 4,
            lift_px: 2,
            transition: "all 0.2s ease".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct MadlibConfig {
    pub form_selector: String,
    pub input_selector: String,
    pub submit_selector: String,
    pub font: String,
    pub width_padding_px: f64,
    pub min_input_width_px: f64,
    pub name_id: String,
    pub reason_id: String,
    pub email_id: String,
    pub socials_id: String,
    pub message_id: String,
    pub sending_label: String,
}

impl Default for MadlibConfig {
    fn default() -> Self {
        Self {
            form_selector: ".madlib-form".to_string(),
            input_selector: ".madlib-input".to_string(),
            submit_selector: ".btn-submit".to_string(),
            font: "1.15rem \"Courier New\", monospace".to_string(),
            width_padding_px: 20.0,
            min_input_width_px: 120.0,
            name_id: "madlib-name".to_string(),
            reason_id: "madlib-reason".to_string(),
            email_id: "madlib-email".to_string(),
            socials_id: "madlib-socials".to_string(),
            message_id: "hidden-message".to_string(),
            sending_label: "Sending...".to_string(),
        }
    }
}

/// Element ids of the profile-flip controls and the mode-dependent decorations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct PageSelectors {
    pub flip_control_ids: Vec<String>,
    pub footer_glyph_id: String,
    pub flipped_class: String,
    pub colorful_body_class: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            flip_control_ids: vec!["profile-flip".to_string(), "hero-profile-flip".to_string()],
            footer_glyph_id: "footer-emoji".to_string(),
            flipped_class: "flipped".to_string(),
            colorful_body_class: "colorful-mode".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct FxConfig {
    pub emitter: EmitterConfig,
    pub router: RouterConfig,
    pub stagger: StaggerConfig,
    pub madlib: MadlibConfig,
    pub selectors: PageSelectors,
    /// One of `error`, `warn`, `info`, `debug`, `trace`. Unknown values mean `info`.
    pub log_level: Option<String>,
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.emitter;
        if e.emission_period_ms == 0 {
            return Err(ConfigError::ZeroEmissionPeriod);
        }
        if e.particle_lifetime_ms == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        if !(e.min_distance >= 0.0 && e.min_distance <= e.max_distance) {
            return Err(ConfigError::BadDistanceRange { min: e.min_distance, max: e.max_distance });
        }
        if !(self.madlib.min_input_width_px > 0.0) {
            return Err(ConfigError::BadMinInputWidth(self.madlib.min_input_width_px));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: FxConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn max_log_level(&self) -> tracing::Level {
        match self.log_level.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("error") => tracing::Level::ERROR,
            Some("warn") => tracing::Level::WARN,
            Some("debug") => tracing::Level::DEBUG,
            Some("trace") => tracing::Level::TRACE,
            _ => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(FxConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_distance_range() {
        let mut cfg = FxConfig::default();
        cfg.emitter.min_distance = 80.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::BadDistanceRange { min: 80.0, max: 70.0 })
        );
    }

    #[test]
    fn rejects_zero_timings() {
        let mut cfg = FxConfig::default();
        cfg.emitter.emission_period_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroEmissionPeriod));

        let mut cfg = FxConfig::default();
        cfg.emitter.particle_lifetime_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLifetime));
    }

    #[test]
    fn rejects_non_positive_input_floor() {
        let mut cfg = FxConfig::default();
        cfg.madlib.min_input_width_px = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::BadMinInputWidth(0.0)));
    }

    #[test]
    fn log_level_parsing_falls_back_to_info() {
        let mut cfg = FxConfig::default();
        assert_eq!(cfg.max_log_level(), tracing::Level::INFO);
        cfg.log_level = Some("DEBUG".into());
        assert_eq!(cfg.max_log_level(), tracing::Level::DEBUG);
        cfg.log_level = Some("loud".into());
        assert_eq!(cfg.max_log_level(), tracing::Level::INFO);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_only_named_fields() {
        let cfg = FxConfig::from_json(r#"{"emitter":{"emission_period_ms":50}}"#).unwrap();
        assert_eq!(cfg.emitter.emission_period_ms, 50);
        assert_eq!(cfg.emitter.particle_lifetime_ms, 2000);
        assert_eq!(cfg.router.home_section, "home");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_config_is_validated() {
        let err = FxConfig::from_json(r#"{"emitter":{"particle_lifetime_ms":0}}"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroLifetime);
    }
}
