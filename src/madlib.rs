//! Mad-lib contact form: inputs that grow with their text, and a submit step
//! that folds the blanks into one sentence.

use crate::config::MadlibConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MadlibFields {
    pub name: String,
    pub reason: String,
    pub email: String,
    pub socials: String,
}

impl MadlibFields {
    pub fn compose(&self) -> String {
        let mut message = format!(
            "Hello, my name is {}. The reason I am writing you is {}.",
            self.name, self.reason
        );
        message.push_str(&format!(" You can reach back to me via email at {}", self.email));
        if !self.socials.is_empty() {
            message.push_str(&format!(" or my socials at {}", self.socials));
        }
        message.push_str(" if you prefer. Talk to you soon!");
        message
    }
}

/// Text an input is measured by: its value, or the placeholder when empty.
pub fn measure_source<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Width in px for an input whose text measures `text_width`.
pub fn fit_width(text_width: f64, cfg: &MadlibConfig) -> f64 {
    (text_width + cfg.width_padding_px).max(cfg.min_input_width_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(socials: &str) -> MadlibFields {
        MadlibFields {
            name: "Ada".into(),
            reason: "a project".into(),
            email: "ada@example.com".into(),
            socials: socials.into(),
        }
    }

    #[test]
    fn message_without_socials() {
        assert_eq!(
            fields("").compose(),
            "Hello, my name is Ada. The reason I am writing you is a project. \
             You can reach back to me via email at ada@example.com if you prefer. Talk to you soon!"
        );
    }

    #[test]
    fn message_with_socials() {
        let msg = fields("@ada").compose();
        assert!(msg.contains("ada@example.com or my socials at @ada if you prefer."));
    }

    #[test]
    fn width_has_a_floor() {
        let cfg = MadlibConfig::default();
        assert_eq!(fit_width(10.0, &cfg), 120.0);
        assert_eq!(fit_width(200.0, &cfg), 220.0);
    }

    #[test]
    fn empty_value_measures_placeholder() {
        assert_eq!(measure_source("", "your name"), "your name");
        assert_eq!(measure_source("Bo", "your name"), "Bo");
    }
}
