//! Single-page section switching.

use crate::config::RouterConfig;

/// What the page should look like after navigating to a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Section to activate; `None` when the id matches nothing on the page.
    pub active: Option<String>,
    pub header_visible: bool,
}

pub struct SectionRouter {
    home: String,
}

impl SectionRouter {
    pub fn new(cfg: &RouterConfig) -> Self {
        Self { home: cfg.home_section.clone() }
    }

    /// Resolve `id` against the sections present on the page. Unknown ids
    /// activate nothing but still drive the header.
    pub fn route<'a>(&self, id: &str, known: impl IntoIterator<Item = &'a str>) -> Route {
        let active = known.into_iter().any(|s| s == id).then(|| id.to_string());
        Route { active, header_visible: id != self.home }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> SectionRouter {
        SectionRouter::new(&RouterConfig::default())
    }

    #[test]
    fn home_hides_header() {
        let r = router().route("home", ["home", "about"]);
        assert_eq!(r, Route { active: Some("home".into()), header_visible: false });
    }

    #[test]
    fn other_sections_show_header() {
        let r = router().route("about", ["home", "about"]);
        assert_eq!(r.active.as_deref(), Some("about"));
        assert!(r.header_visible);
    }

    #[test]
    fn unknown_section_activates_nothing() {
        let r = router().route("blog", ["home", "about"]);
        assert_eq!(r.active, None);
        assert!(r.header_visible);
    }
}
