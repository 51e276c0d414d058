//! Shared visual mode ("default" vs "colorful").
//!
//! The flag lives in a [`ModeState`] context object handed to every component
//! that reads it. Only [`ModeToggle`] writes it; it also pushes the new value
//! to each bound [`ModeIndicator`] so all controls stay in sync.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Default,
    Colorful,
}

const DEFAULT_GLYPHS: [&str; 3] = ["🎉", "🎊", "🎈"];
const COLORFUL_GLYPHS: [&str; 3] = ["⚡", "🤖", "⚙️"];

impl VisualMode {
    pub fn toggled(self) -> Self {
        match self {
            VisualMode::Default => VisualMode::Colorful,
            VisualMode::Colorful => VisualMode::Default,
        }
    }

    pub fn is_colorful(self) -> bool {
        self == VisualMode::Colorful
    }

    /// Particle glyphs drawn while this mode is active.
    pub fn particle_glyphs(self) -> &'static [&'static str; 3] {
        match self {
            VisualMode::Default => &DEFAULT_GLYPHS,
            VisualMode::Colorful => &COLORFUL_GLYPHS,
        }
    }

    /// Footer decoration shown while this mode is active.
    pub fn footer_glyph(self) -> &'static str {
        match self {
            VisualMode::Default => "⚡",
            VisualMode::Colorful => "🎉",
        }
    }
}

/// Cheap-to-clone handle on the page's single mode flag. UI thread only.
#[derive(Clone, Debug, Default)]
pub struct ModeState(Rc<Cell<VisualMode>>);

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> VisualMode {
        self.0.get()
    }

    // Private: writes go through ModeToggle.
    fn set(&self, mode: VisualMode) {
        self.0.set(mode);
    }
}

/// Something on the page that renders the current mode.
pub trait ModeIndicator {
    fn show(&self, mode: VisualMode);
}

/// The single writer of a [`ModeState`].
pub struct ModeToggle {
    state: ModeState,
    indicators: Vec<Box<dyn ModeIndicator>>,
}

impl ModeToggle {
    pub fn new(state: ModeState) -> Self {
        Self { state, indicators: Vec::new() }
    }

    pub fn bind(&mut self, indicator: Box<dyn ModeIndicator>) {
        self.indicators.push(indicator);
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    /// Flip the mode and resynchronize every indicator. Returns the new mode.
    pub fn toggle(&self) -> VisualMode {
        let next = self.state.get().toggled();
        self.state.set(next);
        self.sync();
        tracing::debug!(?next, "visual mode toggled");
        next
    }

    /// Push the current mode to all indicators without changing it.
    pub fn sync(&self) {
        let mode = self.state.get();
        for indicator in &self.indicators {
            indicator.show(mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder(Rc<RefCell<Vec<VisualMode>>>);

    impl ModeIndicator for Recorder {
        fn show(&self, mode: VisualMode) {
            self.0.borrow_mut().push(mode);
        }
    }

    #[test]
    fn glyph_sets_are_disjoint() {
        let a = VisualMode::Default.particle_glyphs();
        let b = VisualMode::Colorful.particle_glyphs();
        assert!(a.iter().all(|g| !b.contains(g)));
    }

    #[test]
    fn toggle_notifies_every_indicator() {
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));
        let mut toggle = ModeToggle::new(ModeState::new());
        toggle.bind(Box::new(Recorder(seen_a.clone())));
        toggle.bind(Box::new(Recorder(seen_b.clone())));

        assert_eq!(toggle.toggle(), VisualMode::Colorful);
        assert_eq!(*seen_a.borrow(), vec![VisualMode::Colorful]);
        assert_eq!(*seen_b.borrow(), vec![VisualMode::Colorful]);
    }

    #[test]
    fn clones_share_one_flag() {
        let state = ModeState::new();
        let reader = state.clone();
        let toggle = ModeToggle::new(state);
        toggle.toggle();
        assert!(reader.get().is_colorful());
    }
}
