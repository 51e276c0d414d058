//! Hover stagger for card grids: neighbours of the hovered card lean away.

use crate::config::StaggerConfig;

/// Horizontal shift (px) for card `other` while card `hovered` is under the
/// pointer. `None` for the hovered card itself.
pub fn shift(hovered: usize, other: usize, cfg: &StaggerConfig) -> Option<i32> {
    if hovered == other {
        return None;
    }
    let offset = if hovered.abs_diff(other) == 1 { cfg.adjacent_shift_px } else { cfg.distant_shift_px };
    let direction = if other < hovered { -1 } else { 1 };
    Some(direction * offset)
}

pub fn transform(shift_px: i32, cfg: &StaggerConfig) -> String {
    format!("translateX({}px) translateY({}px)", shift_px, cfg.lift_px)
}

/// Transforms for every card in a group of `len` while `hovered` is entered.
pub fn layout(hovered: usize, len: usize, cfg: &StaggerConfig) -> Vec<Option<String>> {
    (0..len)
        .map(|i| shift(hovered, i, cfg).map(|s| transform(s, cfg)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_move_further_than_distant_cards() {
        let cfg = StaggerConfig::default();
        assert_eq!(shift(2, 1, &cfg), Some(-8));
        assert_eq!(shift(2, 3, &cfg), Some(8));
        assert_eq!(shift(2, 0, &cfg), Some(-4));
        assert_eq!(shift(2, 5, &cfg), Some(4));
        assert_eq!(shift(2, 2, &cfg), None);
    }

    #[test]
    fn layout_leaves_hovered_card_alone() {
        let cfg = StaggerConfig::default();
        let l = layout(0, 3, &cfg);
        assert_eq!(l[0], None);
        assert_eq!(l[1].as_deref(), Some("translateX(8px) translateY(2px)"));
        assert_eq!(l[2].as_deref(), Some("translateX(4px) translateY(2px)"));
    }
}
