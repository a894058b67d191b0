//! Rendering contract for a switcher's two wrapper divs

use crate::config::DeckConfig;
use crate::primitives::{Property, transition_list};

use super::state::SwapState;

/// Style for the outer (measured) div and class for the inner div
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStyle {
    pub outer: String,
    pub inner_class: &'static str,
}

impl SwapStyle {
    /// Position and width overrides only apply while engaged; the
    /// transition is always present so both directions animate.
    ///
    /// Stacking goes on the outer div: its `transform` makes it a stacking
    /// context, so a z-index on the inner div would never reach the sibling.
    pub fn from_state(state: &SwapState, config: &DeckConfig) -> Self {
        let mut outer = String::new();
        if let Some(orientation) = state.orientation() {
            outer.push_str(&format!(
                "position: relative; z-index: {}; ",
                orientation.z_index()
            ));
        }
        if let Some(t) = state.transform() {
            outer.push_str(&t.to_css());
            outer.push(' ');
        }
        outer.push_str(&transition_list(&[
            config.transition(Property::Width),
            config.transition(Property::Transform),
        ]));
        Self {
            outer,
            inner_class: state.orientation().map(|o| o.class_name()).unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::GeometrySnapshot;
    use crate::swap::solver::{Orientation, solve};

    const TRANSITION: &str = "transition: width 400ms ease-in-out, transform 400ms ease-in-out;";

    #[test]
    fn idle_has_no_transform_or_class() {
        let style = SwapStyle::from_state(&SwapState::Idle, &DeckConfig::default());
        assert_eq!(style.outer, TRANSITION);
        assert_eq!(style.inner_class, "");
    }

    #[test]
    fn engaged_applies_transform_and_width() {
        let t = solve(
            GeometrySnapshot::new(100.0, 0.0, 200.0, 50.0),
            GeometrySnapshot::new(300.0, 0.0, 100.0, 50.0),
        );
        let style = SwapStyle::from_state(&SwapState::Engaged(t), &DeckConfig::default());
        assert_eq!(
            style.outer,
            format!(
                "position: relative; z-index: 2; width: 100px; transform: translateX(100px); {TRANSITION}"
            )
        );
        assert_eq!(style.inner_class, "up-and-over");
    }

    #[test]
    fn disengaging_keeps_only_stacking() {
        let state = SwapState::Disengaging(Orientation::Under);
        let style = SwapStyle::from_state(&state, &DeckConfig::default());
        assert_eq!(style.outer, format!("position: relative; z-index: 1; {TRANSITION}"));
        assert_eq!(style.inner_class, "under-and-over");
    }

    #[test]
    fn shrinking_side_stacks_above_growing_side() {
        let wide = GeometrySnapshot::new(0.0, 0.0, 200.0, 50.0);
        let narrow = GeometrySnapshot::new(220.0, 0.0, 80.0, 50.0);
        let config = DeckConfig::default();
        let left = SwapStyle::from_state(&SwapState::Engaged(solve(wide, narrow)), &config);
        let right = SwapStyle::from_state(&SwapState::Engaged(solve(narrow, wide)), &config);
        assert!(left.outer.starts_with("position: relative; z-index: 2;"));
        assert!(right.outer.starts_with("position: relative; z-index: 1;"));

        // Orders reverse on the way back.
        let left_back = SwapStyle::from_state(&SwapState::Disengaging(Orientation::Under), &config);
        let right_back = SwapStyle::from_state(&SwapState::Disengaging(Orientation::Over), &config);
        assert!(left_back.outer.contains("z-index: 1;"));
        assert!(right_back.outer.contains("z-index: 2;"));
    }

    #[test]
    fn follows_configured_timing() {
        let config = DeckConfig::from_query("duration=900&easing=linear");
        let style = SwapStyle::from_state(&SwapState::Idle, &config);
        assert_eq!(style.outer, "transition: width 900ms linear, transform 900ms linear;");
    }
}
