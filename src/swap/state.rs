//! Swap state machine
//!
//! ```text
//!   Idle ──present──▶ Engaged(t) ──absent──▶ Disengaging(!t.orientation)
//!                        ▲                         │
//!                        └─────────present─────────┘
//! ```
//!
//! Repeated `present` while engaged and repeated `absent` while idle or
//! disengaging are no-ops. There is no terminal state.

use super::solver::{Orientation, SwapTransform};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwapState {
    /// No counterpart has been supplied yet
    #[default]
    Idle,
    /// Counterpart present; transform fixed until it goes away
    Engaged(SwapTransform),
    /// Counterpart removed; only the (already flipped) stacking survives
    Disengaging(Orientation),
}

impl SwapState {
    /// Next state for this render.
    ///
    /// `solve` measures and solves; it is called only on an engage, never
    /// while a transform is already applied.
    pub fn on_render(&self, counterpart_present: bool, solve: impl FnOnce() -> SwapTransform) -> Self {
        match (*self, counterpart_present) {
            (Self::Engaged(t), true) => Self::Engaged(t),
            (Self::Idle | Self::Disengaging(_), true) => Self::Engaged(solve()),
            (Self::Engaged(t), false) => Self::Disengaging(t.orientation.flipped()),
            (state @ (Self::Idle | Self::Disengaging(_)), false) => state,
        }
    }

    pub fn transform(&self) -> Option<&SwapTransform> {
        match self {
            Self::Engaged(t) => Some(t),
            _ => None,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Self::Idle => None,
            Self::Engaged(t) => Some(t.orientation),
            Self::Disengaging(o) => Some(*o),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Engaged(_) => "engaged",
            Self::Disengaging(_) => "disengaging",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::primitives::GeometrySnapshot;
    use crate::swap::solver::solve;
    use proptest::prelude::*;

    const OWN: GeometrySnapshot = GeometrySnapshot::new(100.0, 0.0, 200.0, 50.0);
    const OTHER: GeometrySnapshot = GeometrySnapshot::new(300.0, 0.0, 100.0, 50.0);

    fn engaged() -> SwapState {
        SwapState::Idle.on_render(true, || solve(OWN, OTHER))
    }

    #[test]
    fn idle_engages_with_solved_transform() {
        let state = engaged();
        let t = state.transform().copied();
        assert_eq!(t, Some(solve(OWN, OTHER)));
        assert_eq!(t.map(|t| t.translate_x), Some(100.0));
        assert_eq!(state.orientation(), Some(Orientation::Over));
    }

    #[test]
    fn engage_twice_solves_once() {
        let calls = Cell::new(0);
        let counting = || {
            calls.set(calls.get() + 1);
            solve(OWN, OTHER)
        };
        let first = SwapState::Idle.on_render(true, counting);
        let second = first.on_render(true, || {
            calls.set(calls.get() + 1);
            solve(OWN, OTHER)
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn disengage_flips_orientation() {
        let state = engaged().on_render(false, || unreachable!());
        assert_eq!(state, SwapState::Disengaging(Orientation::Under));
        assert!(state.transform().is_none());
    }

    #[test]
    fn repeated_disengage_flips_once() {
        let once = engaged().on_render(false, || unreachable!());
        let twice = once.on_render(false, || unreachable!());
        assert_eq!(twice, SwapState::Disengaging(Orientation::Under));
    }

    #[test]
    fn idle_stays_idle_without_counterpart() {
        let state = SwapState::Idle.on_render(false, || unreachable!());
        assert_eq!(state, SwapState::Idle);
        assert_eq!(state.orientation(), None);
    }

    #[test]
    fn reengage_remeasures() {
        let calls = Cell::new(0);
        let mut state = SwapState::Idle;
        for present in [true, false, true] {
            state = state.on_render(present, || {
                calls.set(calls.get() + 1);
                solve(OWN, OTHER)
            });
        }
        assert_eq!(calls.get(), 2);
        assert!(matches!(state, SwapState::Engaged(_)));
    }

    #[test]
    fn state_names() {
        assert_eq!(SwapState::Idle.name(), "idle");
        assert_eq!(engaged().name(), "engaged");
        assert_eq!(SwapState::Disengaging(Orientation::Over).name(), "disengaging");
    }

    fn width() -> impl Strategy<Value = f64> {
        0.0f64..800.0
    }

    proptest! {
        #[test]
        fn cycling_does_not_drift(
            ox in -500.0f64..500.0, ow in width(),
            cx in -500.0f64..500.0, cw in width(),
            cycles in 1usize..8,
        ) {
            let own = GeometrySnapshot::new(ox, 0.0, ow, 20.0);
            let other = GeometrySnapshot::new(cx, 0.0, cw, 20.0);
            let first = SwapState::Idle.on_render(true, || solve(own, other));
            let mut state = first;
            for _ in 0..cycles {
                state = state.on_render(false, || solve(own, other));
                state = state.on_render(true, || solve(own, other));
            }
            prop_assert_eq!(state, first);
        }

        #[test]
        fn disengaging_carries_negated_orientation(ow in width(), cw in width()) {
            let own = GeometrySnapshot::new(0.0, 0.0, ow, 20.0);
            let other = GeometrySnapshot::new(100.0, 0.0, cw, 20.0);
            let state = SwapState::Idle
                .on_render(true, || solve(own, other))
                .on_render(false, || solve(own, other));
            let expected = if ow > cw { Orientation::Under } else { Orientation::Over };
            prop_assert_eq!(state.orientation(), Some(expected));
        }
    }
}
