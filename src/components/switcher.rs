//! Switcher - an element that can trade places with a sibling

use dioxus::prelude::*;
use tracing::debug;

use crate::config::DeckConfig;
use crate::measure::{DomMeasure, Measure};
use crate::swap::{SwapHandle, SwapState, SwapStyle, solve};

/// Animates onto `switch_with`'s box while it is `Some`, and back when it
/// becomes `None`. The outer div carries `handle`'s id so the sibling can
/// measure it.
#[component]
pub fn Switcher(
    handle: SwapHandle,
    switch_with: Option<SwapHandle>,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let config = use_context::<DeckConfig>();
    let mut state = use_signal(SwapState::default);

    // Effects run after the DOM commit, so geometry is laid out here.
    let own = handle.clone();
    use_effect(use_reactive((&switch_with,), move |(switch_with,)| {
        let current = *state.peek();
        let next = current.on_render(switch_with.is_some(), || {
            let counterpart = switch_with
                .as_ref()
                .map(|other| DomMeasure.snapshot_or_zero(other))
                .unwrap_or_default();
            solve(DomMeasure.snapshot_or_zero(&own), counterpart)
        });
        if next != current {
            debug!(id = own.id(), from = current.name(), to = next.name(), "swap transition");
            state.set(next);
        }
    }));

    let SwapStyle { outer, inner_class } = SwapStyle::from_state(&state.read(), &config);
    let id = handle.id().to_string();

    rsx! {
        div {
            id: "{id}",
            style: "display: inline-block; {style} {outer}",
            "data-swap-state": state.read().name(),
            div { class: inner_class, {children} }
        }
    }
}
