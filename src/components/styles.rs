use dioxus::prelude::*;

use crate::config::DeckConfig;
use crate::primitives::keyframes_css;

/// Keyframes and stacking classes used by `Switcher` and `Highlight`.
/// Render once near the root.
#[component]
pub fn TransitionStyles() -> Element {
    let config = use_context::<DeckConfig>();
    let css = keyframes_css(config.duration_ms);
    rsx! {
        style { "{css}" }
    }
}
