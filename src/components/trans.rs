//! Width and opacity transitions sized in character units

use dioxus::prelude::*;

use crate::config::DeckConfig;
use crate::primitives::{Property, RevealTargets, TransRequest, transition_list};

/// Outer style of a `Trans` container
pub fn trans_style(request: TransRequest, config: &DeckConfig) -> String {
    format!(
        "display: inline flex; overflow: hidden; white-space: nowrap; width: {}px; {}",
        request.width_px(config.unit_width_px),
        transition_list(&[config.transition(Property::Width)]),
    )
}

/// Inner style of a `Reveal`; opacity runs on the same clock as the width
pub fn reveal_inner_style(targets: &RevealTargets, config: &DeckConfig) -> String {
    format!(
        "{} {}",
        targets.opacity.to_css(),
        transition_list(&[config.transition(Property::Opacity)]),
    )
}

/// Container whose width animates to `width` characters, or to the
/// content's own length when no width is given
#[component]
pub fn Trans(
    content: String,
    width: Option<usize>,
    #[props(default)] style: String,
    #[props(default)] inner_style: String,
) -> Element {
    let config = use_context::<DeckConfig>();
    let request = TransRequest::for_content(&content, width);
    let outer = trans_style(request, &config);

    rsx! {
        div {
            style: "{outer} {style}",
            span { style: "{inner_style}", "{content}" }
        }
    }
}

/// Opens and fades in together, closes and fades out together
#[component]
pub fn Reveal(content: String, revealed: bool) -> Element {
    let config = use_context::<DeckConfig>();
    let targets = RevealTargets::new(&content, revealed);
    let inner_style = reveal_inner_style(&targets, &config);

    rsx! {
        Trans {
            content: content,
            width: targets.width.target_width_chars,
            inner_style: inner_style,
        }
    }
}
