use dioxus::prelude::*;

use crate::primitives::Highlight as HighlightAnimation;

/// Emphasised text with a slowly shifting background colour
#[component]
pub fn Highlight(children: Element) -> Element {
    let style = HighlightAnimation::default().to_css();
    rsx! {
        span { style: "{style}", {children} }
    }
}
