//! Slide content. Each slide renders itself for a given build step.

use dioxus::prelude::*;

use crate::components::{Highlight, Reveal, Switcher, Trans};
use crate::swap::SwapPair;

use super::theme;

pub struct SlideInfo {
    pub title: &'static str,
    /// Last build step
    pub steps: usize,
    pub render: fn(usize) -> Element,
}

pub const SLIDES: &[SlideInfo] = &[
    SlideInfo { title: "Algebraic effects", steps: 0, render: |_| rsx! { Opening {} } },
    SlideInfo { title: "Swapping places", steps: 2, render: |step| rsx! { Swapping { step } } },
    SlideInfo { title: "Perform, handle, resume", steps: 3, render: |step| rsx! { Building { step } } },
    SlideInfo { title: "Renaming", steps: 1, render: |step| rsx! { Renaming { step } } },
];

/// Last build step of every slide, in order
pub fn step_counts() -> Vec<usize> {
    SLIDES.iter().map(|s| s.steps).collect()
}

#[component]
fn Heading(text: &'static str) -> Element {
    let mark = theme::H1_MARK;
    rsx! {
        h1 { style: theme::H1, "{mark}{text}" }
    }
}

#[component]
fn Opening() -> Element {
    let mark = theme::H2_MARK;
    rsx! {
        Heading { text: "Algebraic effects" }
        h2 { style: theme::H2, "{mark}in React, by way of a few " Highlight { "transitions" } }
        p {
            "Arrow keys or click to advance. Append "
            code { style: theme::STRONG, "?duration=1500" }
            " to the URL to watch every transition in slow motion."
        }
    }
}

/// Two words trade places at step 1 and trade back at step 2.
#[component]
fn Swapping(step: usize) -> Element {
    let pair = use_hook(|| SwapPair::new("handlers"));
    let (left_with, right_with) = pair.counterparts(step == 1);

    rsx! {
        Heading { text: "Swapping places" }
        div {
            style: theme::LINE,
            span { "an" }
            Switcher {
                handle: pair.left(),
                switch_with: left_with,
                style: theme::STRONG,
                "effect"
            }
            span { "reaches its" }
            Switcher {
                handle: pair.right(),
                switch_with: right_with,
                style: theme::LINK,
                "handler"
            }
        }
        if step == 2 {
            p { "... and back again, passing the other way." }
        }
    }
}

/// One word appears per build step.
#[component]
fn Building(step: usize) -> Element {
    rsx! {
        Heading { text: "Perform, handle, resume" }
        div {
            style: theme::LINE,
            Reveal { content: "perform", revealed: step >= 1 }
            Reveal { content: "\u{2192} handle", revealed: step >= 2 }
            Reveal { content: "\u{2192} resume", revealed: step >= 3 }
        }
    }
}

/// Content changes length and the container width follows it.
#[component]
fn Renaming(step: usize) -> Element {
    let word = if step == 0 { "throw" } else { "perform" };
    rsx! {
        Heading { text: "Renaming" }
        div {
            style: theme::LINE,
            span { "instead of" }
            Trans { content: "{word}", style: theme::STRONG }
            span { "an error, we" }
            Trans { content: "resume", width: if step == 0 { 0 } else { 6 } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slide_is_titled() {
        assert!(!SLIDES.is_empty());
        assert!(SLIDES.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn step_counts_follow_slide_order() {
        assert_eq!(step_counts(), vec![0, 2, 3, 1]);
    }
}
