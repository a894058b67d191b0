//! Deck - routes, keyboard navigation and autoplay around the slides
//!
//! The URL is the only navigation state: `/slide/:index/:step`. Reloading
//! or sharing a link lands on the same build step.

mod cursor;
mod slides;
mod theme;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info};

use crate::Route;
use crate::config::DeckConfig;

pub use cursor::Cursor;
pub use slides::{SLIDES, step_counts};

fn route_for(cursor: Cursor) -> Route {
    Route::Slide { index: cursor.slide, step: cursor.step }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Forward,
    Backward,
}

/// Deck keys. Each of them also scrolls the page by default, so handled
/// keys must have their default action suppressed.
fn nav_for_key(key: &Key) -> Option<Nav> {
    match key {
        Key::ArrowRight | Key::ArrowDown | Key::PageDown | Key::Enter => Some(Nav::Forward),
        Key::ArrowLeft | Key::ArrowUp | Key::PageUp | Key::Backspace => Some(Nav::Backward),
        Key::Character(c) if c == " " => Some(Nav::Forward),
        _ => None,
    }
}

/// Keyboard navigation needs the slide focused; say so when it isn't.
fn note_focus<E: std::fmt::Display>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(%err, "could not focus slide; keyboard navigation unavailable until clicked");
            false
        }
    }
}

#[component]
pub fn Title() -> Element {
    rsx! {
        div {
            style: theme::SLIDE,
            h1 { style: theme::H1, "Slides" }
            ol {
                for (index, slide) in SLIDES.iter().enumerate() {
                    li {
                        Link {
                            to: Route::Slide { index, step: 0 },
                            style: theme::LINK,
                            "{slide.title}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Slide(index: usize, step: usize) -> Element {
    let config = use_context::<DeckConfig>();
    let nav = navigator();
    let steps = use_hook(step_counts);
    let cursor = Cursor::new(index, step).clamp(&steps);

    // Latest cursor, read by autoplay tasks that outlive a render.
    let mut current = use_signal(|| cursor);

    use_effect(use_reactive((&cursor,), move |(cursor,)| {
        debug!(slide = cursor.slide, step = cursor.step, "showing");
        current.set(cursor);
        let Some(ms) = config.autoplay_ms else {
            return;
        };
        spawn(async move {
            TimeoutFuture::new(ms).await;
            // Superseded by manual navigation while waiting.
            if *current.peek() != cursor {
                return;
            }
            let steps = step_counts();
            if !cursor.is_last(&steps) {
                nav.replace(route_for(cursor.advance(&steps)));
            } else {
                info!("autoplay reached the end of the deck");
            }
        });
    }));

    let forward = {
        let steps = steps.clone();
        move || {
            nav.push(route_for(cursor.advance(&steps)));
        }
    };
    let backward = {
        let steps = steps.clone();
        move || {
            nav.push(route_for(cursor.retreat(&steps)));
        }
    };
    let on_click = forward.clone();
    let body = match SLIDES.get(cursor.slide) {
        Some(slide) => (slide.render)(cursor.step),
        None => rsx! {},
    };
    let position = format!("{} / {}", cursor.slide + 1, SLIDES.len());

    rsx! {
        div {
            style: theme::SLIDE,
            tabindex: "0",
            onmounted: move |e: MountedEvent| async move {
                note_focus(e.set_focus(true).await);
            },
            onkeydown: move |e: Event<KeyboardData>| {
                let Some(nav) = nav_for_key(&e.key()) else {
                    return;
                };
                e.prevent_default();
                match nav {
                    Nav::Forward => forward(),
                    Nav::Backward => backward(),
                }
            },
            onclick: move |_| on_click(),
            {body}
            div { style: theme::FOOTER, "{position}" }
        }
    }
}

/// Root styling, font and keyframes shared by every route
#[component]
pub fn Stage(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: theme::FONT_HREF }
        crate::components::TransitionStyles {}
        div { style: theme::ROOT, {children} }
    }
}
