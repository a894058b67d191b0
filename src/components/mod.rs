//! Dioxus components over the swap engine and style primitives

mod highlight;
mod styles;
mod switcher;
mod trans;

pub use highlight::Highlight;
pub use styles::TransitionStyles;
pub use switcher::Switcher;
pub use trans::{Reveal, Trans};
