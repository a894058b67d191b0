//! Style primitives - value types that render to CSS declarations
//!
//! Each primitive:
//! - `to_css()` or `Display` → CSS declaration text
//! - pure, no DOM access (geometry is captured by `crate::measure`)

#[macro_use]
mod bounded;
pub mod animation;
pub mod geometry;
pub mod opacity;
pub mod timing;
pub mod width;

pub use animation::{Highlight, keyframes_css};
pub use geometry::GeometrySnapshot;
pub use opacity::Opacity;
pub use timing::{Easing, Property, Transition, UnknownEasing, transition_list};
pub use width::{RevealTargets, TransRequest};
