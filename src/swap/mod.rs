//! Swap - animates an element onto the place of a sibling and back
//!
//! Layers, leaf first:
//! - `solver`: geometry pair → `SwapTransform` (pure)
//! - `state`: engage/disengage bookkeeping that gates the solver
//! - `style`: state → CSS for the rendering host
//! - `handle`: how siblings are introduced to each other

pub mod handle;
pub mod solver;
pub mod state;
pub mod style;

pub use handle::{SwapHandle, SwapPair};
pub use solver::solve;
pub use state::SwapState;
pub use style::SwapStyle;
