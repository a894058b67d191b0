//! Transform solver - where the owned element has to go to land on its counterpart

use crate::primitives::GeometrySnapshot;

/// Which way an element passes its counterpart while the two trade places
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Shrinking element travels above the other one
    Over,
    /// Growing element travels below the other one
    Under,
}

impl Orientation {
    /// `Over` only when strictly wider; equal widths pass under.
    pub fn from_widths(own: f64, counterpart: f64) -> Self {
        if own > counterpart { Self::Over } else { Self::Under }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Over => Self::Under,
            Self::Under => Self::Over,
        }
    }

    /// Stacking order on the outer div; the element passing over paints on top.
    pub fn z_index(self) -> u8 {
        match self {
            Self::Over => 2,
            Self::Under => 1,
        }
    }

    /// Stacking class the stylesheet animates.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Over => "up-and-over",
            Self::Under => "under-and-over",
        }
    }
}

/// Horizontal offset and width that superimpose one element on another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapTransform {
    pub translate_x: f64,
    pub orientation: Orientation,
    pub target_width: f64,
}

impl SwapTransform {
    pub fn to_css(&self) -> String {
        format!(
            "width: {}px; transform: translateX({}px);",
            self.target_width, self.translate_x
        )
    }
}

/// Offset to the counterpart's x, corrected in advance for the width change
/// that animates at the same time. Position and width converge on one
/// rectangle without a later render fixing the position.
///
/// Vertical offset is ignored: swapped elements share a line.
/// Must only run against an untransformed `own`; solving again while a
/// transform is applied would measure the shifted box and compound.
pub fn solve(own: GeometrySnapshot, counterpart: GeometrySnapshot) -> SwapTransform {
    SwapTransform {
        translate_x: counterpart.x - own.x - (own.width - counterpart.width),
        orientation: Orientation::from_widths(own.width, counterpart.width),
        target_width: counterpart.width,
    }
}
