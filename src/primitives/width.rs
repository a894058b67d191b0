//! Width - character-count sizing for the width transition primitives

use super::Opacity;

/// Desired visible width in character units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransRequest {
    pub target_width_chars: usize,
}

impl TransRequest {
    /// Explicit width wins; otherwise the content's own length.
    /// Empty content sizes to zero.
    pub fn for_content(content: &str, explicit_chars: Option<usize>) -> Self {
        Self {
            target_width_chars: explicit_chars.unwrap_or_else(|| content.chars().count()),
        }
    }

    pub fn width_px(&self, unit_width_px: f64) -> f64 {
        self.target_width_chars as f64 * unit_width_px
    }
}

/// Both targets of a reveal, derived from one flag so they move together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTargets {
    pub width: TransRequest,
    pub opacity: Opacity,
}

impl RevealTargets {
    pub fn new(content: &str, revealed: bool) -> Self {
        let chars = if revealed { content.chars().count() } else { 0 };
        Self {
            width: TransRequest { target_width_chars: chars },
            opacity: Opacity::shown(revealed),
        }
    }
}
