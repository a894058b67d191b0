//! Timing - CSS transition declarations
//!
//! Every transition in the deck shares one duration and easing (from
//! `DeckConfig`) so concurrent width, opacity and transform animations
//! start and finish together.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// CSS timing function keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    pub const ALL: &[Self] = &[
        Self::Linear,
        Self::Ease,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
    ];
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing `{0}`")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.keyword().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

/// Animated CSS property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Width,
    Opacity,
    Transform,
}

impl Property {
    fn name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Opacity => "opacity",
            Self::Transform => "transform",
        }
    }
}

/// One entry of a CSS `transition` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: Property,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(property: Property, duration_ms: u32, easing: Easing) -> Self {
        Self { property, duration_ms, easing }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property.name(), self.duration_ms, self.easing)
    }
}

/// `transition: a, b, c;` declaration, empty when there is nothing to animate
pub fn transition_list(transitions: &[Transition]) -> String {
    if transitions.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = transitions.iter().map(Transition::to_string).collect();
    format!("transition: {};", parts.join(", "))
}
