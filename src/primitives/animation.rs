//! Animation - keyframe animations referenced by class or style
//!
//! The swap engine picks a class name (`up-and-over` or
//! `under-and-over`) and sets z-index on the outer div itself; the
//! keyframes behind those names, and the
//! highlight colour cycle, are defined here and injected once by the
//! deck as a `<style>` block.

/// Endless colour cycle behind emphasised words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub period_ms: u32,
}

impl Highlight {
    pub const KEYFRAMES: &'static str = "highlight-color-shift";

    pub fn to_css(&self) -> String {
        format!(
            "animation: {}ms ease-in infinite alternate {}; padding: 0 8px;",
            self.period_ms,
            Self::KEYFRAMES,
        )
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self { period_ms: 4000 }
    }
}

/// All @keyframes definitions plus the stacking classes - inject once
pub fn keyframes_css(duration_ms: u32) -> String {
    format!(
        r#"
@keyframes up-and-over    {{ 0%,100% {{ transform: translateY(0); }} 50% {{ transform: translateY(-0.6em); }} }}
@keyframes under-and-over {{ 0%,100% {{ transform: translateY(0); }} 50% {{ transform: translateY(0.6em); }} }}
@keyframes highlight-color-shift {{
  0%   {{ background-color: #2b97d955; }}
  50%  {{ background-color: #9d7ff555; }}
  100% {{ background-color: #99ffcc55; }}
}}
.up-and-over    {{ position: relative; animation: up-and-over {duration_ms}ms ease-in-out; }}
.under-and-over {{ position: relative; animation: under-and-over {duration_ms}ms ease-in-out; }}
"#
    )
}
