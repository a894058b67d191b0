//! Opacity - fade target for the reveal primitive

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const OPAQUE: Self = Self::new(1.0);
    pub const TRANSPARENT: Self = Self::new(0.0);

    /// Fully opaque when shown, fully transparent otherwise.
    pub const fn shown(visible: bool) -> Self {
        if visible { Self::OPAQUE } else { Self::TRANSPARENT }
    }

    /// Always emitted, even at full opacity: a fade-in needs an explicit
    /// `1` to animate towards.
    pub fn to_css(&self) -> String {
        format!("opacity: {};", self.value())
    }
}
