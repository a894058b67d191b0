//! Bounded - range-checked scalar newtypes for style values
//!
//! Style targets (opacity today) live in a closed range. Construction is
//! const and checked, so named constants are validated at compile time.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// const HALF: Opacity = Opacity::new(0.5);
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }
    };
}
