//! Cursor - position within the deck as (slide, build step)

/// `steps[i]` is the last build step of slide `i`; step `0` is the slide
/// as it first appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub slide: usize,
    pub step: usize,
}

impl Cursor {
    pub const fn new(slide: usize, step: usize) -> Self {
        Self { slide, step }
    }

    /// Pulls an out-of-range cursor (e.g. a hand-edited URL) back into the deck.
    pub fn clamp(self, steps: &[usize]) -> Self {
        let Some(last) = steps.len().checked_sub(1) else {
            return Self::default();
        };
        let slide = self.slide.min(last);
        Self { slide, step: self.step.min(steps[slide]) }
    }

    /// Next build step, else first step of the next slide; stays put at the end.
    pub fn advance(self, steps: &[usize]) -> Self {
        let here = self.clamp(steps);
        match steps.get(here.slide) {
            Some(&last) if here.step < last => Self::new(here.slide, here.step + 1),
            Some(_) if here.slide + 1 < steps.len() => Self::new(here.slide + 1, 0),
            _ => here,
        }
    }

    /// Previous build step, else the fully built previous slide.
    pub fn retreat(self, steps: &[usize]) -> Self {
        let here = self.clamp(steps);
        if here.step > 0 {
            Self::new(here.slide, here.step - 1)
        } else if here.slide > 0 {
            Self::new(here.slide - 1, steps[here.slide - 1])
        } else {
            here
        }
    }

    pub fn is_last(self, steps: &[usize]) -> bool {
        self.advance(steps) == self.clamp(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: &[usize] = &[0, 2, 1];

    #[test]
    fn advance_walks_steps_then_slides() {
        let mut c = Cursor::default();
        let mut seen = vec![c];
        while !c.is_last(STEPS) {
            c = c.advance(STEPS);
            seen.push(c);
        }
        assert_eq!(
            seen,
            vec![
                Cursor::new(0, 0),
                Cursor::new(1, 0),
                Cursor::new(1, 1),
                Cursor::new(1, 2),
                Cursor::new(2, 0),
                Cursor::new(2, 1),
            ]
        );
        assert_eq!(c.advance(STEPS), c);
    }

    #[test]
    fn retreat_lands_on_built_previous_slide() {
        assert_eq!(Cursor::new(2, 0).retreat(STEPS), Cursor::new(1, 2));
        assert_eq!(Cursor::new(1, 1).retreat(STEPS), Cursor::new(1, 0));
        assert_eq!(Cursor::new(0, 0).retreat(STEPS), Cursor::new(0, 0));
    }

    #[test]
    fn clamp_fixes_out_of_range() {
        assert_eq!(Cursor::new(9, 9).clamp(STEPS), Cursor::new(2, 1));
        assert_eq!(Cursor::new(0, 5).clamp(STEPS), Cursor::new(0, 0));
        assert_eq!(Cursor::new(3, 3).clamp(&[]), Cursor::default());
    }

    #[test]
    fn empty_deck_never_moves() {
        assert_eq!(Cursor::default().advance(&[]), Cursor::default());
        assert_eq!(Cursor::default().retreat(&[]), Cursor::default());
    }
}
