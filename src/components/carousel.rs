//! Rotation state for the testimonial carousel. Kept separate from the
//! section component so the cycle and selection rules can be tested
//! without a DOM.

/// Milliseconds between automatic carousel advances.
pub const ROTATION_MS: u32 = 6_000;

/// Next index in a round-robin rotation over `len` items.
pub fn advance(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Carousel state: the active index plus a selection counter. The counter
/// bumps on every manual selection, so the interval keyed on `timer_key`
/// restarts even when the selected index was already active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rotation {
    pub index: usize,
    epoch: u32,
}

impl Rotation {
    /// Automatic advance: move to the next index, wrapping at `len`.
    pub fn tick(self, len: usize) -> Self {
        Self {
            index: advance(self.index, len),
            epoch: self.epoch,
        }
    }

    /// Manual selection: jump straight to `index`.
    pub fn select(self, index: usize) -> Self {
        Self {
            index,
            epoch: self.epoch.wrapping_add(1),
        }
    }

    /// Key for the interval effect; any change restarts the timer.
    pub fn timer_key(self) -> (usize, u32) {
        (self.index, self.epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TESTIMONIALS;

    #[test]
    fn four_ticks_over_four_items_return_to_start() {
        let len = TESTIMONIALS.len();
        assert_eq!(len, 4);
        let mut rotation = Rotation::default();
        for _ in 0..len {
            rotation = rotation.tick(len);
        }
        assert_eq!(rotation.index, 0);
    }

    #[test]
    fn advance_wraps_at_the_end() {
        assert_eq!(advance(3, 4), 0);
        assert_eq!(advance(0, 4), 1);
    }

    #[test]
    fn empty_rotation_stays_at_zero() {
        assert_eq!(advance(0, 0), 0);
    }

    #[test]
    fn selection_takes_effect_regardless_of_timer_phase() {
        // Mid-cycle, two ticks in.
        let rotation = Rotation::default().tick(4).tick(4);
        assert_eq!(rotation.index, 2);
        let selected = rotation.select(2);
        assert_eq!(selected.index, 2);
        let selected = rotation.select(0);
        assert_eq!(selected.index, 0);
    }

    #[test]
    fn selecting_the_active_index_still_restarts_the_timer() {
        let rotation = Rotation::default();
        let reselected = rotation.select(rotation.index);
        assert_eq!(reselected.index, rotation.index);
        assert_ne!(reselected.timer_key(), rotation.timer_key());
    }

    #[test]
    fn automatic_ticks_also_restart_the_timer() {
        let rotation = Rotation::default();
        assert_ne!(rotation.tick(4).timer_key(), rotation.timer_key());
    }
}
