//! Full-view overlay navigation.
//!
//! The lightbox snapshots the sequence that was on screen when it opened and
//! navigates within that snapshot, wrapping at both ends, until it closes.
//! Later filter changes do not move an open lightbox.

use tracing::debug;

use crate::models::ItemId;

/// Horizontal travel a swipe must exceed to count as navigation.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    state: LightboxState,
    sequence: Vec<ItemId>,
    zoomed: bool,
    swipe_threshold: f32,
}

impl Lightbox {
    /// A non-finite `swipe_threshold` falls back to [`DEFAULT_SWIPE_THRESHOLD`].
    pub fn new(swipe_threshold: f32) -> Self {
        let swipe_threshold = if swipe_threshold.is_finite() {
            swipe_threshold.abs()
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };
        Self {
            state: LightboxState::Closed,
            sequence: Vec::new(),
            zoomed: false,
            swipe_threshold,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Position within the navigated sequence, when open.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn current_item(&self) -> Option<ItemId> {
        self.current_index()
            .and_then(|index| self.sequence.get(index).copied())
    }

    /// Length of the sequence being navigated (0 when closed).
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// Opens on `sequence[index]`, replacing any open sequence.
    ///
    /// An index outside the sequence leaves the lightbox untouched.
    pub fn open(&mut self, sequence: Vec<ItemId>, index: usize) -> bool {
        if index >= sequence.len() {
            debug!(index, len = sequence.len(), "Ignoring lightbox open past end of sequence");
            return false;
        }
        self.sequence = sequence;
        self.state = LightboxState::Open { index };
        self.zoomed = false;
        debug!(index, "Lightbox opened");
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn previous(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let LightboxState::Open { index } = self.state else {
            return false;
        };
        let len = self.sequence.len();
        if len == 0 {
            return false;
        }
        let next = (index as isize + delta).rem_euclid(len as isize) as usize;
        self.state = LightboxState::Open { index: next };
        debug!(from = index, to = next, "Lightbox moved");
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = LightboxState::Closed;
        self.sequence.clear();
        self.zoomed = false;
        debug!("Lightbox closed");
        true
    }

    /// Flips the zoom flag. Only meaningful while open.
    pub fn toggle_zoom(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.zoomed = !self.zoomed;
        true
    }

    /// Finger travel `delta_x` (end minus start). Dragging left shows the next
    /// item, dragging right the previous one. Short or non-finite drags are
    /// ignored.
    pub fn swipe(&mut self, delta_x: f32) -> bool {
        if !delta_x.is_finite() || delta_x.abs() <= self.swipe_threshold {
            return false;
        }
        if delta_x < 0.0 {
            self.next()
        } else {
            self.previous()
        }
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> Vec<ItemId> {
        (0..len).map(|i| ItemId(i * 10)).collect()
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open(sequence(5), 0));
        assert!(lightbox.previous());
        assert_eq!(lightbox.current_index(), Some(4));
        assert_eq!(lightbox.current_item(), Some(ItemId(40)));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut lightbox = Lightbox::default();
        lightbox.open(sequence(3), 2);
        lightbox.next();
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut lightbox = Lightbox::default();
        lightbox.open(sequence(7), 3);
        for _ in 0..7 {
            lightbox.next();
        }
        assert_eq!(lightbox.current_index(), Some(3));
        for _ in 0..7 {
            lightbox.previous();
        }
        assert_eq!(lightbox.current_index(), Some(3));
    }

    #[test]
    fn test_invalid_open_is_noop() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.open(sequence(3), 3));
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(!lightbox.open(Vec::new(), 0));

        lightbox.open(sequence(3), 1);
        assert!(!lightbox.open(sequence(2), 5));
        assert_eq!(lightbox.current_index(), Some(1));
        assert_eq!(lightbox.sequence_len(), 3);
    }

    #[test]
    fn test_closed_navigation_is_noop() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.next());
        assert!(!lightbox.previous());
        assert!(!lightbox.toggle_zoom());
        assert!(!lightbox.close());
        assert_eq!(lightbox.current_item(), None);
    }

    #[test]
    fn test_zoom_is_independent_of_index() {
        let mut lightbox = Lightbox::default();
        lightbox.open(sequence(4), 1);
        assert!(lightbox.toggle_zoom());
        assert!(lightbox.is_zoomed());
        lightbox.next();
        assert!(lightbox.is_zoomed());
        assert_eq!(lightbox.current_index(), Some(2));

        // Reopening and closing both clear zoom
        lightbox.open(sequence(4), 0);
        assert!(!lightbox.is_zoomed());
        lightbox.toggle_zoom();
        lightbox.close();
        assert!(!lightbox.is_zoomed());
        assert_eq!(lightbox.sequence_len(), 0);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut lightbox = Lightbox::default();
        lightbox.open(sequence(5), 2);

        assert!(!lightbox.swipe(-59.0));
        assert!(!lightbox.swipe(60.0));
        assert_eq!(lightbox.current_index(), Some(2));

        assert!(lightbox.swipe(-80.0));
        assert_eq!(lightbox.current_index(), Some(3));
        assert!(lightbox.swipe(120.0));
        assert!(lightbox.swipe(61.0));
        assert_eq!(lightbox.current_index(), Some(1));
    }

    #[test]
    fn test_non_finite_swipe_is_ignored() {
        let mut lightbox = Lightbox::default();
        lightbox.open(sequence(5), 2);

        assert!(!lightbox.swipe(f32::NAN));
        assert!(!lightbox.swipe(f32::INFINITY));
        assert!(!lightbox.swipe(f32::NEG_INFINITY));
        assert_eq!(lightbox.current_index(), Some(2));
    }

    #[test]
    fn test_non_finite_threshold_uses_default() {
        for threshold in [f32::NAN, f32::INFINITY] {
            let mut lightbox = Lightbox::new(threshold);
            lightbox.open(sequence(5), 2);

            assert!(!lightbox.swipe(-60.0));
            assert!(lightbox.swipe(-61.0));
            assert_eq!(lightbox.current_index(), Some(3));
        }
    }
}
