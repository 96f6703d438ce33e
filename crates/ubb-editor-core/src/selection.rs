//! Last-known selection of the edit surface.

use crate::types::Selection;

/// Remembers where the selection was when the edit surface last lost focus.
///
/// Toolbar buttons steal focus from the surface, so by the time a button
/// handler runs the live selection is gone. Every insertion works from the
/// offsets captured here instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    last: Selection,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the offsets reported by the surface as it loses focus.
    ///
    /// Offsets are stored as reported; they are in bounds for the text the
    /// surface was showing at the time.
    pub fn on_blur(&mut self, start: usize, end: usize) {
        self.last = Selection::new(start, end);
    }

    /// Overwrite the stored selection after the engine itself moved it.
    pub fn set(&mut self, selection: Selection) {
        self.last = selection;
    }

    /// The stored selection as captured.
    pub fn raw(&self) -> Selection {
        self.last
    }

    /// The stored selection clamped to a text of `len` chars.
    pub fn clamped(&self, len: usize) -> Selection {
        self.last.clamp(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_records_offsets() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.raw(), Selection::collapsed(0));
        tracker.on_blur(2, 6);
        assert_eq!(tracker.raw(), Selection::new(2, 6));
    }

    #[test]
    fn test_clamped_after_value_shrinks() {
        let mut tracker = SelectionTracker::new();
        tracker.on_blur(4, 12);
        assert_eq!(tracker.clamped(6), Selection::new(4, 6));
        assert_eq!(tracker.clamped(0), Selection::collapsed(0));
        // Clamping does not rewrite the stored offsets.
        assert_eq!(tracker.raw(), Selection::new(4, 12));
    }
}
