//! Core editor types: selection and edit results.
//!
//! Offsets are Unicode scalar (char) offsets into the editor value, never bytes.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An ordered selection in the edit surface.
///
/// Unlike a cursor with anchor/head, the surface only ever reports an ordered
/// pair, so `start <= end` holds for every value built through [`Selection::new`].
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, swapping the bounds if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed selection (cursor position).
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the selection is collapsed (empty, cursor only).
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Get the selection length.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Same as [`Selection::is_collapsed`].
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Clamp both bounds into `[0, len]`.
    ///
    /// Offsets captured on blur can outlive the text they were measured
    /// against when the owner swaps the value out-of-band.
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Selection {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// Result of a tag or fragment insertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagEdit {
    /// The full editor value after the edit.
    pub value: SmolStr,
    /// Selection to restore on the edit surface once it is focused again.
    pub selection: Selection,
}

/// Length of a string in chars.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a char offset to a byte offset, saturating at the end of `s`.
pub(crate) fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_orders_bounds() {
        let sel = Selection::new(10, 5);
        assert_eq!(sel.start, 5);
        assert_eq!(sel.end, 10);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(7);
        assert!(sel.is_collapsed());
        assert!(sel.is_empty());
        assert_eq!(sel.to_range(), 7..7);
    }

    #[test]
    fn test_selection_clamp() {
        assert_eq!(Selection::new(3, 20).clamp(8), Selection::new(3, 8));
        assert_eq!(Selection::new(12, 20).clamp(8), Selection::collapsed(8));
        assert_eq!(Selection::new(1, 2).clamp(8), Selection::new(1, 2));
    }

    #[test]
    fn test_char_to_byte_multibyte() {
        let s = "你好ab";
        assert_eq!(char_to_byte(s, 0), 0);
        assert_eq!(char_to_byte(s, 1), 3);
        assert_eq!(char_to_byte(s, 2), 6);
        assert_eq!(char_to_byte(s, 4), s.len());
        assert_eq!(char_to_byte(s, 99), s.len());
        assert_eq!(char_len(s), 4);
    }
}
