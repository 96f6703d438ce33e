//! Value history for undo/redo.
//!
//! The editor keeps whole-value snapshots rather than edit operations: the
//! canonical value is owned outside the editor and may be replaced wholesale,
//! so there is no reliable operation log to invert. Snapshots are `SmolStr`,
//! which keeps short values inline and makes longer ones cheap to clone.

use smol_str::SmolStr;

/// Past and redo sequences of editor values.
///
/// `past` is oldest-first and its last element is the current value. It is
/// never popped below one element, and its first element is the value the
/// editor was created with. `redo` is a stack whose last element is the most
/// recently undone value.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    past: Vec<SmolStr>,
    redo: Vec<SmolStr>,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(SmolStr::default())
    }
}

impl HistoryStack {
    /// Create a history whose floor is `initial`.
    pub fn new(initial: impl Into<SmolStr>) -> Self {
        Self {
            past: vec![initial.into()],
            redo: Vec::new(),
        }
    }

    /// The value on top of the past sequence.
    pub fn current(&self) -> &SmolStr {
        // `past` is never empty.
        &self.past[self.past.len() - 1]
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Commit a new value. Clears the redo sequence.
    pub fn record(&mut self, value: impl Into<SmolStr>) -> SmolStr {
        let value = value.into();
        self.redo.clear();
        self.past.push(value.clone());
        tracing::debug!(depth = self.past.len(), "history record");
        value
    }

    /// Step back one value.
    ///
    /// At the floor this returns the empty value and leaves both sequences
    /// untouched: undoing past the first entry blanks the editor.
    pub fn undo(&mut self) -> SmolStr {
        if self.past.len() == 1 {
            tracing::debug!("history undo at floor, resetting to blank");
            return SmolStr::default();
        }
        if let Some(top) = self.past.pop() {
            self.redo.push(top);
        }
        tracing::debug!(
            depth = self.past.len(),
            redo = self.redo.len(),
            "history undo"
        );
        self.current().clone()
    }

    /// Re-apply the most recently undone value, if any.
    pub fn redo(&mut self) -> Option<SmolStr> {
        let value = self.redo.pop()?;
        self.past.push(value.clone());
        tracing::debug!(
            depth = self.past.len(),
            redo = self.redo.len(),
            "history redo"
        );
        Some(value)
    }

    /// Fold an externally supplied value into history.
    ///
    /// When the owner's value differs from the top of the past sequence it is
    /// pushed as a new entry and the redo sequence is dropped. Returns whether
    /// anything changed.
    pub fn reconcile(&mut self, external: &str) -> bool {
        if self.current() == external {
            return false;
        }
        tracing::debug!(len = external.len(), "reconciling external value");
        self.record(external);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(values: &[&str]) -> HistoryStack {
        let mut h = HistoryStack::new("");
        for v in values {
            h.record(*v);
        }
        h
    }

    #[test]
    fn test_undo_redo_sequence() {
        let mut h = history(&["A", "B", "C"]);
        assert_eq!(h.undo(), "B");
        assert_eq!(h.undo(), "A");
        assert_eq!(h.redo().as_deref(), Some("B"));
        assert_eq!(h.current(), "B");
        assert!(h.can_redo());

        // New edit should clear redo
        h.record("D");
        assert!(!h.can_redo());
        assert_eq!(h.redo(), None);
        assert_eq!(h.current(), "D");
    }

    #[test]
    fn test_undo_at_floor_returns_blank() {
        let mut h = HistoryStack::new("start");
        assert!(!h.can_undo());
        assert_eq!(h.undo(), "");
        assert_eq!(h.undo_depth(), 1);
        assert_eq!(h.redo_depth(), 0);
        assert_eq!(h.current(), "start");
    }

    #[test]
    fn test_undo_never_pops_floor() {
        let mut h = history(&["A"]);
        assert_eq!(h.undo(), "");
        assert_eq!(h.undo(), "");
        assert_eq!(h.undo_depth(), 1);
        assert_eq!(h.redo().as_deref(), Some("A"));
        assert_eq!(h.redo(), None);
    }

    #[test]
    fn test_redo_restores_exact_value() {
        let mut h = history(&["héllo\nwörld"]);
        h.undo();
        assert_eq!(h.redo().as_deref(), Some("héllo\nwörld"));
    }

    #[test]
    fn test_reconcile_pushes_and_clears_redo() {
        let mut h = history(&["A", "B"]);
        h.undo();
        assert!(h.can_redo());

        assert!(!h.reconcile("A"));
        assert!(h.can_redo());

        assert!(h.reconcile("reset"));
        assert_eq!(h.current(), "reset");
        assert!(!h.can_redo());
        assert_eq!(h.undo(), "A");
    }

    #[test]
    fn test_single_record_undoes_to_initial() {
        let mut h = HistoryStack::new("start");
        h.record("A");
        assert_eq!(h.undo(), "start");
        assert_eq!(h.current(), "start");
        assert_eq!(h.redo().as_deref(), Some("A"));
    }

    #[test]
    fn test_long_session_keeps_initial_value() {
        let mut h = HistoryStack::new("initial draft");
        let mut value = String::from("initial draft");
        for _ in 0..500 {
            value.push('x');
            h.record(value.as_str());
        }
        assert_eq!(h.undo_depth(), 501);

        let mut last = SmolStr::default();
        while h.can_undo() {
            last = h.undo();
        }
        assert_eq!(last, "initial draft");
        assert_eq!(h.undo(), "");
        assert_eq!(h.current(), "initial draft");
    }
}
