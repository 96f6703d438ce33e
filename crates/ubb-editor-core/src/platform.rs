//! Platform abstraction for the edit surface.
//!
//! The engine never touches the surface directly. After an insertion it
//! records which selection the surface should show, and the host applies it
//! through [`SurfacePlatform`] once the surface has been re-rendered. A
//! browser host would implement this over a `<textarea>`; a native host over
//! its text widget.

use crate::types::Selection;

/// The host could not apply an operation to the edit surface, typically
/// because it is not mounted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("edit surface: {0}")]
pub struct PlatformError(pub String);

/// Host operations on the edit surface.
pub trait SurfacePlatform {
    /// Give the edit surface keyboard focus.
    fn focus(&self) -> Result<(), PlatformError>;

    /// Select `selection` (char offsets) in the edit surface.
    fn set_selection_range(&self, selection: Selection) -> Result<(), PlatformError>;
}
