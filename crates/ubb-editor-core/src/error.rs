//! Error types for the editor engine.
//!
//! None of these are fatal: the editor surfaces them in its notice area and
//! hands them back to the host, whose only job is to decide what else to show.

use miette::Diagnostic;
use smol_str::SmolStr;

use crate::platform::PlatformError;

/// Main error type for editor operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum EditorError {
    /// Tag is not enabled for this editor instance
    #[error("tag [{0}] is not enabled in this editor")]
    #[diagnostic(code(ubb_editor::tag_not_allowed))]
    TagNotAllowed(SmolStr),

    /// Picked color could not be read as a hex color
    #[error("invalid color: {0}")]
    #[diagnostic(code(ubb_editor::invalid_color), help("expected #rgb or #rrggbb"))]
    InvalidColor(String),

    /// Upload rejected or failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),

    /// Edit surface could not be synchronised
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Upload coordination errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[non_exhaustive]
pub enum UploadError {
    /// File exceeds the configured size limit; never sent
    #[error("file too large: {size} bytes exceeds the {limit} byte limit")]
    #[diagnostic(code(ubb_editor::upload::too_large))]
    TooLarge { size: u64, limit: u64 },

    /// Upload service failed
    #[error("upload failed: {0}")]
    #[diagnostic(code(ubb_editor::upload::transport))]
    Transport(String),

    /// Another upload from this editor has not resolved yet
    #[error("an upload is already in progress")]
    #[diagnostic(code(ubb_editor::upload::busy))]
    Busy,

    /// Upload started without the upload or image panel open
    #[error("no upload panel is open")]
    #[diagnostic(code(ubb_editor::upload::no_panel))]
    NoUploadPanel,

    /// The tag the reference would be inserted with is not enabled
    #[error("uploads into [{0}] are not enabled in this editor")]
    #[diagnostic(code(ubb_editor::upload::not_allowed))]
    NotAllowed(SmolStr),

    /// Ticket does not match the outstanding upload; already finished or
    /// never issued by this editor
    #[error("upload {0} is not outstanding")]
    #[diagnostic(code(ubb_editor::upload::stale_ticket))]
    StaleTicket(u64),
}

impl UploadError {
    /// Text for the editor's transient notice area.
    pub fn notice(&self) -> &'static str {
        match self {
            UploadError::TooLarge { .. } => "File too large",
            UploadError::Transport(_) => "Upload failed",
            UploadError::Busy => "Upload already in progress",
            UploadError::NoUploadPanel => "Open the upload panel first",
            UploadError::NotAllowed(_) => "Uploads are not enabled here",
            UploadError::StaleTicket(_) => "Upload is no longer pending",
        }
    }
}
