//! Upload coordination.
//!
//! Files picked in the upload panel are checked locally, handed to the
//! host's upload service, and the returned reference is inserted as a tag
//! value. The engine only tracks which upload is outstanding; the network
//! call happens in the host between [`crate::UbbEditor::begin_upload`] and
//! [`crate::UbbEditor::finish_upload`].

use std::future::Future;

use smol_str::SmolStr;
use web_time::Instant;

/// A file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: SmolStr,
    pub mime_type: Option<SmolStr>,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<SmolStr>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            data,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<SmolStr>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// The upload service the host provides.
///
/// Returns an opaque reference (usually a URL) that is inserted verbatim as
/// the tag value. Retries, if any, are the service's business.
pub trait Uploader {
    fn upload(
        &self,
        file: &UploadFile,
    ) -> impl Future<Output = Result<SmolStr, Box<dyn std::error::Error + Send + Sync + 'static>>>;
}

/// Handle for an upload that passed validation and is now outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub(crate) id: u64,
    /// Tag the reference will be inserted with (`upload` or `img`).
    pub tag: SmolStr,
    pub file_name: SmolStr,
}

/// A short message shown above the toolbar until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: SmolStr,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
