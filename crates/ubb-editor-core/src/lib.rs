//! ubb-editor-core: headless UBB markup editing engine.
//!
//! This crate provides:
//! - `HistoryStack` - whole-value undo/redo that reconciles with an external owner
//! - `SelectionTracker` - last selection captured when the edit surface blurs
//! - `insert_tag` / `insert_fragment` - tag wrapping over the tracked selection
//! - `PanelState` - edit/preview mode and the mutually exclusive toolbar panels
//! - Upload coordination against a host-provided `Uploader`
//! - `UbbEditor<O>` - the facade wiring all of the above to an `EditorOwner`
//!
//! Rendering markup, transport and the edit surface itself belong to the host.

pub mod actions;
pub mod color;
pub mod config;
pub mod editor;
pub mod emoji;
pub mod error;
pub mod history;
pub mod insert;
pub mod panel;
pub mod platform;
pub mod selection;
pub mod tags;
pub mod types;
pub mod upload;

pub use actions::{EditorAction, Key, KeyCombo, KeybindingConfig, KeydownResult, Modifiers};
pub use color::{ColorPicker, PALETTE};
pub use config::{AllowedTags, EditorOptions};
pub use editor::{EditorOwner, UbbEditor};
pub use emoji::EmojiCategory;
pub use error::{EditorError, UploadError};
pub use history::HistoryStack;
pub use insert::{insert_fragment, insert_tag, wrap_tag};
pub use panel::{ExtendTag, Mode, Panel, PanelState};
pub use platform::{PlatformError, SurfacePlatform};
pub use selection::SelectionTracker;
pub use smol_str::SmolStr;
pub use tags::{Align, TagPolicy, TagSpec};
pub use types::{Selection, TagEdit};
pub use upload::{Notice, UploadFile, UploadTicket, Uploader};
