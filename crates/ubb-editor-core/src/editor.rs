//! The editor facade.
//!
//! `UbbEditor` ties the history, selection tracker, insertion functions and
//! panel state together and talks to the owner of the canonical value. It
//! never panics and never lets an error escape as anything but a returned
//! `Result` plus a transient notice.

use smol_str::SmolStr;
use web_time::Instant;

use crate::actions::{EditorAction, KeyCombo, KeybindingConfig, KeydownResult};
use crate::color::{self, ColorPicker, PICKER_RESET_COLOR};
use crate::config::EditorOptions;
use crate::emoji::EmojiCategory;
use crate::error::{EditorError, UploadError};
use crate::history::HistoryStack;
use crate::insert;
use crate::panel::{Mode, Panel, PanelState};
use crate::platform::SurfacePlatform;
use crate::selection::SelectionTracker;
use crate::tags::{self, Align, COLOR_TAG, FONT_SIZES, IMAGE_TAG, UPLOAD_TAG};
use crate::types::{Selection, TagEdit, char_len};
use crate::upload::{Notice, UploadFile, UploadTicket, Uploader};

/// The owner of the canonical editor value.
///
/// Closures taking `&str` are owners that ignore submit requests.
pub trait EditorOwner {
    /// Called after every committed edit, undo and redo.
    fn update(&mut self, value: &str);

    /// Called for Ctrl+Enter. Returns false when the owner has no submit
    /// handler.
    fn submit(&mut self) -> bool {
        false
    }
}

impl<F: FnMut(&str)> EditorOwner for F {
    fn update(&mut self, value: &str) {
        self(value)
    }
}

/// Headless UBB editor.
pub struct UbbEditor<O> {
    owner: O,
    options: EditorOptions,
    keybindings: KeybindingConfig,
    value: SmolStr,
    history: HistoryStack,
    selection: SelectionTracker,
    panels: PanelState,
    /// Set after an insertion: the surface must be focused and given the
    /// tracked selection on the next sync.
    restore_pending: bool,
    notice: Option<Notice>,
    upload_in_flight: Option<u64>,
    next_upload_id: u64,
}

impl<O: EditorOwner> UbbEditor<O> {
    /// Create an editor mirroring `initial`, which becomes the history floor.
    pub fn new(owner: O, initial: impl Into<SmolStr>, options: EditorOptions) -> Self {
        let value = initial.into();
        Self {
            owner,
            history: HistoryStack::new(value.clone()),
            options,
            keybindings: KeybindingConfig::standard(),
            value,
            selection: SelectionTracker::new(),
            panels: PanelState::new(),
            restore_pending: false,
            notice: None,
            upload_in_flight: None,
            next_upload_id: 0,
        }
    }

    pub fn with_keybindings(mut self, keybindings: KeybindingConfig) -> Self {
        self.keybindings = keybindings;
        self
    }

    // === Accessors ===

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selection(&self) -> Selection {
        self.selection.raw()
    }

    pub fn mode(&self) -> Mode {
        self.panels.mode()
    }

    pub fn panel(&self) -> &Panel {
        self.panels.panel()
    }

    pub fn emoji_category(&self) -> EmojiCategory {
        self.panels.emoji_category()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingConfig {
        &mut self.keybindings
    }

    pub fn restore_pending(&self) -> bool {
        self.restore_pending
    }

    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    /// The notice to show at `now`, if any has not expired.
    pub fn notice(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| !notice.is_expired(now))
            .map(|notice| notice.text.as_str())
    }

    // === Surface events ===

    /// The user typed; `value` is the surface's new content.
    pub fn on_input(&mut self, value: impl Into<SmolStr>) {
        let value = value.into();
        self.commit(value);
    }

    /// The surface lost focus with this selection.
    pub fn on_blur(&mut self, start: usize, end: usize) {
        self.selection.on_blur(start, end);
    }

    /// The surface gained focus. Typing always closes open panels.
    pub fn on_focus(&mut self) {
        self.panels.dismiss();
    }

    /// A click landed outside the editor.
    pub fn on_outside_click(&mut self) {
        self.panels.dismiss();
    }

    /// The owner's value changed, possibly out-of-band (e.g. a form reset).
    ///
    /// Values that already match the top of history are the owner echoing
    /// our own updates back and are ignored. Anything else becomes a new
    /// history entry and drops the redo sequence. The owner is not notified,
    /// it already has the value.
    pub fn sync_external(&mut self, value: &str) -> bool {
        if !self.history.reconcile(value) {
            return false;
        }
        self.value = self.history.current().clone();
        true
    }

    // === History ===

    pub fn undo(&mut self) -> SmolStr {
        let value = self.history.undo();
        self.value = value.clone();
        self.owner.update(&value);
        value
    }

    pub fn redo(&mut self) -> Option<SmolStr> {
        let value = self.history.redo()?;
        self.value = value.clone();
        self.owner.update(&value);
        Some(value)
    }

    // === Insertion ===

    /// Wrap the last captured selection in tag `name`.
    pub fn insert_tag(&mut self, name: &str, value: &str) -> Result<TagEdit, EditorError> {
        self.check_allowed(name)?;
        let selection = self.clamped_selection();
        let edit = insert::insert_tag(&self.value, selection, name, value);
        tracing::debug!(tag = name, ?selection, new = ?edit.selection, "insert tag");
        self.apply(edit.clone());
        Ok(edit)
    }

    /// Replace the last captured selection with an emoji fragment.
    pub fn insert_emoji(&mut self, fragment: &str) -> TagEdit {
        let selection = self.clamped_selection();
        let edit = insert::insert_fragment(&self.value, selection, fragment);
        self.apply(edit.clone());
        edit
    }

    /// Insert the `index`-th emoji of the selected category.
    pub fn insert_emoji_index(&mut self, index: u16) -> TagEdit {
        let fragment = self.panels.emoji_category().fragment(index);
        self.insert_emoji(&fragment)
    }

    pub fn set_align(&mut self, align: Align) -> Result<TagEdit, EditorError> {
        self.insert_tag("align", align.as_str())
    }

    /// Font size from the size selector. Out-of-range sizes are clamped.
    pub fn set_size(&mut self, size: u8) -> Result<TagEdit, EditorError> {
        let size = size.clamp(*FONT_SIZES.start(), *FONT_SIZES.end());
        self.insert_tag("size", &size.to_string())
    }

    /// A color was picked in the host's color picker.
    ///
    /// The picker is reset to its idle color whether or not the color was
    /// usable, so the next pick of the same color fires again.
    pub fn pick_color<P: ColorPicker + ?Sized>(
        &mut self,
        picker: &mut P,
        color: &str,
    ) -> Result<TagEdit, EditorError> {
        picker.set_color(PICKER_RESET_COLOR);
        let hex =
            color::normalize_hex(color).ok_or_else(|| EditorError::InvalidColor(color.into()))?;
        self.insert_tag(COLOR_TAG, &hex)
    }

    // === Panels ===

    /// A toolbar tag button was pressed. Tags that need a value open (or
    /// close) the extend input; the rest are inserted right away.
    pub fn press_tag_button(&mut self, name: &str) -> Result<Option<TagEdit>, EditorError> {
        if tags::needs_extend_input(name) {
            self.check_allowed(name)?;
            self.panels.press_extend(name);
            return Ok(None);
        }
        self.insert_tag(name, "").map(Some)
    }

    pub fn toggle_emoji(&mut self) {
        self.panels.toggle_emoji();
    }

    pub fn change_emoji_category(&mut self, category: EmojiCategory) {
        self.panels.set_emoji_category(category);
    }

    /// The file control was activated.
    pub fn open_upload(&mut self) -> Result<(), EditorError> {
        self.check_allowed(UPLOAD_TAG)?;
        self.panels.open_upload();
        Ok(())
    }

    pub fn set_extend_value(&mut self, value: impl Into<String>) {
        self.panels.set_extend_value(value);
    }

    /// Insert the pending extend tag with the typed value and close the panel.
    ///
    /// A rejected tag leaves the panel open with the typed value intact.
    pub fn commit_extend(&mut self) -> Result<Option<TagEdit>, EditorError> {
        let Some(pending) = self.panels.panel().extend_tag() else {
            return Ok(None);
        };
        self.check_allowed(&pending.name)?;
        let Some(tag) = self.panels.take_extend() else {
            return Ok(None);
        };
        self.insert_tag(&tag.name, &tag.value).map(Some)
    }

    /// Close the extend panel without inserting and hand focus back.
    pub fn cancel_extend(&mut self) {
        self.panels.take_extend();
        self.restore_pending = true;
    }

    /// Flip between editing and preview. The surface is refocused once it
    /// is back in editing mode.
    pub fn toggle_preview(&mut self) {
        self.panels.toggle_preview();
        self.restore_pending = true;
    }

    // === Surface restoration ===

    /// Take the selection the surface should show, if an insertion left one
    /// pending. Stays pending while previewing.
    pub fn take_pending_selection(&mut self) -> Option<Selection> {
        if !self.restore_pending || self.panels.mode().is_previewing() {
            return None;
        }
        self.restore_pending = false;
        Some(self.clamped_selection())
    }

    /// Apply a pending selection to the surface: focus it, then select.
    pub fn sync_surface<P: SurfacePlatform + ?Sized>(
        &mut self,
        platform: &P,
    ) -> Result<bool, EditorError> {
        let Some(selection) = self.take_pending_selection() else {
            return Ok(false);
        };
        platform.focus()?;
        self.on_focus();
        platform.set_selection_range(selection)?;
        Ok(true)
    }

    // === Keyboard and actions ===

    /// Handle a keydown on the focused surface.
    pub fn handle_keydown(&mut self, combo: &KeyCombo) -> KeydownResult {
        if self.panels.mode().is_previewing() {
            return KeydownResult::PassThrough;
        }
        if let Some(action) = self.keybindings.lookup(combo).cloned() {
            if let Err(e) = self.execute_action(&action) {
                tracing::warn!(error = %e, ?action, "keybinding action failed");
            }
            return KeydownResult::Handled;
        }
        if combo.key.is_navigation() || combo.key.is_modifier() {
            return KeydownResult::PassThrough;
        }
        KeydownResult::NotHandled
    }

    /// Execute an editor action.
    ///
    /// This is the central dispatch point for toolbar and keyboard input.
    /// Returns whether the editor value changed.
    pub fn execute_action(&mut self, action: &EditorAction) -> Result<bool, EditorError> {
        let value_before = self.value.clone();
        match action {
            EditorAction::InsertTag { name, value } => {
                self.insert_tag(name, value)?;
            }
            EditorAction::InsertEmoji { fragment } => {
                self.insert_emoji(fragment);
            }
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::ToggleExtend { name } => {
                self.check_allowed(name)?;
                self.panels.press_extend(name);
            }
            EditorAction::ToggleEmoji => self.toggle_emoji(),
            EditorAction::SetEmojiCategory(category) => self.change_emoji_category(*category),
            EditorAction::OpenUpload => self.open_upload()?,
            EditorAction::CommitExtend => {
                self.commit_extend()?;
            }
            EditorAction::CancelExtend => self.cancel_extend(),
            EditorAction::DismissPanels => self.on_outside_click(),
            EditorAction::TogglePreview => self.toggle_preview(),
            EditorAction::Submit => {
                if !self.owner.submit() {
                    tracing::debug!("submit requested without a submit handler");
                }
            }
        }
        Ok(self.value != value_before)
    }

    // === Uploads ===

    /// Validate a picked file and mark it outstanding.
    ///
    /// Fails without contacting anything when no upload-capable panel is
    /// open, when another upload is outstanding, or when the file is over
    /// the size limit. Failures are also shown as a notice.
    pub fn begin_upload(
        &mut self,
        file: &UploadFile,
        now: Instant,
    ) -> Result<UploadTicket, UploadError> {
        let result = self.validate_upload(file);
        match result {
            Ok(tag) => {
                let id = self.next_upload_id;
                self.next_upload_id += 1;
                self.upload_in_flight = Some(id);
                tracing::debug!(file = %file.name, size = file.size(), %tag, "upload started");
                Ok(UploadTicket {
                    id,
                    tag,
                    file_name: file.name.clone(),
                })
            }
            Err(e) => {
                tracing::warn!(file = %file.name, size = file.size(), error = %e, "upload rejected");
                self.set_notice(e.notice(), now);
                Err(e)
            }
        }
    }

    fn validate_upload(&self, file: &UploadFile) -> Result<SmolStr, UploadError> {
        let tag = match self.panels.panel().extend_tag() {
            Some(tag) if tag.name == UPLOAD_TAG || tag.name == IMAGE_TAG => tag.name.clone(),
            _ => return Err(UploadError::NoUploadPanel),
        };
        if !self.options.allowed_tags.allows(&tag) {
            return Err(UploadError::NotAllowed(tag));
        }
        if self.upload_in_flight.is_some() {
            return Err(UploadError::Busy);
        }
        if file.size() > self.options.max_upload_bytes {
            return Err(UploadError::TooLarge {
                size: file.size(),
                limit: self.options.max_upload_bytes,
            });
        }
        Ok(tag)
    }

    /// Resolve an outstanding upload with the service's answer.
    ///
    /// On success the reference is inserted at the current tracked
    /// selection, even if the panel was dismissed meanwhile. A ticket that is
    /// not the outstanding one is rejected and inserts nothing.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<SmolStr, UploadError>,
        now: Instant,
    ) -> Result<TagEdit, EditorError> {
        if self.upload_in_flight != Some(ticket.id) {
            tracing::warn!(ticket = ticket.id, "finishing an upload that is not outstanding");
            return Err(UploadError::StaleTicket(ticket.id).into());
        }
        self.upload_in_flight = None;
        match result {
            Ok(reference) => self.insert_tag(&ticket.tag, &reference),
            Err(e) => {
                tracing::warn!(file = %ticket.file_name, error = %e, "upload failed");
                self.set_notice(e.notice(), now);
                Err(e.into())
            }
        }
    }

    /// Validate, upload and insert in one go.
    ///
    /// Holds the editor for the duration of the upload; hosts that need the
    /// editor to stay interactive call [`Self::begin_upload`] and
    /// [`Self::finish_upload`] around their own call to the service.
    pub async fn handle_upload<U: Uploader + ?Sized>(
        &mut self,
        uploader: &U,
        file: UploadFile,
        now: impl Fn() -> Instant,
    ) -> Result<TagEdit, EditorError> {
        let ticket = self.begin_upload(&file, now())?;
        let result = uploader
            .upload(&file)
            .await
            .map_err(|e| UploadError::Transport(e.to_string()));
        self.finish_upload(ticket, result, now())
    }

    // === Notices ===

    pub fn set_notice(&mut self, text: impl Into<SmolStr>, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: now + self.options.notice_duration(),
        });
    }

    /// Drop the notice once it has expired. Returns whether it was dropped.
    pub fn clear_expired_notice(&mut self, now: Instant) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
            return true;
        }
        false
    }

    // === Internals ===

    fn check_allowed(&self, name: &str) -> Result<(), EditorError> {
        if self.options.allowed_tags.allows(name) {
            return Ok(());
        }
        tracing::warn!(tag = name, "tag not allowed");
        Err(EditorError::TagNotAllowed(name.into()))
    }

    fn clamped_selection(&self) -> Selection {
        self.selection.clamped(char_len(&self.value))
    }

    fn apply(&mut self, edit: TagEdit) {
        self.selection.set(edit.selection);
        self.restore_pending = true;
        self.commit(edit.value);
    }

    fn commit(&mut self, value: SmolStr) {
        self.history.record(value.clone());
        self.owner.update(&value);
        self.value = value;
    }
}
