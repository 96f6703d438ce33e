//! Editing mode and auxiliary panel state.
//!
//! The toolbar has three mutually exclusive auxiliary panels: the extend
//! input (asking for a URL, media address or file), the emoji picker, and
//! nothing at all. Keeping them in one enum makes it impossible to show two
//! at once.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::emoji::EmojiCategory;
use crate::tags::UPLOAD_TAG;

/// Whether the surface shows the raw markup or its rendered preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Editing,
    Previewing,
}

impl Mode {
    pub fn is_previewing(&self) -> bool {
        matches!(self, Mode::Previewing)
    }

    fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Previewing,
            Mode::Previewing => Mode::Editing,
        }
    }
}

/// A tag waiting for its auxiliary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendTag {
    pub name: SmolStr,
    /// What the user has typed into the extend input so far.
    pub value: String,
}

impl ExtendTag {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }

    pub fn is_upload(&self) -> bool {
        self.name == UPLOAD_TAG
    }
}

/// The auxiliary panel currently open below the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Panel {
    #[default]
    None,
    ExtendInput(ExtendTag),
    Emoji,
}

impl Panel {
    pub fn extend_tag(&self) -> Option<&ExtendTag> {
        match self {
            Panel::ExtendInput(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Panel::Emoji)
    }

    /// Whether the extend text input row is visible. The upload panel only
    /// opens a file chooser and has no text row.
    pub fn shows_extend_input(&self) -> bool {
        self.extend_tag().is_some_and(|tag| !tag.is_upload())
    }
}

/// Mode plus panel, with the transitions the toolbar can trigger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    mode: Mode,
    panel: Panel,
    emoji_category: EmojiCategory,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn emoji_category(&self) -> EmojiCategory {
        self.emoji_category
    }

    /// A tag button that needs a value was pressed. Pressing the same button
    /// again closes its panel.
    pub fn press_extend(&mut self, name: &str) {
        let same = self.panel.extend_tag().is_some_and(|tag| tag.name == name);
        self.panel = if same {
            Panel::None
        } else {
            Panel::ExtendInput(ExtendTag::new(name))
        };
        tracing::trace!(tag = name, open = !same, "extend button");
    }

    pub fn toggle_emoji(&mut self) {
        self.panel = if self.panel.is_emoji() {
            Panel::None
        } else {
            Panel::Emoji
        };
        tracing::trace!(open = self.panel.is_emoji(), "emoji button");
    }

    /// The file control was activated. Always lands on the upload panel.
    pub fn open_upload(&mut self) {
        self.panel = Panel::ExtendInput(ExtendTag::new(UPLOAD_TAG));
        tracing::trace!("upload control");
    }

    /// Close whatever panel is open. Used for outside clicks, surface focus,
    /// commit and cancel.
    pub fn dismiss(&mut self) {
        if self.panel != Panel::None {
            tracing::trace!("panel dismissed");
        }
        self.panel = Panel::None;
    }

    pub fn toggle_preview(&mut self) {
        self.mode = self.mode.toggled();
        tracing::trace!(mode = ?self.mode, "preview toggled");
    }

    pub fn set_emoji_category(&mut self, category: EmojiCategory) {
        self.emoji_category = category;
        tracing::trace!(%category, "emoji category");
    }

    /// Update the value typed into the extend input. Ignored when no extend
    /// panel is open.
    pub fn set_extend_value(&mut self, value: impl Into<String>) {
        if let Panel::ExtendInput(tag) = &mut self.panel {
            tag.value = value.into();
        }
    }

    /// Close the extend panel, handing back the pending tag.
    pub fn take_extend(&mut self) -> Option<ExtendTag> {
        match std::mem::take(&mut self.panel) {
            Panel::ExtendInput(tag) => Some(tag),
            other => {
                self.panel = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PanelState::new();
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.panel(), &Panel::None);
        assert_eq!(state.emoji_category(), EmojiCategory::Ac);
    }

    #[test]
    fn test_extend_toggles_and_switches() {
        let mut state = PanelState::new();
        state.press_extend("url");
        assert_eq!(state.panel().extend_tag().map(|t| t.name.as_str()), Some("url"));

        state.set_extend_value("http://x");
        state.press_extend("img");
        let tag = state.panel().extend_tag().unwrap();
        assert_eq!(tag.name, "img");
        assert_eq!(tag.value, "");

        state.press_extend("img");
        assert_eq!(state.panel(), &Panel::None);
    }

    #[test]
    fn test_emoji_and_extend_are_exclusive() {
        let mut state = PanelState::new();
        state.press_extend("url");
        state.toggle_emoji();
        assert_eq!(state.panel(), &Panel::Emoji);

        state.press_extend("video");
        assert!(!state.panel().is_emoji());

        state.toggle_emoji();
        state.toggle_emoji();
        assert_eq!(state.panel(), &Panel::None);
    }

    #[test]
    fn test_upload_always_opens() {
        let mut state = PanelState::new();
        state.open_upload();
        state.open_upload();
        let tag = state.panel().extend_tag().unwrap();
        assert!(tag.is_upload());
        assert!(!state.panel().shows_extend_input());
    }

    #[test]
    fn test_preview_keeps_panel() {
        let mut state = PanelState::new();
        state.toggle_emoji();
        state.toggle_preview();
        assert_eq!(state.mode(), Mode::Previewing);
        assert!(state.panel().is_emoji());
        state.toggle_preview();
        assert_eq!(state.mode(), Mode::Editing);
    }

    #[test]
    fn test_dismiss_closes_any_panel() {
        let mut state = PanelState::new();
        state.press_extend("audio");
        state.dismiss();
        assert_eq!(state.panel(), &Panel::None);
        state.toggle_emoji();
        state.dismiss();
        assert_eq!(state.panel(), &Panel::None);
    }

    #[test]
    fn test_take_extend() {
        let mut state = PanelState::new();
        state.toggle_emoji();
        assert_eq!(state.take_extend(), None);
        assert!(state.panel().is_emoji());

        state.press_extend("url");
        state.set_extend_value("http://a");
        let tag = state.take_extend().unwrap();
        assert_eq!(tag.value, "http://a");
        assert_eq!(state.panel(), &Panel::None);
    }
}
