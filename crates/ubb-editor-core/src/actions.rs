//! Editor actions and keybindings.
//!
//! `EditorAction` is the semantic operation, decoupled from whether it came
//! from a toolbar button, a keyboard shortcut or a host callback.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::emoji::EmojiCategory;

/// All possible editor actions.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // === Insertion ===
    /// Wrap the last selection in a tag, with an optional value.
    InsertTag { name: SmolStr, value: SmolStr },

    /// Replace the last selection with an emoji fragment.
    InsertEmoji { fragment: SmolStr },

    // === History ===
    Undo,
    Redo,

    // === Panels ===
    /// Open or close the extend input for a tag that needs a value.
    ToggleExtend { name: SmolStr },
    ToggleEmoji,
    SetEmojiCategory(EmojiCategory),
    OpenUpload,
    /// Commit the value typed into the extend input.
    CommitExtend,
    CancelExtend,
    /// Close every panel (click outside the editor).
    DismissPanels,

    // === Mode ===
    TogglePreview,

    /// Hand the content to the owner's submit handler.
    Submit,
}

impl EditorAction {
    pub fn tag(name: impl Into<SmolStr>) -> Self {
        Self::InsertTag {
            name: name.into(),
            value: SmolStr::default(),
        }
    }

    pub fn tag_with_value(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self::InsertTag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Key values for keyboard input.
///
/// Platform-specific code converts native key events to this enum. Only the
/// keys the editor cares about get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    Control,
    Meta,
    Shift,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Alt | Self::Control | Self::Meta | Self::Shift)
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    /// Character keys compare case-insensitively: browsers report `Z` for
    /// Ctrl+Z while caps lock is on.
    fn normalized(&self) -> Self {
        match &self.key {
            Key::Character(s) => Self {
                key: Key::Character(s.to_lowercase().into()),
                modifiers: self.modifiers,
            },
            _ => self.clone(),
        }
    }
}

/// Maps key combinations to editor actions.
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, EditorAction>,
}

impl KeybindingConfig {
    /// No bindings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ctrl+Z undo, Ctrl+Y redo, Ctrl+Enter submit.
    pub fn standard() -> Self {
        let mut config = Self::empty();
        config.bind(KeyCombo::ctrl(Key::character("z")), EditorAction::Undo);
        config.bind(KeyCombo::ctrl(Key::character("y")), EditorAction::Redo);
        config.bind(KeyCombo::ctrl(Key::Enter), EditorAction::Submit);
        config
    }

    pub fn bind(&mut self, combo: KeyCombo, action: EditorAction) {
        self.bindings.insert(combo.normalized(), action);
    }

    pub fn unbind(&mut self, combo: &KeyCombo) -> Option<EditorAction> {
        self.bindings.remove(&combo.normalized())
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&EditorAction> {
        self.bindings.get(&combo.normalized())
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
    /// Event should be passed through (navigation, etc.).
    PassThrough,
}
