//! Emoji categories offered by the emoji panel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Emoji set shown in the emoji panel. Each set has its own markup prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiCategory {
    Em,
    #[default]
    Ac,
    Mj,
    Tb,
}

impl EmojiCategory {
    pub fn prefix(&self) -> &'static str {
        match self {
            EmojiCategory::Em => "em",
            EmojiCategory::Ac => "ac",
            EmojiCategory::Mj => "mj",
            EmojiCategory::Tb => "tb",
        }
    }

    /// Markup fragment for the `index`-th emoji of this set, e.g. `[ac01]`.
    pub fn fragment(&self, index: u16) -> String {
        format!("[{}{:02}]", self.prefix(), index)
    }
}

impl fmt::Display for EmojiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
