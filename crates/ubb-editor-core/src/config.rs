//! Per-instance editor options.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::panel::Panel;

/// Uploads larger than this are rejected before contacting the service.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Which tags the toolbar may insert.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowedTags {
    #[default]
    All,
    Only(Vec<SmolStr>),
}

impl AllowedTags {
    pub fn allows(&self, name: &str) -> bool {
        match self {
            AllowedTags::All => true,
            AllowedTags::Only(names) => names.iter().any(|n| n == name),
        }
    }
}

/// Options for one editor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Height of the edit surface in rem. The whole editor is a few rem
    /// taller once the toolbar and panels are added.
    pub height_rem: f32,
    pub allowed_tags: AllowedTags,
    pub max_upload_bytes: u64,
    /// How long a transient notice stays visible.
    pub notice_duration_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            height_rem: 32.5,
            allowed_tags: AllowedTags::All,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            notice_duration_ms: 2500,
        }
    }
}

impl EditorOptions {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Height of the edit surface given the open panel. The extend input row
    /// takes two rem from the surface while it is visible.
    pub fn surface_height_rem(&self, panel: &Panel) -> f32 {
        if panel.shows_extend_input() {
            self.height_rem
        } else {
            self.height_rem + 2.0
        }
    }

    /// Upper bound for the height of the whole editor.
    pub fn max_height_rem(&self) -> f32 {
        self.height_rem + 6.125
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{ExtendTag, Panel};

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert_eq!(options.max_upload_bytes, 5_242_880);
        assert_eq!(options.notice_duration(), Duration::from_millis(2500));
        assert_eq!(options.max_height_rem(), 38.625);
    }

    #[test]
    fn test_allowed_tags() {
        assert!(AllowedTags::All.allows("b"));
        let only = AllowedTags::Only(vec!["b".into(), "url".into()]);
        assert!(only.allows("url"));
        assert!(!only.allows("img"));
    }

    #[test]
    fn test_surface_height() {
        let options = EditorOptions::default();
        assert_eq!(options.surface_height_rem(&Panel::None), 34.5);
        assert_eq!(options.surface_height_rem(&Panel::ExtendInput(ExtendTag::new("url"))), 32.5);
        assert_eq!(options.surface_height_rem(&Panel::ExtendInput(ExtendTag::new("upload"))), 34.5);
    }
}
