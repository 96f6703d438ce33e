//! Tag registry: which UBB tags the toolbar knows and how each one wraps text.

use serde::{Deserialize, Serialize};

/// How a tag treats the current selection when it is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagPolicy {
    /// `[name]` or `[name=value]` wrapped around the selection.
    Plain,
    /// Media-like tags: `[name]value[/name]`, the selection is discarded.
    ReplaceSelection,
    /// Link-like tags: `[name=value]` around the selection, or around the
    /// value itself when nothing is selected.
    DefaultSelection,
}

/// Static description of a toolbar tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub policy: TagPolicy,
    /// Whether the inserted span is selected afterwards. When false the
    /// cursor collapses to the end of the span.
    pub reselect: bool,
    /// Whether the button opens the extend-input panel to ask for a value.
    pub extend_input: bool,
}

impl TagSpec {
    const fn plain(name: &'static str) -> Self {
        Self {
            name,
            policy: TagPolicy::Plain,
            reselect: true,
            extend_input: false,
        }
    }

    const fn media(name: &'static str, reselect: bool) -> Self {
        Self {
            name,
            policy: TagPolicy::ReplaceSelection,
            reselect,
            extend_input: true,
        }
    }
}

pub const UPLOAD_TAG: &str = "upload";
pub const IMAGE_TAG: &str = "img";
pub const URL_TAG: &str = "url";
pub const COLOR_TAG: &str = "color";

/// Every tag the toolbar can produce.
pub const KNOWN_TAGS: &[TagSpec] = &[
    TagSpec::plain("b"),
    TagSpec::plain("i"),
    TagSpec::plain("u"),
    TagSpec::plain("del"),
    TagSpec::plain("align"),
    TagSpec::plain("size"),
    TagSpec::plain(COLOR_TAG),
    TagSpec::plain("replyview"),
    TagSpec {
        name: URL_TAG,
        policy: TagPolicy::DefaultSelection,
        reselect: true,
        extend_input: true,
    },
    TagSpec::media(IMAGE_TAG, false),
    TagSpec::media("video", true),
    TagSpec::media("audio", true),
    TagSpec::media(UPLOAD_TAG, true),
];

/// Look up a known tag.
pub fn lookup(name: &str) -> Option<&'static TagSpec> {
    KNOWN_TAGS.iter().find(|spec| spec.name == name)
}

/// Wrapping policy for a tag. Unknown names wrap like plain tags.
pub fn policy(name: &str) -> TagPolicy {
    lookup(name).map_or(TagPolicy::Plain, |spec| spec.policy)
}

/// Whether the inserted span should stay selected after insertion.
pub fn reselects(name: &str) -> bool {
    lookup(name).is_none_or(|spec| spec.reselect)
}

/// Whether pressing this tag's button asks for an auxiliary value first.
pub fn needs_extend_input(name: &str) -> bool {
    lookup(name).is_some_and(|spec| spec.extend_input)
}

/// Alignment values accepted by the `align` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Font sizes offered by the size selector.
pub const FONT_SIZES: std::ops::RangeInclusive<u8> = 1..=7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies() {
        assert_eq!(policy("b"), TagPolicy::Plain);
        assert_eq!(policy("url"), TagPolicy::DefaultSelection);
        for media in ["img", "video", "audio", "upload"] {
            assert_eq!(policy(media), TagPolicy::ReplaceSelection, "{media}");
        }
        assert_eq!(policy("quote"), TagPolicy::Plain);
    }

    #[test]
    fn test_only_images_collapse_cursor() {
        assert!(!reselects("img"));
        assert!(reselects("video"));
        assert!(reselects("upload"));
        assert!(reselects("b"));
        assert!(reselects("unknown"));
    }

    #[test]
    fn test_extend_input_tags() {
        assert!(needs_extend_input("url"));
        assert!(needs_extend_input("img"));
        assert!(needs_extend_input("upload"));
        assert!(!needs_extend_input("b"));
        assert!(!needs_extend_input("color"));
        assert!(!needs_extend_input("nope"));
    }

    #[test]
    fn test_align_names() {
        assert_eq!(Align::Center.as_str(), "center");
    }
}
