//! Color selection for the `color` tag.
//!
//! The picker widget itself lives outside the engine. It reports picked
//! colors to [`crate::UbbEditor::pick_color`] and is told what to show next
//! through [`ColorPicker`].

/// Color the picker shows when idle.
pub const PICKER_RESET_COLOR: &str = "#000000";

/// Palette rows offered by the picker, as written in its configuration.
pub const PALETTE: [[&str; 8]; 8] = [
    ["#f00", "#f90", "#ff0", "#0f0", "#0ff", "#00f", "#90f", "#f0f"],
    ["#f4cccc", "#fce5cd", "#fff2cc", "#d9ead3", "#d0e0e3", "#cfe2f3", "#d9d2e9", "#ead1dc"],
    ["#ea9999", "#f9cb9c", "#ffe599", "#b6d7a8", "#a2c4c9", "#9fc5e8", "#b4a7d6", "#d5a6bd"],
    ["#e06666", "#f6b26b", "#ffd966", "#93c47d", "#76a5af", "#6fa8dc", "#8e7cc3", "#c27ba0"],
    ["#c00", "#e69138", "#f1c232", "#6aa84f", "#45818e", "#3d85c6", "#674ea7", "#a64d79"],
    ["#900", "#b45f06", "#bf9000", "#38761d", "#134f5c", "#0b5394", "#351c75", "#741b47"],
    ["#600", "#783f04", "#7f6000", "#274e13", "#0c343d", "#073763", "#20124d", "#4c1130"],
    ["#000", "#444", "#666", "#999", "#ccc", "#eee", "#f3f3f3", "#fff"],
];

/// Host-side color picker widget.
pub trait ColorPicker {
    /// Show `color` as the picker's current color.
    fn set_color(&mut self, color: &str);
}

/// Normalise a hex color to lowercase `#rrggbb`.
///
/// Accepts 3- or 6-digit forms with or without the leading `#`.
pub fn normalize_hex(color: &str) -> Option<String> {
    let digits = color.trim().strip_prefix('#').unwrap_or(color.trim());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#F00").as_deref(), Some("#ff0000"));
        assert_eq!(normalize_hex("0b5394").as_deref(), Some("#0b5394"));
        assert_eq!(normalize_hex(" #ABCDEF ").as_deref(), Some("#abcdef"));
        assert_eq!(normalize_hex("#12345"), None);
        assert_eq!(normalize_hex("#ggg"), None);
        assert_eq!(normalize_hex(""), None);
    }

    #[test]
    fn test_palette_is_valid() {
        for color in PALETTE.iter().flatten() {
            assert!(normalize_hex(color).is_some(), "{color}");
        }
    }
}
