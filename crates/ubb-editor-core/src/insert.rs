//! Tag insertion.
//!
//! Pure functions that compute the next editor value and the selection to
//! restore after wrapping the current selection in a tag, or replacing it
//! with a literal fragment. The editor facade commits the result to history.

use smol_str::SmolStr;

use crate::tags::{self, TagPolicy};
use crate::types::{Selection, TagEdit, char_len, char_to_byte};

/// Build the wrapped span for `name` around `selected`.
pub fn wrap_tag(name: &str, value: &str, selected: &str) -> String {
    let attr = if value.is_empty() {
        String::new()
    } else {
        format!("={value}")
    };
    match tags::policy(name) {
        TagPolicy::ReplaceSelection => format!("[{name}]{value}[/{name}]"),
        TagPolicy::DefaultSelection => {
            let content = if selected.is_empty() { value } else { selected };
            format!("[{name}{attr}]{content}[/{name}]")
        }
        TagPolicy::Plain => format!("[{name}{attr}]{selected}[/{name}]"),
    }
}

/// Split `text` into before/selected/after around a (clamped) selection.
fn split(text: &str, selection: Selection) -> (&str, &str, &str) {
    let selection = selection.clamp(char_len(text));
    let start = char_to_byte(text, selection.start);
    let end = char_to_byte(text, selection.end);
    (&text[..start], &text[start..end], &text[end..])
}

fn splice(before: &str, span: &str, after: &str, reselect: bool) -> TagEdit {
    let mut value = String::with_capacity(before.len() + span.len() + after.len());
    value.push_str(before);
    value.push_str(span);
    value.push_str(after);

    let span_start = char_len(before);
    let span_end = span_start + char_len(span);
    let selection = if reselect {
        Selection::new(span_start, span_end)
    } else {
        Selection::collapsed(span_end)
    };

    TagEdit {
        value: SmolStr::from(value),
        selection,
    }
}

/// Wrap the selection of `text` in tag `name`, with an optional value.
pub fn insert_tag(text: &str, selection: Selection, name: &str, value: &str) -> TagEdit {
    let (before, selected, after) = split(text, selection);
    let span = wrap_tag(name, value, selected);
    splice(before, &span, after, tags::reselects(name))
}

/// Replace the selection of `text` with a literal fragment, cursor after it.
pub fn insert_fragment(text: &str, selection: Selection, fragment: &str) -> TagEdit {
    let (before, _, after) = split(text, selection);
    splice(before, fragment, after, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wraps_selection() {
        let edit = insert_tag("hello world", Selection::new(0, 5), "b", "");
        assert_eq!(edit.value, "[b]hello[/b] world");
        assert_eq!(edit.selection, Selection::new(0, 10));
    }

    #[test]
    fn test_plain_with_value() {
        let edit = insert_tag("abc", Selection::new(1, 2), "align", "center");
        assert_eq!(edit.value, "a[align=center]b[/align]c");
        assert_eq!(edit.selection, Selection::new(1, 24));
    }

    #[test]
    fn test_plain_empty_selection_still_wraps() {
        let edit = insert_tag("ab", Selection::collapsed(1), "i", "");
        assert_eq!(edit.value, "a[i][/i]b");
        assert_eq!(edit.selection, Selection::new(1, 8));
    }

    #[test]
    fn test_url_without_selection_repeats_value() {
        let edit = insert_tag("", Selection::collapsed(0), "url", "http://x");
        assert_eq!(edit.value, "[url=http://x]http://x[/url]");
    }

    #[test]
    fn test_url_with_selection_keeps_text() {
        let edit = insert_tag("see here", Selection::new(4, 8), "url", "http://x");
        assert_eq!(edit.value, "see [url=http://x]here[/url]");
    }

    #[test]
    fn test_url_both_empty() {
        let edit = insert_tag("", Selection::collapsed(0), "url", "");
        assert_eq!(edit.value, "[url][/url]");
    }

    #[test]
    fn test_replace_selection_discards_nested_markup() {
        let edit = insert_tag("x[b]y[/b]z", Selection::new(1, 9), "video", "v.mp4");
        assert_eq!(edit.value, "x[video]v.mp4[/video]z");
        assert_eq!(edit.selection, Selection::new(1, 21));
    }

    #[test]
    fn test_image_collapses_cursor() {
        let edit = insert_tag("ab", Selection::new(1, 1), "img", "p.png");
        assert_eq!(edit.value, "a[img]p.png[/img]b");
        assert_eq!(edit.selection, Selection::collapsed(17));
    }

    #[test]
    fn test_cursor_at_end() {
        let edit = insert_tag("abc", Selection::collapsed(3), "u", "");
        assert_eq!(edit.value, "abc[u][/u]");
    }

    #[test]
    fn test_stale_selection_is_clamped() {
        let edit = insert_tag("ab", Selection::new(5, 40), "b", "");
        assert_eq!(edit.value, "ab[b][/b]");
        assert_eq!(edit.selection, Selection::new(2, 9));
    }

    #[test]
    fn test_multibyte_offsets() {
        let edit = insert_tag("你好世界", Selection::new(2, 4), "b", "");
        assert_eq!(edit.value, "你好[b]世界[/b]");
        assert_eq!(edit.selection, Selection::new(2, 11));
    }

    #[test]
    fn test_fragment_replaces_selection() {
        let edit = insert_fragment("hello world", Selection::new(6, 11), "[ac01]");
        assert_eq!(edit.value, "hello [ac01]");
        assert_eq!(edit.selection, Selection::collapsed(12));
    }

    #[test]
    fn test_wrapping_never_shrinks_surroundings() {
        let text = "some [i]text[/i] here";
        let len = char_len(text);
        for start in 0..=len {
            for end in start..=len {
                for name in ["b", "url", "img", "size"] {
                    let edit = insert_tag(text, Selection::new(start, end), name, "");
                    let kept = len - (end - start);
                    assert!(char_len(&edit.value) >= kept + 2, "{name} {start}..{end}");
                }
            }
        }
    }
}
