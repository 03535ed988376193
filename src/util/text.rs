//! Text helpers for rendering record fields in table cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Replace control characters so stored text cannot inject terminal sequences.
///
/// Newlines and tabs become spaces; any other control character becomes
/// U+FFFD so that it stays visible.
pub fn sanitize_cell(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

/// Truncate a string to fit a display width, appending an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let current_width = UnicodeWidthStr::width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    let ellipsis = "…";
    let target_width = max_width - UnicodeWidthStr::width(ellipsis);
    let mut width = 0;
    let mut result = String::new();

    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > target_width {
            break;
        }
        result.push(c);
        width += char_width;
    }

    result.push_str(ellipsis);
    result
}
