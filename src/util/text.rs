use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::search::Segment;

/// Calculates the display width of a string in terminal columns.
///
/// CJK characters and most emoji take two columns, combining marks none.
///
/// ```
/// use topics::util::display_width;
///
/// assert_eq!(display_width("Rust"), 4);
/// assert_eq!(display_width("🐍 Python"), 9);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis appended when text is cut
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Byte index of the longest prefix of `s` that fits in `max_width` columns.
fn fit_prefix(s: &str, max_width: usize) -> (usize, usize) {
    let mut end = 0;
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        end = idx + c.len_utf8();
    }
    (end, width)
}

/// Truncates a string to fit within `max_width` columns, appending "..." when
/// text is cut.
///
/// Widths of 3 or less get a bare prefix since there is no room for a
/// character plus the ellipsis.
///
/// ```
/// use topics::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Machine Learning", 10), "Machine...");
/// assert_eq!(truncate_to_width("Git", 10), "Git");
/// assert_eq!(truncate_to_width("Docker", 2), "Do");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS_WIDTH {
        let (end, _) = fit_prefix(s, max_width);
        return Cow::Borrowed(&s[..end]);
    }
    let (end, _) = fit_prefix(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
}

/// Cut highlighted segments so their combined width fits in `max_width`.
///
/// Segment boundaries and match flags are preserved; a trailing unmatched
/// "..." segment marks the cut. Segments past the cut are dropped.
pub fn truncate_segments<'a>(segments: &[Segment<'a>], max_width: usize) -> Vec<Segment<'a>> {
    let total: usize = segments.iter().map(|s| display_width(s.text)).sum();
    if total <= max_width {
        return segments.to_vec();
    }

    let (budget, ellipsis) = if max_width <= ELLIPSIS_WIDTH {
        (max_width, false)
    } else {
        (max_width - ELLIPSIS_WIDTH, true)
    };

    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut used = 0;
    for seg in segments {
        let (end, width) = fit_prefix(seg.text, budget - used);
        if end > 0 {
            out.push(Segment {
                text: &seg.text[..end],
                matched: seg.matched,
            });
        }
        used += width;
        if end < seg.text.len() {
            break;
        }
    }
    if ellipsis {
        out.push(Segment::plain(ELLIPSIS));
    }
    out
}

/// Strip terminal control characters and ANSI escape sequences.
///
/// Removes C0 controls except tab/newline/CR, DEL, CSI sequences
/// (`ESC [` ... final byte), OSC sequences (`ESC ]` ... BEL or `ESC \`) and
/// bare ESC bytes. Clean input is returned borrowed.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    fn is_control(b: u8) -> bool {
        b == 0x1b || b == 0x7f || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
    }

    let bytes = s.as_bytes();
    if !bytes.iter().any(|&b| is_control(b)) {
        return Cow::Borrowed(s);
    }

    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;
    while i < len {
        match bytes[i] {
            0x1b if bytes.get(i + 1) == Some(&b'[') => {
                i += 2;
                while i < len {
                    let final_byte = (0x40..=0x7e).contains(&bytes[i]);
                    i += 1;
                    if final_byte {
                        break;
                    }
                }
            }
            0x1b if bytes.get(i + 1) == Some(&b']') => {
                i += 2;
                while i < len {
                    if bytes[i] == 0x07 {
                        i += 1;
                        break;
                    }
                    if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            b if is_control(b) => i += 1,
            _ => {
                let start = i;
                while i < len && !is_control(bytes[i]) {
                    i += 1;
                }
                // Only ASCII control bytes end a run, so this is a char boundary
                out.push_str(&s[start..i]);
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Machine Learning", 10), "Machine...");
        assert_eq!(truncate_to_width("Docker", 10), "Docker");
        assert_eq!(truncate_to_width("Docker", 6), "Docker");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // 量子 = 4 columns
        assert_eq!(truncate_to_width("量子物理学", 7), "量子...");
        assert_eq!(truncate_to_width("量子", 1), "");
    }

    #[test]
    fn test_truncate_narrow_widths() {
        assert_eq!(truncate_to_width("Kubernetes", 0), "");
        assert_eq!(truncate_to_width("Kubernetes", 3), "Kub");
        assert_eq!(truncate_to_width("Kubernetes", 4), "K...");
    }

    #[test]
    fn test_truncate_segments_fits() {
        let segs = vec![Segment::plain("My"), Segment::mark("SQL"), Segment::plain(" Database")];
        assert_eq!(truncate_segments(&segs, 40), segs);
    }

    #[test]
    fn test_truncate_segments_cuts_inside_mark() {
        let segs = vec![Segment::plain("Postgre"), Segment::mark("SQL")];
        // 10 columns total, budget 9 - 3 = 6
        assert_eq!(
            truncate_segments(&segs, 9),
            vec![Segment::plain("Postgr"), Segment::plain("...")]
        );
        assert_eq!(truncate_segments(&segs, 10), segs);
    }

    #[test]
    fn test_truncate_segments_keeps_partial_mark() {
        let segs = vec![Segment::plain("My"), Segment::mark("SQL"), Segment::plain(" Database")];
        // budget 7 - 3 = 4: "My" + "SQ"
        assert_eq!(
            truncate_segments(&segs, 7),
            vec![Segment::plain("My"), Segment::mark("SQ"), Segment::plain("...")]
        );
    }

    #[test]
    fn test_truncate_segments_narrow() {
        let segs = vec![Segment::mark("Git")];
        assert_eq!(truncate_segments(&segs, 2), vec![Segment::mark("Gi")]);
        assert!(truncate_segments(&segs, 0).is_empty());
    }

    #[test]
    fn test_strip_clean_text_borrowed() {
        let result = strip_control_chars("Web Development");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_removes_controls_and_del() {
        assert_eq!(strip_control_chars("Gi\x00t\x7f"), "Git");
        assert_eq!(strip_control_chars("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_strip_ansi_sequences() {
        assert_eq!(strip_control_chars("\x1b[1;31mRust\x1b[0m"), "Rust");
        assert_eq!(strip_control_chars("\x1b]0;title\x07AWS"), "AWS");
        assert_eq!(strip_control_chars("\x1b]0;title\x1b\\AWS"), "AWS");
        assert_eq!(strip_control_chars("bare\x1besc"), "bareesc");
    }

    #[test]
    fn test_strip_keeps_unicode() {
        assert_eq!(strip_control_chars("🐍 \x1b[32mPython\x1b[0m"), "🐍 Python");
    }
}
