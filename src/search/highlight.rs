use serde::Serialize;

use super::matcher::find_all;

/// A contiguous run of a topic name, tagged as matched or not.
///
/// Borrows from the highlighted text; concatenating every segment's `text`
/// in order reproduces the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    pub const fn mark(text: &'a str) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Split `text` into matched and unmatched segments for `query`.
///
/// - Empty query: one unmatched segment holding the whole text.
/// - Otherwise every case-insensitive literal occurrence of `query` becomes a
///   matched segment; the gaps between them become unmatched segments.
///
/// Segments never overlap, never leave gaps and are never empty (apart from
/// the single segment returned for an empty text).
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut last = 0;

    for range in find_all(text, query) {
        if range.start > last {
            segments.push(Segment::plain(&text[last..range.start]));
        }
        segments.push(Segment::mark(&text[range.start..range.end]));
        last = range.end;
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_empty_query_single_segment() {
        assert_eq!(
            highlight("Docker", ""),
            vec![Segment::plain("Docker")]
        );
    }

    #[test]
    fn test_empty_text_empty_query() {
        assert_eq!(highlight("", ""), vec![Segment::plain("")]);
    }

    #[test]
    fn test_cpp_literal() {
        assert_eq!(
            highlight("C++ Programming", "c++"),
            vec![Segment::mark("C++"), Segment::plain(" Programming")]
        );
    }

    #[test]
    fn test_match_in_middle() {
        assert_eq!(
            highlight("PostgreSQL", "gre"),
            vec![
                Segment::plain("Post"),
                Segment::mark("gre"),
                Segment::plain("SQL"),
            ]
        );
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(
            highlight("MySQL", "sql"),
            vec![Segment::plain("My"), Segment::mark("SQL")]
        );
    }

    #[test]
    fn test_multiple_matches_keep_original_case() {
        assert_eq!(
            highlight("Git & GitHub", "git"),
            vec![
                Segment::mark("Git"),
                Segment::plain(" & "),
                Segment::mark("Git"),
                Segment::plain("Hub"),
            ]
        );
    }

    #[test]
    fn test_adjacent_matches() {
        assert_eq!(
            highlight("aaaa", "aa"),
            vec![Segment::mark("aa"), Segment::mark("aa")]
        );
    }

    #[test]
    fn test_no_match_single_plain_segment() {
        assert_eq!(highlight("Docker", "zzz"), vec![Segment::plain("Docker")]);
    }

    #[test]
    fn test_whole_text_matched() {
        assert_eq!(highlight("AWS", "aws"), vec![Segment::mark("AWS")]);
    }

    #[test]
    fn test_lossless_with_emoji_and_accents() {
        let text = "Café 🐍 café";
        let segments = highlight(text, "CAFÉ");
        assert_eq!(concat(&segments), text);
        assert_eq!(segments.iter().filter(|s| s.matched).count(), 2);
    }

    #[test]
    fn test_segment_serializes() {
        let json = serde_json::to_string(&Segment::mark("SQL")).unwrap();
        assert_eq!(json, r#"{"text":"SQL","matched":true}"#);
    }
}
