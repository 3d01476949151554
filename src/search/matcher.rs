use std::ops::Range;

/// Compare two characters ignoring case.
///
/// Folding is done per character, so a match can never end in the middle of
/// a character of the original text.
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Try to match `needle` at the very start of `haystack`.
///
/// Returns the byte length of the matched prefix of `haystack`.
fn match_prefix(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for &expected in needle {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(idx, _)| idx))
}

/// Find every occurrence of `needle` in `text`, ignoring case.
///
/// Returns byte ranges into `text`, non-overlapping and in left-to-right
/// order (after a match the scan resumes at the end of that match). An empty
/// needle has no occurrences.
pub fn find_all(text: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = needle.chars().collect();
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match match_prefix(rest, &needle) {
            Some(len) => {
                ranges.push(pos..pos + len);
                pos += len;
            }
            None => {
                // Advance one whole character to stay on a boundary
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    ranges
}

/// Whether `needle` occurs in `text`, ignoring case. An empty needle is
/// contained in every text.
///
/// Uses the same per-character folding as [`find_all`], so anything this
/// accepts also gets a highlight. A character whose lowercase form is longer
/// than one character (e.g. `İ` → `i̇`) only matches that full form, so `"i"`
/// does not match `"İstanbul"` even though a whole-string lowercase would.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle: Vec<char> = needle.chars().collect();
    text.char_indices()
        .any(|(idx, _)| match_prefix(&text[idx..], &needle).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_basic() {
        assert_eq!(find_all("PostgreSQL", "sql"), vec![7..10]);
    }

    #[test]
    fn test_find_all_multiple_non_overlapping() {
        assert_eq!(find_all("aaaa", "aa"), vec![0..2, 2..4]);
        assert_eq!(find_all("Java Development", "a"), vec![1..2, 3..4]);
    }

    #[test]
    fn test_find_all_metacharacters_are_literal() {
        assert_eq!(find_all("C++ Programming", "c++"), vec![0..3]);
        assert_eq!(find_all("React.js", ".js"), vec![5..8]);
        assert!(find_all("Reactxjs", ".js").is_empty());
        assert_eq!(find_all("(a|b)*", "(A|B)*"), vec![0..6]);
    }

    #[test]
    fn test_find_all_empty_needle() {
        assert!(find_all("anything", "").is_empty());
    }

    #[test]
    fn test_find_all_needle_longer_than_text() {
        assert!(find_all("Go", "Golang").is_empty());
    }

    #[test]
    fn test_find_all_multibyte_boundaries() {
        let text = "Ünïcödé Ünïcödé";
        let ranges = find_all(text, "üNÏ");
        assert_eq!(ranges.len(), 2);
        for r in ranges {
            assert!(text.is_char_boundary(r.start));
            assert!(text.is_char_boundary(r.end));
            assert_eq!(text[r].to_lowercase(), "ünï");
        }
    }

    #[test]
    fn test_multi_char_lowercase_agrees_with_find_all() {
        let name = "İstanbul Tour";
        assert!(!contains_ignore_case(name, "i"));
        assert!(find_all(name, "i").is_empty());

        assert!(contains_ignore_case(name, "İSTANBUL"));
        assert_eq!(find_all(name, "stanbul"), vec![2..9]);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("MySQL Database", "SQL"));
        assert!(contains_ignore_case("MySQL Database", ""));
        assert!(!contains_ignore_case("MongoDB", "sql"));
        assert!(contains_ignore_case("Git & GitHub", "& git"));
    }
}
