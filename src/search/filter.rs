use crate::catalog::{Topic, ALL_CATEGORY};

use super::matcher::contains_ignore_case;

/// Category predicate for the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    /// Match every topic.
    All,
    /// Match topics whose category is exactly this name (case-sensitive).
    Only(&'a str),
}

impl<'a> CategoryFilter<'a> {
    /// Interpret a category name; the `"All"` sentinel disables filtering.
    pub fn from_name(name: &'a str) -> Self {
        if name == ALL_CATEGORY {
            Self::All
        } else {
            Self::Only(name)
        }
    }

    pub fn matches(&self, topic: &Topic) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => topic.category == *name,
        }
    }
}

/// Normalize raw search input: surrounding whitespace is ignored.
///
/// Case folding happens during matching, not here.
pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// Select the topics matching both the category and the search query.
///
/// The query is trimmed and matched case-insensitively as a literal
/// substring of the topic name; an empty query matches everything. The
/// result keeps catalog order. An unknown category simply matches nothing.
pub fn filter<'t>(topics: &'t [Topic], query: &str, category: &str) -> Vec<&'t Topic> {
    let query = normalize_query(query);
    let category = CategoryFilter::from_name(category);

    topics
        .iter()
        .filter(|topic| category.matches(topic) && contains_ignore_case(&topic.name, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn names<'a>(topics: &[&'a Topic]) -> Vec<&'a str> {
        topics.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_all_is_identity() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.topics(), "", ALL_CATEGORY);
        let expected: Vec<&Topic> = catalog.topics().iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_sql_query() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.topics(), "sql", ALL_CATEGORY);
        assert_eq!(names(&result), vec!["MySQL Database", "PostgreSQL"]);
    }

    #[test]
    fn test_database_category() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.topics(), "", "Database");
        assert_eq!(
            names(&result),
            vec!["MySQL Database", "PostgreSQL", "MongoDB"]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin();
        assert!(filter(catalog.topics(), "zzz", ALL_CATEGORY).is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.topics(), "   PYTHON  ", ALL_CATEGORY);
        assert_eq!(names(&result), vec!["Python Programming"]);
    }

    #[test]
    fn test_whitespace_only_query_matches_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(filter(catalog.topics(), " \t ", ALL_CATEGORY).len(), 24);
    }

    #[test]
    fn test_query_and_category_combine() {
        let catalog = Catalog::builtin();
        let result = filter(catalog.topics(), "programming", "Programming");
        assert_eq!(
            names(&result),
            vec!["Python Programming", "C Programming", "C++ Programming"]
        );
        assert!(filter(catalog.topics(), "python", "Database").is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(filter(catalog.topics(), "", "database").is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = Catalog::builtin();
        assert!(filter(catalog.topics(), "", "Astrology").is_empty());
    }

    #[test]
    fn test_literal_metacharacters() {
        let catalog = Catalog::builtin();
        assert_eq!(
            names(&filter(catalog.topics(), "c++", ALL_CATEGORY)),
            vec!["C++ Programming"]
        );
        assert_eq!(
            names(&filter(catalog.topics(), ".js", ALL_CATEGORY)),
            vec!["React.js", "Node.js"]
        );
        assert!(filter(catalog.topics(), "(", ALL_CATEGORY).is_empty());
    }

    #[test]
    fn test_category_filter_from_name() {
        assert_eq!(CategoryFilter::from_name("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_name("Tools"),
            CategoryFilter::Only("Tools")
        );
    }
}
