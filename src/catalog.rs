//! Topic catalog: the immutable list of records the browser searches over.
//!
//! The catalog is fixed at startup. It is either the built-in list or a
//! TOML file of `[[topic]]` tables supplied with `--catalog`. Once built it
//! is never mutated, so every consumer borrows it freely.
use serde::{Deserialize, Serialize};
use crate::util::strip_control_chars;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Name of the synthetic category that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog file too large: {0}")]
    TooLarge(String),

    #[error("Duplicate topic id {0}")]
    DuplicateId(u32),

    #[error("Topic {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },

    #[error("Topic {0} uses the reserved category name \"All\"")]
    ReservedCategory(u32),
}

// ============================================================================
// Topic
// ============================================================================

/// A single browsable topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    "•".to_string()
}

impl Topic {
    pub fn new(id: u32, name: &str, category: &str, icon: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Built-in records: (id, name, category, icon).
const BUILTIN_TOPICS: [(u32, &str, &str, &str); 24] = [
    (1, "Thermodynamics", "Physics", "🔥"),
    (2, "Python Programming", "Programming", "🐍"),
    (3, "Java Development", "Programming", "☕"),
    (4, "HTML Basics", "Web Development", "🌐"),
    (5, "MySQL Database", "Database", "🗄️"),
    (6, "C Programming", "Programming", "💻"),
    (7, "C++ Programming", "Programming", "⚙️"),
    (8, "JavaScript", "Web Development", "🟨"),
    (9, "React.js", "Web Development", "⚛️"),
    (10, "Node.js", "Web Development", "🟩"),
    (11, "PHP Development", "Programming", "🐘"),
    (12, "PostgreSQL", "Database", "🐘"),
    (13, "MongoDB", "Database", "🍃"),
    (14, "Data Structures", "Computer Science", "📚"),
    (15, "Algorithms", "Computer Science", "🧠"),
    (16, "AWS Basics", "Cloud Computing", "☁️"),
    (17, "Azure Cloud", "Cloud Computing", "🔵"),
    (18, "Google Cloud", "Cloud Computing", "🌤️"),
    (19, "Docker", "DevOps", "🐳"),
    (20, "Machine Learning", "AI/ML", "🤖"),
    (21, "Deep Learning", "AI/ML", "🧬"),
    (22, "Git & GitHub", "Tools", "🔧"),
    (23, "VS Code", "Tools", "🧩"),
    (24, "LeetCode", "Computer Science", "🏆"),
];

// ============================================================================
// Catalog
// ============================================================================

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "topic")]
    topics: Vec<Topic>,
}

/// Ordered, immutable topic list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Maximum catalog file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// The built-in 24-topic catalog.
    pub fn builtin() -> Self {
        let topics = BUILTIN_TOPICS
            .iter()
            .map(|&(id, name, category, icon)| Topic::new(id, name, category, icon))
            .collect();
        Self { topics }
    }

    /// Build a catalog from arbitrary records, validating them.
    ///
    /// Order is preserved exactly as given.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(topics.len());
        for topic in &topics {
            if !seen.insert(topic.id) {
                return Err(CatalogError::DuplicateId(topic.id));
            }
            if topic.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: topic.id,
                    field: "name",
                });
            }
            if topic.category.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: topic.id,
                    field: "category",
                });
            }
            if topic.category == ALL_CATEGORY {
                return Err(CatalogError::ReservedCategory(topic.id));
            }
        }
        Ok(Self { topics })
    }

    /// Load a catalog from a TOML file of `[[topic]]` tables.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > Self::MAX_FILE_SIZE {
            return Err(CatalogError::TooLarge(format!(
                "Catalog file is {} bytes (max {} bytes)",
                meta.len(),
                Self::MAX_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        let topics = file
            .topics
            .into_iter()
            .map(|t| Topic {
                name: strip_control_chars(&t.name).into_owned(),
                category: strip_control_chars(&t.category).into_owned(),
                icon: strip_control_chars(&t.icon).into_owned(),
                ..t
            })
            .collect();
        let catalog = Self::from_topics(topics)?;

        tracing::info!(
            path = %path.display(),
            topics = catalog.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Derive the category list: `"All"` followed by every distinct category in
/// order of first appearance.
pub fn derive_categories(topics: &[Topic]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for topic in topics {
        // HashSet only answers membership; order comes from the scan
        if seen.insert(topic.category.as_str()) {
            categories.push(topic.category.clone());
        }
    }
    categories
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("topics_catalog_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_builtin_has_24_unique_topics() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 24);
        let ids: HashSet<u32> = catalog.topics().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 24);
        assert_eq!(catalog.topics()[0].name, "Thermodynamics");
        assert_eq!(catalog.topics()[23].name, "LeetCode");
    }

    #[test]
    fn test_builtin_passes_validation() {
        let topics = Catalog::builtin().topics().to_vec();
        assert!(Catalog::from_topics(topics).is_ok());
    }

    #[test]
    fn test_derive_categories_first_seen_order() {
        let categories = derive_categories(Catalog::builtin().topics());
        assert_eq!(
            categories,
            vec![
                "All",
                "Physics",
                "Programming",
                "Web Development",
                "Database",
                "Computer Science",
                "Cloud Computing",
                "DevOps",
                "AI/ML",
                "Tools",
            ]
        );
    }

    #[test]
    fn test_derive_categories_empty_catalog() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let topics = vec![
            Topic::new(1, "Rust", "Programming", "🦀"),
            Topic::new(1, "Go", "Programming", "🐹"),
        ];
        assert!(matches!(
            Catalog::from_topics(topics),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let topics = vec![Topic::new(3, "  ", "Programming", "🦀")];
        let err = Catalog::from_topics(topics).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyField {
                id: 3,
                field: "name"
            }
        ));
    }

    #[test]
    fn test_reserved_category_rejected() {
        let topics = vec![Topic::new(9, "Everything", "All", "🌍")];
        assert!(matches!(
            Catalog::from_topics(topics),
            Err(CatalogError::ReservedCategory(9))
        ));
    }

    #[test]
    fn test_load_file_preserves_order_and_defaults_icon() {
        let path = write_temp(
            "valid",
            r#"
[[topic]]
id = 10
name = "Rust"
category = "Programming"
icon = "🦀"

[[topic]]
id = 2
name = "SQLite"
category = "Database"
"#,
        );

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.topics()[0].name, "Rust");
        assert_eq!(catalog.topics()[1].id, 2);
        assert_eq!(catalog.topics()[1].icon, "•");

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_invalid_toml() {
        let path = write_temp("invalid", "[[topic]\nid = ");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/tmp/topics_no_such_catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_load_empty_file_yields_empty_catalog() {
        let path = write_temp("empty", "");
        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.is_empty());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_strips_terminal_escapes() {
        let path = write_temp(
            "escapes",
            "[[topic]]\nid = 1\nname = \"\\u001b[31mRust\\u001b[0m\"\ncategory = \"Programming\"\n",
        );
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.topics()[0].name, "Rust");
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
