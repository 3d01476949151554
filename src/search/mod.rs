//! Search core: literal case-insensitive matching, topic filtering and
//! match highlighting.
//!
//! Everything here is pure and total. Queries are always literal text, never
//! a pattern language, so no input can fail to "compile".
//!
//! # Module Structure
//!
//! - `matcher` - Case-insensitive literal substring scanning
//! - `filter` - Category + query filter over the catalog
//! - `highlight` - Split a name into matched/unmatched segments

mod filter;
mod highlight;
mod matcher;

pub use filter::{filter, normalize_query, CategoryFilter};
pub use highlight::{highlight, Segment};
pub use matcher::{contains_ignore_case, find_all};
