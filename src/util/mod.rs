//! Utility functions for common operations.
//!
//! - **Text processing**: Unicode-aware width calculation and truncation,
//!   including truncation of highlighted name segments
//! - **Sanitizing**: stripping terminal escapes from catalog text
//!
//! ```
//! use topics::util::{display_width, truncate_to_width};
//!
//! let width = display_width("⚛️ React.js");
//! let cut = truncate_to_width("Object-Oriented Programming", 12);
//! assert_eq!(cut, "Object-Or...");
//! # let _ = width;
//! ```

mod text;

pub use text::{display_width, strip_control_chars, truncate_segments, truncate_to_width};
