pub mod sanitizer;

pub use sanitizer::{is_sanitized, sanitize};
