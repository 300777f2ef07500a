//! Pluralization and singularization with the built-in English rules.
//!
//! These functions use the shared registry returned by
//! [RuleRegistry::english]. Build your own registry with
//! [RegistryBuilder](crate::registry::RegistryBuilder) if you need different
//! rules.
//!
//! # Examples
//!
//! ```
//! use en_textkit::inflector::{make_plural, make_singular, pluralize};
//!
//! assert_eq!(make_plural("category"), "categories");
//! assert_eq!(make_singular("People"), "Person");
//! assert_eq!(make_plural("SHEEP"), "SHEEP");
//! assert_eq!(pluralize(3, "box"), "3 boxes");
//! ```

use crate::registry::RuleRegistry;
use std::borrow::Cow;

pub fn make_plural(word: &str) -> Cow<'_, str> {
    RuleRegistry::english().plural(word)
}

pub fn make_singular(word: &str) -> Cow<'_, str> {
    RuleRegistry::english().singular(word)
}

/// Formats `count` followed by `word`, singularized when `count` is exactly
/// one and pluralized otherwise.
pub fn pluralize(count: i64, word: &str) -> String {
    let word = if count == 1 {
        make_singular(word)
    } else {
        make_plural(word)
    };
    format!("{} {}", count, word)
}
