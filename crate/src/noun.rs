//! The [Noun] struct.
//!
//! # Examples
//!
//! ```
//! use en_textkit::noun::Noun;
//! use en_textkit::term::Term; // Provides the interesting methods
//!
//! let noun = Noun::new("dog");
//! assert_eq!(noun.plural(), "dogs");
//! assert_eq!(noun.singular(), "dog");
//! assert_eq!(noun.with_count(2), "2 dogs");
//! ```
use crate::{registry::RuleRegistry, term::Term};
use std::borrow::Cow;

/// A `Noun` is a single word inflected with the built-in English rules.
#[derive(Debug)]
pub struct Noun<'a>(&'a str);

impl<'a> Term<'a> for Noun<'a> {
    /// Creates a new noun from a string. Nothing checks that the word is
    /// actually a noun, so `Noun::new("eat")` will happily pluralize to
    /// "eats".
    fn new(noun: &'a str) -> Self {
        Self(noun)
    }

    fn singular(&self) -> Cow<'a, str> {
        RuleRegistry::english().singular(self.0)
    }

    fn plural(&self) -> Cow<'a, str> {
        RuleRegistry::english().plural(self.0)
    }
}
