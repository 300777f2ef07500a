//! Provides the [Term] trait, which defines the methods shared by word
//! wrappers such as [Noun](crate::noun::Noun).

use std::borrow::Cow;

/// A word that can be inflected between singular and plural.
pub trait Term<'a> {
    fn new(word: &'a str) -> Self;

    /// Returns the singular form of the word. If no rule applies, this
    /// returns the word given to `new` without allocating a new
    /// [String](std::string::String).
    fn singular(&self) -> Cow<'a, str>;

    /// Returns the plural form of the word. A word that is entirely upper
    /// case yields an entirely upper case plural, so "DOG" becomes "DOGS". In
    /// any other case the first letter keeps its case and the rest comes from
    /// the rule that matched. If no rule applies, this returns the word given
    /// to `new` without allocating a new [String](std::string::String).
    fn plural(&self) -> Cow<'a, str>;

    /// Returns the count followed by the word, singular when the count is one
    /// and plural otherwise.
    fn with_count(&self, count: i64) -> String {
        if count == 1 {
            format!("{} {}", count, self.singular())
        } else {
            format!("{} {}", count, self.plural())
        }
    }
}
