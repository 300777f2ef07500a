//! The rule registry and the cascade that evaluates it.
//!
//! A [RuleRegistry] holds a plural [RuleList], a singular [RuleList], and a
//! set of uncountable words. It is assembled with a [RegistryBuilder] and is
//! immutable afterwards, so a single registry can be shared between threads
//! without any locking.
//!
//! # Examples
//!
//! ```
//! use en_textkit::registry::{Direction, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .add_plural_rule("$", "s")?
//!     .add_singular_rule("s$", "")?
//!     .add_irregular("goose", "geese")?
//!     .add_uncountable("moose");
//! let registry = builder.build();
//!
//! assert_eq!(registry.plural("duck"), "ducks");
//! assert_eq!(registry.plural("Goose"), "Geese");
//! assert_eq!(registry.singular("geese"), "goose");
//! assert_eq!(registry.inflect(Direction::Plural, "moose"), "moose");
//! # Ok::<(), en_textkit::Error>(())
//! ```

use crate::{
    error::{Error, Result},
    rule::RuleList,
    table, util,
};
use once_cell::sync::Lazy;
use std::{borrow::Cow, collections::HashSet};
use tracing::{debug, trace};

/// Which way a word is being inflected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Plural,
    Singular,
}

/// An immutable set of inflection rules.
#[derive(Clone, Debug)]
pub struct RuleRegistry {
    plurals: RuleList,
    singulars: RuleList,
    uncountables: HashSet<String>,
}

static ENGLISH: Lazy<RuleRegistry> = Lazy::new(|| {
    RuleRegistry::build_english().expect("Could not compile the built-in English rule table")
});

impl RuleRegistry {
    /// Returns the shared registry holding the built-in English rules. It is
    /// built the first time this is called.
    pub fn english() -> &'static RuleRegistry {
        &ENGLISH
    }

    /// Builds a new, independent copy of the built-in English rules.
    pub fn build_english() -> Result<RuleRegistry> {
        let mut builder = RegistryBuilder::new();
        for (pattern, replacement) in table::PLURALS {
            builder.add_plural_rule(pattern, replacement)?;
        }
        for (pattern, replacement) in table::SINGULARS {
            builder.add_singular_rule(pattern, replacement)?;
        }
        for (singular, plural) in table::IRREGULARS {
            builder.add_irregular(singular, plural)?;
        }
        for word in table::UNCOUNTABLES {
            builder.add_uncountable(word);
        }
        Ok(builder.build())
    }

    pub fn plural<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(Direction::Plural, word)
    }

    pub fn singular<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(Direction::Singular, word)
    }

    /// Runs `word` through the rules for `direction`. The highest priority
    /// rule that matches wins. If nothing matches, or the word is
    /// uncountable, the word comes back unchanged and borrowed.
    pub fn inflect<'a>(&self, direction: Direction, word: &'a str) -> Cow<'a, str> {
        if word.is_empty() || self.is_uncountable(word) {
            return Cow::Borrowed(word);
        }

        for rule in self.rules(direction).by_priority() {
            #[cfg(feature = "debug")]
            trace!(?direction, word, pattern = rule.pattern(), "trying rule");

            if let Some(new) = rule.apply(word) {
                trace!(
                    ?direction,
                    word,
                    pattern = rule.pattern(),
                    priority = rule.priority(),
                    "rule matched"
                );
                return restore_case(word, new);
            }
        }

        Cow::Borrowed(word)
    }

    /// Uncountable words are compared case-insensitively.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    pub fn rules(&self, direction: Direction) -> &RuleList {
        match direction {
            Direction::Plural => &self.plurals,
            Direction::Singular => &self.singulars,
        }
    }
}

// If the whole word was upper case then the whole result is upper cased,
// which also flattens any mixed-case tail a rule produced.
fn restore_case<'a>(orig: &str, new: Cow<'a, str>) -> Cow<'a, str> {
    if util::is_uppercase(orig) && !util::is_uppercase(&new) {
        return Cow::Owned(new.to_uppercase());
    }
    new
}

/// Collects rules in priority order and produces a [RuleRegistry].
///
/// Every rule added later outranks every rule added earlier in the same
/// direction, so add general rules first and exceptions last.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    plurals: RuleList,
    singulars: RuleList,
    uncountables: HashSet<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_plural_rule(&mut self, pattern: &str, replacement: &str) -> Result<&mut Self> {
        self.plurals.push(pattern, replacement)?;
        Ok(self)
    }

    pub fn add_singular_rule(&mut self, pattern: &str, replacement: &str) -> Result<&mut Self> {
        self.singulars.push(pattern, replacement)?;
        Ok(self)
    }

    /// Adds one plural rule and one singular rule for a word pair that does
    /// not follow the suffix rules.
    ///
    /// The first letter of the matched word is captured and reused, so
    /// "Person" becomes "People" and "person" becomes "people". Only the end
    /// of the word is anchored, so ("man", "men") also turns "woman" into
    /// "women".
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> Result<&mut Self> {
        let (s_first, s_rest) = util::split_first(singular);
        let (p_first, p_rest) = util::split_first(plural);
        if s_first.is_empty() || p_first.is_empty() {
            return Err(Error::EmptyIrregularForm {
                singular: singular.to_string(),
                plural: plural.to_string(),
            });
        }

        self.plurals
            .push(&anchored_pattern(s_first, s_rest), &tail_template(p_rest))?;
        self.singulars
            .push(&anchored_pattern(p_first, p_rest), &tail_template(s_rest))?;
        Ok(self)
    }

    pub fn add_uncountable(&mut self, word: &str) -> &mut Self {
        self.uncountables.insert(word.to_lowercase());
        self
    }

    pub fn build(self) -> RuleRegistry {
        debug!(
            plurals = self.plurals.len(),
            singulars = self.singulars.len(),
            uncountables = self.uncountables.len(),
            "built rule registry"
        );
        RuleRegistry {
            plurals: self.plurals,
            singulars: self.singulars,
            uncountables: self.uncountables,
        }
    }
}

fn anchored_pattern(first: &str, rest: &str) -> String {
    format!("({}){}$", regex::escape(first), regex::escape(rest))
}

fn tail_template(rest: &str) -> String {
    format!("${{1}}{}", rest.replace('$', "$$"))
}
