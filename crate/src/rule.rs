//! A single pattern/replacement rule and the ordered lists that hold them.

use crate::error::{Error, Result};
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;

/// One step of the inflection cascade. The pattern is compiled
/// case-insensitively when the rule is created and never changes after that.
///
/// The replacement is a template in the `regex` crate's syntax, so capture
/// groups are written as `${1}`, `${2}`, and so on. A group that did not
/// participate in the match expands to the empty string.
#[derive(Clone, Debug)]
pub struct InflectionRule {
    regex: Regex,
    replacement: String,
    priority: usize,
}

impl InflectionRule {
    pub(crate) fn new(pattern: &str, replacement: &str, priority: usize) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
            priority,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The rule's registration index within its list. Higher wins.
    pub fn priority(&self) -> usize {
        self.priority
    }

    /// Returns `None` if the pattern does not match anywhere in `word`.
    /// Otherwise every match is replaced by the expanded template.
    pub fn apply<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        if !self.regex.is_match(word) {
            return None;
        }
        Some(
            self.regex
                .replace_all(word, |caps: &Captures| self.expand(caps)),
        )
    }

    fn expand(&self, caps: &Captures) -> String {
        let mut expanded = String::new();
        caps.expand(&self.replacement, &mut expanded);
        expanded
    }
}

/// The rules for one direction of inflection, kept in registration order.
#[derive(Clone, Debug, Default)]
pub struct RuleList {
    rules: Vec<InflectionRule>,
}

impl RuleList {
    pub(crate) fn push(&mut self, pattern: &str, replacement: &str) -> Result<()> {
        let rule = InflectionRule::new(pattern, replacement, self.rules.len())?;
        self.rules.push(rule);
        Ok(())
    }

    /// Iterates from the most recently registered rule to the first one,
    /// which is the order the cascade tries them in.
    pub fn by_priority(&self) -> impl Iterator<Item = &InflectionRule> {
        self.rules.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
