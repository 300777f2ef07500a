// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! English pluralization and singularization, plus the small string helpers
//! that tend to travel with it: case-style conversion, validation
//! predicates, and trimming and splitting utilities.
//!
//! # The Inflector
//!
//! Inflection is rule driven. Each direction (plural and singular) has an
//! ordered list of regex rules, and the most recently registered rule that
//! matches a word wins. The built-in English table registers its general
//! rules first ("add an s"), then more specific suffix rules ("-y" after a
//! consonant becomes "-ies"), then irregular pairs like "person" and
//! "people". Uncountable words like "sheep" skip the rules entirely.
//!
//! ```
//! use en_textkit::{make_plural, make_singular, pluralize};
//!
//! assert_eq!(make_plural("person"), "people");
//! assert_eq!(make_singular("Wolves"), "Wolf");
//! assert_eq!(make_plural("CAT"), "CATS");
//! assert_eq!(pluralize(1, "octopus"), "1 octopus");
//! ```
//!
//! This is deliberately not a complete model of English. There is no
//! dictionary, so the rules will cheerfully turn "human" into "humen" and
//! "toes" into "to". If you need different behavior, build your own
//! [RuleRegistry] with a [RegistryBuilder].
//!
//! A word that is entirely upper case comes back entirely upper case. This
//! applies to acronyms too, so there is no way to get "SOSes" out of "SOS".
//!
//! # Logging
//!
//! The crate emits [tracing](https://docs.rs/tracing) events at the `debug`
//! and `trace` levels. Enable the `debug` feature to also trace every rule
//! that is tried, not just the one that matches.

mod util;

pub mod casing;
mod error;
pub mod inflector;
pub mod noun;
pub mod registry;
pub mod rule;
pub mod strings;
mod table;
pub mod term;
pub mod validation;

pub use error::{Error, Result};
pub use inflector::{make_plural, make_singular, pluralize};
pub use registry::{Direction, RegistryBuilder, RuleRegistry};
