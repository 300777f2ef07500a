//! The error type shared by the registry builder and the regex-taking string
//! helpers.

use thiserror::Error;

/// Errors that can occur while building a rule table or compiling a
/// caller-supplied pattern. Inflecting a word never produces an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A rule or helper pattern failed to compile.
    #[error("could not compile pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as it was given.
        pattern: String,
        /// The error reported by the regex compiler.
        #[source]
        source: regex::Error,
    },

    /// One side of an irregular singular/plural pair was empty.
    #[error("irregular pair ({singular:?}, {plural:?}) has an empty form")]
    EmptyIrregularForm {
        /// The singular form that was passed in.
        singular: String,
        /// The plural form that was passed in.
        plural: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
