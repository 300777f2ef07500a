//! Small, independent string helpers.
//!
//! Functions that take a caller-supplied regular expression return a
//! [Result](crate::Result) so a bad pattern is reported instead of
//! panicking. Everything else is infallible.

use crate::{
    error::{Error, Result},
    util,
};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("Could not parse non-word regex"));

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<.*?>").expect("Could not parse HTML tag regex"));

/// Case-insensitive equality.
pub fn matches_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive equality after trimming surrounding whitespace.
pub fn matches_trimmed(a: &str, b: &str) -> bool {
    matches_ignore_case(a.trim(), b.trim())
}

/// Tests `input` against `pattern`, ignoring case and allowing whitespace and
/// `#` comments in the pattern.
pub fn matches_regex(input: &str, pattern: &str) -> Result<bool> {
    let re = build_regex(pattern, |b| b.case_insensitive(true).ignore_whitespace(true))?;
    Ok(re.is_match(input))
}

/// Removes the last `n` characters. If the string is shorter than `n` it is
/// returned unchanged.
pub fn chop(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Removes everything from the last occurrence of `marker` to the end. The
/// string is unchanged if `marker` is missing or only occurs at the start.
pub fn chop_at<'a>(s: &'a str, marker: &str) -> &'a str {
    match s.rfind(marker) {
        Some(idx) if idx > 0 => &s[..idx],
        _ => s,
    }
}

/// Removes the first `n` characters, as long as the string is longer than
/// that.
pub fn clip(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Removes everything before the first occurrence of `marker`, keeping the
/// marker itself. The string is unchanged if `marker` is missing or already
/// at the start.
pub fn clip_at<'a>(s: &'a str, marker: &str) -> &'a str {
    match s.find(marker) {
        Some(idx) if idx > 0 => &s[idx..],
        _ => s,
    }
}

/// Replaces every occurrence of `from` with `to`, ignoring ASCII case when
/// matching.
pub fn fast_replace(original: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return original.to_string();
    }

    let mut result = String::with_capacity(original.len());
    let mut last = 0;
    while let Some(idx) = util::find_ignore_ascii_case(original, from, last) {
        result.push_str(&original[last..idx]);
        result.push_str(to);
        last = idx + from.len();
    }
    result.push_str(&original[last..]);
    result
}

/// Returns the text between the first `start` and the next `end` after it,
/// ignoring ASCII case. Returns an empty string if either is missing.
pub fn crop<'a>(s: &'a str, start: &str, end: &str) -> &'a str {
    let from = match util::find_ignore_ascii_case(s, start, 0) {
        Some(idx) => idx + start.len(),
        None => return "",
    };
    match util::find_ignore_ascii_case(s, end, from) {
        Some(to) => &s[from..to],
        None => "",
    }
}

/// Collapses runs of spaces into a single space and trims the ends.
pub fn squeeze(s: &str) -> String {
    to_words(s).join(" ")
}

pub fn to_alpha_numeric_only(s: &str) -> String {
    NON_WORD_REGEX.replace_all(s, "").into_owned()
}

/// Splits on spaces, dropping empty pieces.
pub fn to_words(s: &str) -> Vec<&str> {
    s.trim().split(' ').filter(|w| !w.is_empty()).collect()
}

pub fn strip_html(html: &str) -> String {
    strip_html_with(html, "")
}

/// Replaces every tag with `placeholder`, then decodes the handful of
/// entities that commonly survive tag stripping.
pub fn strip_html_with(html: &str, placeholder: &str) -> String {
    HTML_TAG_REGEX
        .replace_all(html, NoExpand(placeholder))
        .replace("&nbsp;", "")
        .replace("&amp;", "&")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
}

/// Returns every match of `pattern` in `source`. Matching ignores case, `^`
/// and `$` match at line ends, and `.` matches newlines.
pub fn find_matches(source: &str, pattern: &str) -> Result<Vec<String>> {
    let re = build_regex(pattern, |b| {
        b.case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true)
    })?;
    Ok(re
        .find_iter(source)
        .map(|m| m.as_str().to_string())
        .collect())
}

pub fn to_delimited_list<I, S>(items: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            list.push_str(delimiter);
        }
        list.push_str(item.as_ref());
    }
    list
}

/// Removes every match of each pattern in `patterns`, which is a comma
/// separated list of regular expressions.
pub fn strip(s: &str, patterns: &str) -> Result<String> {
    let mut stripped = s.to_string();
    if patterns.is_empty() {
        return Ok(stripped);
    }
    for pattern in patterns.split(',') {
        let re = build_regex(pattern, |b| b)?;
        stripped = re.replace_all(&stripped, "").into_owned();
    }
    Ok(stripped)
}

fn build_regex<F>(pattern: &str, configure: F) -> Result<Regex>
where
    F: FnOnce(&mut RegexBuilder) -> &mut RegexBuilder,
{
    let mut builder = RegexBuilder::new(pattern);
    configure(&mut builder)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Implemented by enums that can be looked up by variant name.
///
/// ```
/// use en_textkit::strings::{to_enum, NamedVariants};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// impl NamedVariants for Color {
///     const VARIANTS: &'static [(&'static str, Self)] =
///         &[("Red", Color::Red), ("Green", Color::Green)];
/// }
///
/// assert_eq!(to_enum::<Color>("green"), Some(Color::Green));
/// assert_eq!(to_enum::<Color>("blue"), None);
/// ```
pub trait NamedVariants: Sized + Copy + 'static {
    const VARIANTS: &'static [(&'static str, Self)];
}

/// Finds the variant whose name matches `name`, ignoring case.
pub fn to_enum<T: NamedVariants>(name: &str) -> Option<T> {
    T::VARIANTS
        .iter()
        .find(|(n, _)| matches_ignore_case(n, name))
        .map(|(_, v)| *v)
}
