//! Case-style conversions for turning identifiers into labels and back.
//!
//! None of these consult the inflection rules. They are plain string
//! transforms that return an empty string for empty input.
//!
//! # Examples
//!
//! ```
//! use en_textkit::casing;
//!
//! assert_eq!(casing::to_title_case("ProductCategory"), "Product Category");
//! assert_eq!(casing::to_pascal_case("product_category"), "ProductCategory");
//! assert_eq!(casing::to_camel_case("product_category"), "productCategory");
//! assert_eq!(casing::add_underscores("ProductCategory"), "product_category");
//! assert_eq!(casing::add_ordinal_suffix("22"), "22nd");
//! ```

use crate::{util, validation};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ACRONYM_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("Could not parse acronym boundary regex")
});

static WORD_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("Could not parse word boundary regex"));

static DASH_OR_SPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]").expect("Could not parse dash or space regex"));

static WORD_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-z])").expect("Could not parse word start regex"));

/// Converts an identifier into space separated words with each word
/// capitalized, so "user_name" and "UserName" both become "User Name".
pub fn to_title_case(word: &str) -> String {
    let humanized = humanize(&add_underscores(word));
    WORD_START_REGEX
        .replace_all(&humanized, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Replaces underscores with spaces and capitalizes only the first word.
pub fn humanize(lowercase_and_underscored_word: &str) -> String {
    make_initial_caps(&lowercase_and_underscored_word.replace('_', " "))
}

/// Same as [to_pascal_case].
pub fn to_proper(word: &str) -> String {
    to_pascal_case(word)
}

pub fn to_pascal_case(lowercase_and_underscored_word: &str) -> String {
    to_pascal_case_with(lowercase_and_underscored_word, true)
}

/// Converts space or underscore separated text to Pascal case.
///
/// Each word gets an upper case first letter. A word whose remaining letters
/// are all upper case is lower cased after the first letter, so "USER_ID"
/// becomes "UserId". A single word that isn't shouting only has its first
/// letter changed, so "userName" becomes "UserName".
///
/// When `remove_underscores` is false the words are joined with `_` instead
/// of being run together.
pub fn to_pascal_case_with(text: &str, remove_underscores: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace('_', " ");
    let words = text.split(' ').collect::<Vec<_>>();
    if words.len() == 1 && !validation::is_upper_case(words[0]) {
        let (first, rest) = util::split_first(words[0]);
        return format!("{}{}", first.to_uppercase(), rest);
    }

    let join = if remove_underscores { "" } else { "_" };
    words
        .iter()
        .map(|w| {
            let (first, rest) = util::split_first(w);
            if validation::is_upper_case(rest) {
                format!("{}{}", first.to_uppercase(), rest.to_lowercase())
            } else {
                format!("{}{}", first.to_uppercase(), rest)
            }
        })
        .collect::<Vec<_>>()
        .join(join)
}

pub fn to_camel_case(lowercase_and_underscored_word: &str) -> String {
    make_initial_lower_case(&to_pascal_case(lowercase_and_underscored_word))
}

/// Converts Pascal or camel case into lower case words joined by
/// underscores. Runs of capitals are treated as one word, so "HTMLParser"
/// becomes "html_parser". Dashes and whitespace also become underscores.
pub fn add_underscores(pascal_cased_word: &str) -> String {
    let word = ACRONYM_BOUNDARY_REGEX.replace_all(pascal_cased_word, "${1}_${2}");
    let word = WORD_BOUNDARY_REGEX.replace_all(&word, "${1}_${2}");
    DASH_OR_SPACE_REGEX
        .replace_all(&word, "_")
        .to_lowercase()
}

/// Upper cases the first character and lower cases the rest.
pub fn make_initial_caps(word: &str) -> String {
    util::titlecase_word(word)
}

/// Lower cases the first character and leaves the rest alone.
pub fn make_initial_lower_case(word: &str) -> String {
    let (first, rest) = util::split_first(word);
    format!("{}{}", first.to_lowercase(), rest)
}

pub fn underscores_to_dashes(underscored_word: &str) -> String {
    underscored_word.replace('_', "-")
}

/// Appends "st", "nd", "rd", or "th" to a string of digits. Anything that
/// isn't entirely digits, including the empty string, is returned as is.
pub fn add_ordinal_suffix(number: &str) -> String {
    if number.is_empty() || !validation::is_numeric(number) {
        return number.to_string();
    }

    let digits = number.as_bytes();
    let last = digits[digits.len() - 1] - b'0';
    let tens = if digits.len() > 1 {
        digits[digits.len() - 2] - b'0'
    } else {
        0
    };

    let suffix = match (tens, last) {
        (1, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", number, suffix)
}

#[cfg(test)]
mod tests {
    #[test]
    fn to_title_case() {
        let tests = [
            ("some_title", "Some Title"),
            ("SomeTitle", "Some Title"),
            ("someTitle", "Some Title"),
            ("HTMLParser", "Html Parser"),
            ("some-title here", "Some Title Here"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::to_title_case(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn humanize() {
        let tests = [
            ("employee_salary", "Employee salary"),
            ("AUTHOR_ID", "Author id"),
            ("x", "X"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::humanize(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn to_pascal_case() {
        let tests = [
            ("user_name", "UserName"),
            ("USER_NAME", "UserName"),
            ("user name", "UserName"),
            ("userName", "UserName"),
            ("ID", "Id"),
            ("product_ID", "ProductId"),
            ("__private", "Private"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::to_pascal_case(test.0), test.1, "{}", test.0);
            assert_eq!(super::to_proper(test.0), test.1, "{}", test.0);
        }

        let tests = [
            ("user_name", "User_Name"),
            ("USER_NAME", "User_Name"),
            ("user", "User"),
        ];
        for test in tests {
            assert_eq!(super::to_pascal_case_with(test.0, false), test.1, "{}", test.0);
        }
    }

    #[test]
    fn to_camel_case() {
        let tests = [
            ("user_name", "userName"),
            ("USER_NAME", "userName"),
            ("UserName", "userName"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::to_camel_case(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn add_underscores() {
        let tests = [
            ("UserName", "user_name"),
            ("userName", "user_name"),
            ("HTMLParser", "html_parser"),
            ("Version2Beta", "version2_beta"),
            ("user-name here", "user_name_here"),
            ("already_done", "already_done"),
        ];
        for test in tests {
            assert_eq!(super::add_underscores(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn initial_case() {
        assert_eq!(super::make_initial_caps("hELLO"), "Hello");
        assert_eq!(super::make_initial_lower_case("HELLO"), "hELLO");
        assert_eq!(super::make_initial_lower_case(""), "");
        assert_eq!(super::underscores_to_dashes("a_b_c"), "a-b-c");
    }

    #[test]
    fn add_ordinal_suffix() {
        let tests = [
            ("0", "0th"),
            ("1", "1st"),
            ("2", "2nd"),
            ("3", "3rd"),
            ("4", "4th"),
            ("11", "11th"),
            ("12", "12th"),
            ("13", "13th"),
            ("21", "21st"),
            ("22", "22nd"),
            ("101", "101st"),
            ("111", "111th"),
            ("112", "112th"),
            ("1000000000000000000001", "1000000000000000000001st"),
            ("", ""),
            ("abc", "abc"),
            ("12a", "12a"),
        ];
        for test in tests {
            assert_eq!(super::add_ordinal_suffix(test.0), test.1, "{}", test.0);
        }
    }
}
