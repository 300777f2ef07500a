/*!
Predicates that check a string against a fixed pattern.

Each pattern is compiled once, the first time it is used.
*/
use once_cell::sync::Lazy;
use regex::Regex;

static NOT_ALPHA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z]").expect("Could not parse alpha regex"));

static NOT_ALPHA_NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Could not parse alphanumeric regex"));

static NOT_ALPHA_NUMERIC_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s]").expect("Could not parse alphanumeric space regex")
});

static NOT_NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Could not parse numeric regex"));

static LOWER_CASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[a-z]+\z").expect("Could not parse lower case regex"));

static UPPER_CASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[A-Z]+\z").expect("Could not parse upper case regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        (?: [0-9a-zA-Z]+ [-._+&] )*  # dotted or dashed pieces of the local part
        [0-9a-zA-Z]+
        @
        (?: [-0-9a-zA-Z]+ \. )+      # one or more domain labels
        [a-zA-Z]{2,6}                # top level domain
        \z",
    )
    .expect("Could not parse email regex")
});

static GUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        \{?
        [0-9a-fA-F]{8} - [0-9a-fA-F]{4} - [0-9a-fA-F]{4} - [0-9a-fA-F]{4} - [0-9a-fA-F]{12}
        \}?
        \z",
    )
    .expect("Could not parse GUID regex")
});

static ZIP_CODE_FIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\d{5}\z").expect("Could not parse zip code regex"));

static ZIP_CODE_FIVE_PLUS_FOUR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A\d{5}(?:-|\s)?\d{4}\z").expect("Could not parse zip+4 regex")
});

static ZIP_CODE_ANY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A\d{5}(?:(?:-|\s)?\d{4})?\z").expect("Could not parse optional zip+4 regex")
});

static SOCIAL_SECURITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\d{3}-?\d{2}-?\d{4}\z").expect("Could not parse SSN regex"));

static IP_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        (?: (?: 25[0-5] | 2[0-4][0-9] | [01]?[0-9][0-9]? ) \. ){3}
        (?: 25[0-5] | 2[0-4][0-9] | [01]?[0-9][0-9]? )
        \z",
    )
    .expect("Could not parse IP address regex")
});

static US_TELEPHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        [01]? [-.\x20]?
        (?: \( [2-9]\d{2} \) | [2-9]\d{2} )  # area code
        [-.\x20]? \d{3}
        [-.\x20]? \d{4}
        \z",
    )
    .expect("Could not parse telephone regex")
});

static US_CURRENCY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A \$
        (?:
            (?: [1-9]\d* | [1-9]\d{0,2} (?: ,\d{3} )* ) (?: \.\d{1,2} )?
            | \.\d{1,2}
        )
        \z
        |
        \A \$ 0 (?: \.\d{1,2} )? \z",
    )
    .expect("Could not parse currency regex")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        (?: ht | f ) tps? ://
        [0-9a-zA-Z] (?: [-.\w]* [0-9a-zA-Z] )*  # host
        (?: : [0-9]* )*                        # port
        /?
        [a-zA-Z0-9.?,'/\\+&%$\#_=-]*           # path and query
        \z",
    )
    .expect("Could not parse URL regex")
});

/// True when `s` has no characters outside `a-z` and `A-Z`. An empty string
/// passes.
pub fn is_alpha(s: &str) -> bool {
    !NOT_ALPHA_REGEX.is_match(s)
}

pub fn is_alpha_numeric(s: &str) -> bool {
    !NOT_ALPHA_NUMERIC_REGEX.is_match(s)
}

pub fn is_alpha_numeric_with_spaces(s: &str) -> bool {
    !NOT_ALPHA_NUMERIC_SPACE_REGEX.is_match(s)
}

/// True when every character is an ASCII digit. An empty string passes.
pub fn is_numeric(s: &str) -> bool {
    !NOT_NUMERIC_REGEX.is_match(s)
}

pub fn is_lower_case(s: &str) -> bool {
    LOWER_CASE_REGEX.is_match(s)
}

pub fn is_upper_case(s: &str) -> bool {
    UPPER_CASE_REGEX.is_match(s)
}

pub fn is_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

pub fn is_guid(s: &str) -> bool {
    GUID_REGEX.is_match(s)
}

/// Accepts a five digit zip code with or without the four digit suffix.
pub fn is_zip_code_any(s: &str) -> bool {
    ZIP_CODE_ANY_REGEX.is_match(s)
}

pub fn is_zip_code_five(s: &str) -> bool {
    ZIP_CODE_FIVE_REGEX.is_match(s)
}

pub fn is_zip_code_five_plus_four(s: &str) -> bool {
    ZIP_CODE_FIVE_PLUS_FOUR_REGEX.is_match(s)
}

pub fn is_social_security_number(s: &str) -> bool {
    SOCIAL_SECURITY_REGEX.is_match(s)
}

pub fn is_ip_address(s: &str) -> bool {
    IP_ADDRESS_REGEX.is_match(s)
}

pub fn is_us_telephone_number(s: &str) -> bool {
    US_TELEPHONE_REGEX.is_match(s)
}

pub fn is_us_currency(s: &str) -> bool {
    US_CURRENCY_REGEX.is_match(s)
}

pub fn is_url(s: &str) -> bool {
    URL_REGEX.is_match(s)
}

/// A strong password is 8 to 255 characters long and uses at least three of
/// these four kinds of character: digits, upper case letters, lower case
/// letters, and anything else.
//
// This is usually written as a single regex full of lookaheads, but the regex
// crate doesn't support those, so we count the character kinds instead.
pub fn is_strong_password(s: &str) -> bool {
    let len = s.chars().count();
    if !(8..=255).contains(&len) {
        return false;
    }

    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_other = s.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_digit, has_upper, has_lower, has_other]
        .iter()
        .filter(|&&b| b)
        .count()
        >= 3
}

#[cfg(test)]
mod tests {
    #[test]
    fn character_classes() {
        let tests = [
            ("abcXYZ", true, true, true, false),
            ("abc123", false, true, true, false),
            ("abc 123", false, false, true, false),
            ("12345", false, true, true, true),
            ("", true, true, true, true),
            ("a-b", false, false, false, false),
        ];
        for test in tests {
            assert_eq!(super::is_alpha(test.0), test.1, "is_alpha({:?})", test.0);
            assert_eq!(
                super::is_alpha_numeric(test.0),
                test.2,
                "is_alpha_numeric({:?})",
                test.0,
            );
            assert_eq!(
                super::is_alpha_numeric_with_spaces(test.0),
                test.3,
                "is_alpha_numeric_with_spaces({:?})",
                test.0,
            );
            assert_eq!(super::is_numeric(test.0), test.4, "is_numeric({:?})", test.0);
        }
    }

    #[test]
    fn letter_case() {
        assert!(super::is_lower_case("abc"));
        assert!(!super::is_lower_case("abC"));
        assert!(!super::is_lower_case(""));
        assert!(super::is_upper_case("ABC"));
        assert!(!super::is_upper_case("AbC"));
        assert!(!super::is_upper_case("AB1"));
        assert!(!super::is_upper_case(""));
    }

    #[test]
    fn email() {
        let tests = [
            ("jane.doe@example.com", true),
            ("j_d+tag@mail.example.co.uk", true),
            ("a@b", false),
            ("not-an-email", false),
            ("@example.com", false),
        ];
        for test in tests {
            assert_eq!(super::is_email(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn guid() {
        let tests = [
            ("{3F2504E0-4F89-11D3-9A0C-0305E82C3301}", true),
            ("3f2504e0-4f89-11d3-9a0c-0305e82c3301", true),
            ("3F2504E0-4F89-11D3-9A0C", false),
            ("not-a-guid", false),
        ];
        for test in tests {
            assert_eq!(super::is_guid(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn zip_codes() {
        let tests = [
            ("12345", true, true, false),
            ("12345-6789", true, false, true),
            ("12345 6789", true, false, true),
            ("123456789", true, false, true),
            ("1234", false, false, false),
            ("12345-678", false, false, false),
        ];
        for test in tests {
            assert_eq!(super::is_zip_code_any(test.0), test.1, "any {}", test.0);
            assert_eq!(super::is_zip_code_five(test.0), test.2, "five {}", test.0);
            assert_eq!(
                super::is_zip_code_five_plus_four(test.0),
                test.3,
                "five plus four {}",
                test.0,
            );
        }
    }

    #[test]
    fn social_security_number() {
        assert!(super::is_social_security_number("123-45-6789"));
        assert!(super::is_social_security_number("123456789"));
        assert!(!super::is_social_security_number("12-345-6789"));
        assert!(!super::is_social_security_number("123-45-678"));
    }

    #[test]
    fn ip_address() {
        let tests = [
            ("192.168.0.1", true),
            ("0.0.0.0", true),
            ("255.255.255.255", true),
            ("256.1.1.1", false),
            ("1.2.3", false),
            ("1.2.3.4.5", false),
        ];
        for test in tests {
            assert_eq!(super::is_ip_address(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn telephone() {
        let tests = [
            ("(555) 555-1234", true),
            ("555-555-1234", true),
            ("555.555.1234", true),
            ("1-555-555-1234", true),
            ("123-456-7890", false),
            ("555-1234", false),
        ];
        for test in tests {
            assert_eq!(super::is_us_telephone_number(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn currency() {
        let tests = [
            ("$1,234.56", true),
            ("$1234", true),
            ("$0.99", true),
            ("$.50", true),
            ("12.00", false),
            ("$1,23", false),
            ("$01", false),
        ];
        for test in tests {
            assert_eq!(super::is_us_currency(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn url() {
        let tests = [
            ("http://example.com", true),
            ("https://example.com/path?x=1&y=2", true),
            ("ftp://files.example.org:21/pub", true),
            ("example.com", false),
            ("mailto:someone@example.com", false),
        ];
        for test in tests {
            assert_eq!(super::is_url(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn strong_password() {
        let tests = [
            ("Passw0rd", true),
            ("passw0rd!", true),
            ("PASSWORD1!", true),
            ("password", false),
            ("Password", false),
            ("Sh0rt!", false),
        ];
        for test in tests {
            assert_eq!(super::is_strong_password(test.0), test.1, "{}", test.0);
        }
    }
}
