// A word counts as upper case when it has no lower case characters at all,
// so digits and punctuation don't stop "R2D2" from being treated as upper
// case.
pub(crate) fn is_uppercase(word: &str) -> bool {
    !word.chars().any(char::is_lowercase)
}

/// Splits off the first character. Both halves are empty for an empty
/// string.
pub(crate) fn split_first(word: &str) -> (&str, &str) {
    match word.chars().next() {
        Some(c) => word.split_at(c.len_utf8()),
        None => ("", ""),
    }
}

pub(crate) fn titlecase_word(word: &str) -> String {
    let (first, rest) = split_first(word);
    format!("{}{}", first.to_uppercase(), rest.to_lowercase())
}

// Byte offset of the first ASCII case-insensitive occurrence of `needle` in
// `haystack`, starting the search at `from`. Matching only folds ASCII, so
// offsets in the folded and original strings line up.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > hay.len() {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    #[test]
    fn is_uppercase() {
        let tests = [
            ("DOG", true),
            ("R2D2", true),
            ("", true),
            ("Dog", false),
            ("dOG", false),
        ];
        for test in tests {
            assert_eq!(super::is_uppercase(test.0), test.1, "{}", test.0);
        }
    }

    #[test]
    fn split_first() {
        let tests = [
            ("person", ("p", "erson")),
            ("x", ("x", "")),
            ("", ("", "")),
            ("élan", ("é", "lan")),
        ];
        for test in tests {
            assert_eq!(super::split_first(test.0), test.1);
        }
    }

    #[test]
    fn titlecase_word() {
        let tests = [("dog", "Dog"), ("DOG", "Dog"), ("dOg", "Dog"), ("", "")];
        for test in tests {
            assert_eq!(super::titlecase_word(test.0), test.1);
        }
    }

    #[test]
    fn find_ignore_ascii_case() {
        let tests = [
            ("Hello World", "world", 0, Some(6)),
            ("Hello World", "WORLD", 7, None),
            ("abcabc", "ABC", 1, Some(3)),
            ("abc", "", 0, None),
            ("ab", "abc", 0, None),
        ];
        for test in tests {
            assert_eq!(
                super::find_ignore_ascii_case(test.0, test.1, test.2),
                test.3,
                "find {:?} in {:?} from {}",
                test.1,
                test.0,
                test.2,
            );
        }
    }
}
