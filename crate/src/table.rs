//! The built-in English rule table.
//!
//! Order matters in every list here. Within a direction the cascade tries
//! the last rule first, so each list runs from the most general rule to the
//! most specific one, and the irregular pairs are registered after both
//! generic lists so they outrank all of them.

pub(crate) const PLURALS: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    ("(ax|test)is$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("(alias|status)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)ix|ex$", "${1}ices"),
    ("([m|l])ouse$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("(quiz)$", "${1}zes"),
];

pub(crate) const SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("ss$", "ss"),
    // Classical singulars that the plural rules know about.
    ("^((?:octop|vir)us|(?:ax|test|cris)is)$", "${1}"),
    ("(n)ews$", "${1}ews"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}${2}sis",
    ),
    ("(^analy)ses$", "${1}sis"),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("([m|l])ice$", "${1}ouse"),
    ("(bus)es$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|ax|test)es$", "${1}is"),
    ("(octop|vir)i$", "${1}us"),
    ("(alias|status)$", "${1}"),
    ("(alias|status)es$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
];

pub(crate) const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("tax", "taxes"),
    ("move", "moves"),
];

pub(crate) const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
];
