//! English inflection for generated method and table names.
//!
//! Follows the default ActiveSupport rule set: `condition` → `conditions`,
//! `status` → `statuses`, `category` → `categories`. Rules apply to the whole
//! word, so irregulars also match as suffixes (`salesperson` → `salespeople`).

use regex::Regex;
use std::sync::LazyLock;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Uncountable words, matched at the end of the word after a word boundary
#[allow(clippy::expect_used)] // Built from literals
static UNCOUNTABLE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})$", UNCOUNTABLE.join("|")))
        .expect("uncountable pattern is valid")
});

/// Plural rules, most specific first. The first match wins.
#[allow(clippy::expect_used)] // Rule patterns are literals
static PLURAL_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    let irregular = IRREGULAR.iter().flat_map(|(singular, plural)| {
        let (s0, srest) = singular.split_at(1);
        let (p0, prest) = plural.split_at(1);
        [
            (format!("(?i)({s0}){srest}$"), format!("${{1}}{prest}")),
            (format!("(?i)({p0}){prest}$"), format!("${{1}}{prest}")),
        ]
    });
    let suffix = [
        (r"(?i)(quiz)$", "${1}zes"),
        (r"(?i)^(oxen)$", "${1}"),
        (r"(?i)^(ox)$", "${1}en"),
        (r"(?i)^(m|l)ice$", "${1}ice"),
        (r"(?i)^(m|l)ouse$", "${1}ice"),
        (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(?i)(x|ch|ss|sh)$", "${1}es"),
        (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
        (r"(?i)(hive)$", "${1}s"),
        (r"(?i)([^f])fe$", "${1}ves"),
        (r"(?i)([lr])f$", "${1}ves"),
        (r"(?i)sis$", "ses"),
        (r"(?i)([ti])a$", "${1}a"),
        (r"(?i)([ti])um$", "${1}a"),
        (r"(?i)(buffal|tomat)o$", "${1}oes"),
        (r"(?i)(bu)s$", "${1}ses"),
        (r"(?i)(alias|status)$", "${1}es"),
        (r"(?i)(octop|vir)i$", "${1}i"),
        (r"(?i)(octop|vir)us$", "${1}i"),
        (r"(?i)^(ax|test)is$", "${1}es"),
        (r"(?i)s$", "s"),
        (r"$", "s"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string()));

    irregular
        .chain(suffix)
        .map(|(pattern, replacement)| {
            (
                Regex::new(&pattern).expect("plural rule pattern is valid"),
                replacement,
            )
        })
        .collect()
});

/// Pluralize a snake_case identifier
///
/// # Example
///
/// ```
/// use lifeguard_enum::inflection::pluralize;
///
/// assert_eq!(pluralize("condition"), "conditions");
/// assert_eq!(pluralize("status"), "statuses");
/// assert_eq!(pluralize("shipping_category"), "shipping_categories");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE_RULE.is_match(word) {
        return word.to_string();
    }

    for (rule, replacement) in PLURAL_RULES.iter() {
        if rule.is_match(word) {
            return rule.replace(word, replacement.as_str()).into_owned();
        }
    }
    word.to_string()
}

/// Convert a CamelCase type name to snake_case
///
/// `RealModel` → `real_model`, `HTTPRequest` → `http_request`.
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(if c == '-' { '_' } else { c.to_ascii_lowercase() });
    }
    out
}

/// Table name implied by a model type name: `RealModel` → `real_models`
pub fn tableize(name: &str) -> String {
    pluralize(&underscore(name))
}
