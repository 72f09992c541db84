use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// How a page layout annotates dishes with allergen codes such as `(A,C,G)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllergenNotation {
    /// Codes sit between the dish name and the price. Each group is replaced
    /// by a single space so the words around it stay apart.
    Inline,
    /// Codes (upper case only) come after the price and everything from the
    /// first group on is dropped.
    Trailing,
}

impl AllergenNotation {
    pub fn strip<'a>(self, fragment: &'a str) -> Cow<'a, str> {
        static INLINE: OnceLock<Regex> = OnceLock::new();
        static TRAILING: OnceLock<Regex> = OnceLock::new();
        match self {
            Self::Inline => INLINE
                .get_or_init(|| Regex::new(r"\([A-Za-z,.]+\)").expect("regex should be valid"))
                .replace_all(fragment, " "),
            Self::Trailing => TRAILING
                .get_or_init(|| Regex::new(r"\([A-Z,.]+\).*").expect("regex should be valid"))
                .replace_all(fragment, ""),
        }
    }
}
