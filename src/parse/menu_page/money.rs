use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

use crate::parse::WHITESPACE_RUN;

pub const CURRENCY: char = '€';

/// Splits an entry that may hold several dishes glued together by the
/// currency symbol (the site sometimes puts two dishes in one heading).
///
/// Every fragment comes back trimmed and ending in exactly one `€`, so the
/// rest of the pipeline sees a uniform "text + price€" shape. Empty pieces
/// after the last symbol are not fragments.
pub fn split_on_currency(entry: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = entry.split(CURRENCY).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
        .into_iter()
        .map(|piece| {
            let mut fragment = piece.trim().to_owned();
            fragment.push(CURRENCY);
            fragment
        })
        .collect()
}

/// Drops every whitespace character from a price, `"7, 00 €"` -> `"7,00€"`.
pub fn compact_price(price: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(WHITESPACE_RUN).expect("regex should be valid"));
    re.replace_all(price, "")
}
