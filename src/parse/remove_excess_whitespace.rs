use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Runs of whitespace as the cafeteria's markup has it. `\s` is Unicode
/// aware so `&nbsp;` and friends are covered; zero width spaces and stray
/// byte order marks are not whitespace to `regex` but show up all the same.
pub const WHITESPACE_RUN: &str = r"[\s\u{200B}\u{FEFF}]+";

/// Collapses every run of [`WHITESPACE_RUN`] to a single ASCII space.
pub fn remove_excess_whitespace<'a>(s: &'a str) -> Cow<'a, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(WHITESPACE_RUN).expect("regex should be valid"));
    let out: Cow<'a, str> = Regex::replace_all(re, s, " ");
    // replace_all allocates even when the only match is already a lone space
    match out {
        Cow::Owned(ref owned) if owned == s => Cow::Borrowed(s),
        out => out,
    }
}
