use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector that is written down as a literal and parsed on first use.
///
/// Lets the page layouts be plain `static` tables of selector strings.
#[derive(Debug)]
pub(super) struct StaticSelector<'a> {
    cell: OnceLock<Selector>,
    source: &'a str,
}

impl<'a> StaticSelector<'a> {
    pub(super) const fn new(source: &'a str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }

    pub(super) const fn source(&self) -> &'a str {
        self.source
    }
}

impl<'a> core::ops::Deref for StaticSelector<'a> {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // all sources are compile time literals, a bad one is a programming error
        self.cell
            .get_or_init(|| match Selector::parse(self.source) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.source, e),
            })
    }
}
