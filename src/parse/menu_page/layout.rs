use scraper::Html;

use super::allergens::AllergenNotation;
use crate::parse::static_selector::StaticSelector;
use crate::parse::text_from_selection::inner_text;
use crate::parse::{remove_excess_whitespace, Error};

/// Non-menu entries that a layout wraps around the dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boilerplate {
    /// entries dropped from the front, before currency splitting
    pub leading: usize,
    /// fragments dropped from the back, after currency splitting
    pub trailing: usize,
}

impl Boilerplate {
    pub fn drop_leading<T>(self, mut entries: Vec<T>) -> Vec<T> {
        let leading = self.leading.min(entries.len());
        entries.drain(..leading);
        entries
    }

    pub fn drop_trailing<T>(self, mut fragments: Vec<T>) -> Vec<T> {
        fragments.truncate(fragments.len().saturating_sub(self.trailing));
        fragments
    }
}

/// One version of the cafeteria page's markup: where the menu and the date
/// live and how that version's entries are cleaned up.
#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    container: StaticSelector<'static>,
    entry: StaticSelector<'static>,
    date: StaticSelector<'static>,
    pub boilerplate: Boilerplate,
    pub split_on_currency: bool,
    pub allergens: AllergenNotation,
}

pub static CURRENT: Layout = Layout {
    name: "current",
    container: StaticSelector::new("html > body > main > div > div > div > div"),
    entry: StaticSelector::new("h6"),
    date: StaticSelector::new(
        "html > body > main > div > div > div > div > h6:nth-of-type(2) > span",
    ),
    boilerplate: Boilerplate {
        leading: 1,
        trailing: 1,
    },
    split_on_currency: true,
    allergens: AllergenNotation::Inline,
};

pub static LEGACY: Layout = Layout {
    name: "legacy",
    container: StaticSelector::new(
        "html > body > main > div > div > div > div > span > span > span > span > span > span > span > span",
    ),
    entry: StaticSelector::new("p"),
    date: StaticSelector::new(
        "html > body > main > div > div > div > div > p:nth-of-type(3) > span",
    ),
    boilerplate: Boilerplate {
        leading: 0,
        trailing: 1,
    },
    split_on_currency: false,
    allergens: AllergenNotation::Trailing,
};

impl Layout {
    /// Picks the first known layout whose menu container holds any entries,
    /// falling back to the current one.
    pub fn detect(document: &Html) -> &'static Self {
        [&CURRENT, &LEGACY]
            .into_iter()
            .find(|layout| layout.entries(document).next().is_some())
            .unwrap_or(&CURRENT)
    }

    pub(super) fn date_text(&self, document: &Html) -> Result<String, Error> {
        let text = crate::parse::text_from_selection(&self.date, document).ok_or_else(|| {
            Error::date_not_found(&format!("nothing matches `{}`", self.date.source()))
        })?;
        let text = remove_excess_whitespace(&text).trim().to_owned();
        if text.is_empty() {
            return Err(Error::date_not_found(&format!(
                "`{}` holds no text",
                self.date.source()
            )));
        }
        Ok(text)
    }

    /// Raw text of every entry node, in document order.
    pub(super) fn entry_texts(&self, document: &Html) -> Result<Vec<String>, Error> {
        if document.select(&self.container).next().is_none() {
            return Err(Error::menu_not_found(&format!(
                "nothing matches `{}`",
                self.container.source()
            )));
        }
        Ok(self.entries(document).map(inner_text).collect())
    }

    fn entries<'a>(
        &'a self,
        document: &'a Html,
    ) -> impl Iterator<Item = scraper::ElementRef<'a>> {
        document
            .select(&self.container)
            .flat_map(move |container| container.select(&self.entry))
    }
}
