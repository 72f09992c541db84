use scraper::Html;
use tracing::{instrument, Level};

use super::layout::Layout;
use super::menu_item::MenuItem;
use super::money::split_on_currency;
use crate::parse::{remove_excess_whitespace, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMenu {
    date: String, // ex. "Petek, 29.10.2021"
    items: Vec<MenuItem>,
}

impl DailyMenu {
    #[cfg(test)]
    pub fn new(date: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            date: date.into(),
            items,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Extracts the date and the dishes, in the order the page lists them.
    #[instrument(skip(document, layout), fields(layout = layout.name), level = Level::TRACE)]
    pub fn from_html(document: &Html, layout: &Layout) -> Result<Self, Error> {
        let date = layout.date_text(document)?;
        let items = Self::items_from_entries(layout.entry_texts(document)?, layout)?;
        if items.is_empty() {
            return Err(Error::menu_not_found("the menu lists no dishes"));
        }
        log::debug!("found {} dishes for {date}", items.len());
        Ok(Self { date, items })
    }

    fn items_from_entries(entries: Vec<String>, layout: &Layout) -> Result<Vec<MenuItem>, Error> {
        let entries: Vec<String> = entries
            .iter()
            .map(|entry| remove_excess_whitespace(entry))
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| entry.into_owned())
            .collect();
        let entries = layout.boilerplate.drop_leading(entries);

        let fragments: Vec<String> = if layout.split_on_currency {
            entries.iter().flat_map(|entry| split_on_currency(entry)).collect()
        } else {
            entries.iter().map(|entry| entry.trim().to_owned()).collect()
        };
        let fragments = layout.boilerplate.drop_trailing(fragments);

        fragments
            .iter()
            .map(|fragment| MenuItem::from_fragment(&layout.allergens.strip(fragment)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::menu_page::layout::{CURRENT, LEGACY};
    use std::fs;

    fn example(name: &str) -> Html {
        let html = fs::read_to_string(format!("./src/parse/html_examples/menu_page/{name}.html"))
            .unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn test_current_layout() {
        let menu = DailyMenu::from_html(&example("current"), &CURRENT)
            .expect("The example html should be valid");
        assert_eq!(menu.date(), "Petek, 29.10.2021");
        assert_eq!(
            menu.items(),
            [
                MenuItem::new("Goveji golaž s polento", "5,50€"),
                MenuItem::new("Ričet s klobaso", "6,00€"),
                MenuItem::new("Zelenjavna rižota", "5,00€"),
                MenuItem::new("Goveji golaž s polento", "5,50€"),
                MenuItem::new("Menu 2 puranji zrezek", "7,00€"),
            ]
        );
    }

    #[test]
    fn test_legacy_layout() {
        let menu = DailyMenu::from_html(&example("legacy"), &LEGACY)
            .expect("The example html should be valid");
        assert_eq!(menu.date(), "Četrtek, 28.10.2021");
        assert_eq!(
            menu.items(),
            [
                MenuItem::new("Pečen piščanec z rižem", "6,50€"),
                MenuItem::new("Testenine z bolonjsko omako", "5,80€"),
            ]
        );
    }

    #[test]
    fn test_missing_date() {
        assert!(matches!(
            DailyMenu::from_html(&example("missing_date"), &CURRENT),
            Err(Error::DateNotFound(_))
        ));
    }

    #[test]
    fn test_glued_entries() {
        let entries = vec![
            String::new(),
            "Sreda, 27.10.2021".to_string(),
            "Soup 3,00€Bread 1,00€".to_string(),
            "Goulash (A,C,G) 5,50\u{00A0}€".to_string(),
            "  ".to_string(),
            "Dodatki po dogovoru".to_string(),
        ];
        assert_eq!(
            DailyMenu::items_from_entries(entries, &CURRENT).unwrap(),
            vec![
                MenuItem::new("Soup", "3,00€"),
                MenuItem::new("Bread", "1,00€"),
                MenuItem::new("Goulash", "5,50€"),
            ]
        );
    }

    #[test]
    fn test_only_boilerplate() {
        let entries = vec!["Sreda, 27.10.2021".to_string(), "Zaprto".to_string()];
        assert_eq!(DailyMenu::items_from_entries(entries, &CURRENT), Ok(vec![]));
    }

    #[test]
    fn test_malformed_entry() {
        let entries = vec![
            "Sreda, 27.10.2021".to_string(),
            "Juha brez cene€Soup 3,00€".to_string(),
            "Dodatki".to_string(),
        ];
        assert_eq!(
            DailyMenu::items_from_entries(entries, &CURRENT),
            Err(Error::MalformedEntry("Juha brez cene€".to_string()))
        );
    }
}
