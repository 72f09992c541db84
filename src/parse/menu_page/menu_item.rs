use std::sync::OnceLock;

use regex::Regex;

use crate::parse::{remove_excess_whitespace, Error};

use super::money::compact_price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    name: String,
    price: String, // ex. "7,00€"
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    /// Splits a cleaned fragment like `"Goveji golaž 5,50 €"` into its dish
    /// name and price.
    ///
    /// A decimal price at the end of the fragment wins, even with stray
    /// spaces inside it (`"7, 00 €"`). Failing that, the price starts after
    /// the last whitespace character directly followed by a digit. Either
    /// way digits inside the name ("Menu 2 ...") stay in the name.
    pub fn from_fragment(fragment: &str) -> Result<Self, Error> {
        let (name, price) =
            split_name_and_price(fragment).ok_or_else(|| Error::malformed_entry(fragment))?;
        let name = remove_excess_whitespace(name.trim());
        let price = compact_price(price);
        Ok(Self::new(name, price))
    }
}

/// `None` when no whitespace is followed by a digit.
fn split_name_and_price(fragment: &str) -> Option<(&str, &str)> {
    static DECIMAL_PRICE: OnceLock<Regex> = OnceLock::new();
    let re = DECIMAL_PRICE.get_or_init(|| {
        Regex::new(r"(?s)^(.*)\s(\d[\d\s]*[,.]\s*\d+\s*€?\s*)$").expect("regex should be valid")
    });
    if let Some(caps) = re.captures(fragment) {
        if let (Some(name), Some(price)) = (caps.get(1), caps.get(2)) {
            return Some((name.as_str(), price.as_str()));
        }
    }

    let mut chars = fragment.char_indices().peekable();
    let mut boundary = None;
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|&(_, next)| next.is_ascii_digit()) {
            boundary = Some((i, i + c.len_utf8()));
        }
    }
    let (name_end, price_start) = boundary?;
    Some((&fragment[..name_end], &fragment[price_start..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        let item = MenuItem::from_fragment("Goulash   5,50€").unwrap();
        assert_eq!(item, MenuItem::new("Goulash", "5,50€"));
    }

    #[test]
    fn test_price_whitespace_removed() {
        let item = MenuItem::from_fragment("Zelenjavna rižota 7,00 €").unwrap();
        assert_eq!(item.name(), "Zelenjavna rižota");
        assert_eq!(item.price(), "7,00€");
    }

    #[test]
    fn test_space_inside_price() {
        let item = MenuItem::from_fragment("Zelenjavna rižota 7, 00 €").unwrap();
        assert_eq!(item, MenuItem::new("Zelenjavna rižota", "7,00€"));
        let item = MenuItem::from_fragment("Menu 2 s solato 6 ,50€").unwrap();
        assert_eq!(item, MenuItem::new("Menu 2 s solato", "6,50€"));
    }

    #[test]
    fn test_price_without_decimals() {
        let item = MenuItem::from_fragment("Sok 0,2 l 2€").unwrap();
        assert_eq!(item, MenuItem::new("Sok 0,2 l", "2€"));
    }

    #[test]
    fn test_digits_in_name() {
        let item = MenuItem::from_fragment("Menu 2 s   solato 6,00€").unwrap();
        assert_eq!(item.name(), "Menu 2 s solato");
        assert_eq!(item.price(), "6,00€");
    }

    #[test]
    fn test_nbsp_boundary() {
        let item = MenuItem::from_fragment("Ričet\u{00A0}4,20€").unwrap();
        assert_eq!(item, MenuItem::new("Ričet", "4,20€"));
    }

    #[test]
    fn test_no_price() {
        assert_eq!(
            MenuItem::from_fragment("Cena vključuje solato.€"),
            Err(Error::MalformedEntry("Cena vključuje solato.€".to_string()))
        );
        assert!(MenuItem::from_fragment("7,00€").is_err());
    }
}
