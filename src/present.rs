use std::io::{self, Write};

use crate::parse::{DailyMenu, MenuItem};

/// Spaces kept between the longest dish name and the price column.
pub const PRICE_SPACE_PADDING: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// dish names only
    #[default]
    Short,
    /// dish names with their prices lined up in a column
    Long,
}

pub fn render(menu: &DailyMenu, mode: DisplayMode) -> Vec<String> {
    let mut lines = header(menu.date());
    match mode {
        DisplayMode::Short => lines.extend(short(menu.items())),
        DisplayMode::Long => lines.extend(long(menu.items())),
    }
    lines
}

pub fn print(lines: &[String], out: &mut impl Write) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn header(date: &str) -> Vec<String> {
    vec![date.to_owned(), "=".repeat(date.chars().count())]
}

fn short(items: &[MenuItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| [format!("- {}", item.name()), String::new()])
        .collect()
}

fn long(items: &[MenuItem]) -> Vec<String> {
    let width = entry_justification(items);
    items
        .iter()
        .flat_map(|item| {
            let line = format!("{:<width$}{}", item.name(), item.price());
            let rule = "-".repeat(line.chars().count());
            [line, rule]
        })
        .collect()
}

/// Prices count too, so a menu of short names still leaves room for them.
fn entry_justification(items: &[MenuItem]) -> usize {
    PRICE_SPACE_PADDING
        + items
            .iter()
            .flat_map(|item| [item.name(), item.price()])
            .map(|s| s.chars().count())
            .max()
            .unwrap_or_default()
}
