use scraper::{ElementRef, Html, Selector};

/// All text below `element`, in document order, the way a browser's
/// `textContent` would report it.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Concatenated inner text of every node matching `selector`.
///
/// Returns `None` when nothing matches so callers can tell an absent node
/// apart from an empty one.
pub fn text_from_selection(selector: &Selector, document: &Html) -> Option<String> {
    let mut matches = document.select(selector).peekable();
    matches.peek()?;
    Some(matches.map(inner_text).collect())
}
