use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// All text nodes under `el`, concatenated in document order. Callers trim
/// where the page formats a field with surrounding whitespace.
pub(crate) fn element_text(el: ElementRef) -> String {
    el.text().collect()
}

pub(crate) fn first_in<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

pub(crate) fn require_first<'a>(
    doc: &'a Html,
    selector: &Selector,
    what: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    doc.select(selector)
        .next()
        .ok_or(ScrapeError::MissingElement(what))
}
