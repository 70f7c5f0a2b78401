use scraper::{ElementRef, Html, Selector};
use wikidata_core::{categories_exclude_item, clean_text};

pub(crate) fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Concatenated text of an element and its descendants, whitespace untouched.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// A parsed wiki page, ready for classification and field extraction.
pub struct WikiPage {
    document: Html,
}

impl WikiPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub(crate) fn document(&self) -> &Html {
        &self.document
    }

    /// The first `table.infobox` on the page.
    pub fn infobox(&self) -> Option<ElementRef<'_>> {
        let sel = selector("table.infobox")?;
        self.document.select(&sel).next()
    }

    /// Normalized text of `#firstHeading`, or an empty string.
    pub fn first_heading(&self) -> String {
        let heading = selector("#firstHeading")
            .and_then(|sel| self.document.select(&sel).next())
            .map(element_text);
        clean_text(heading.as_deref())
    }

    /// Raw `content` of `<meta name="description">`.
    pub fn meta_description(&self) -> Option<&str> {
        let sel = selector(r#"meta[name="description"]"#)?;
        self.document
            .select(&sel)
            .next()
            .and_then(|meta| meta.value().attr("content"))
    }

    /// Structural item check: the info box must carry a "Sell" header cell.
    pub fn is_item_page(&self, categories: &[String]) -> bool {
        if categories_exclude_item(categories) {
            return false;
        }
        let Some(infobox) = self.infobox() else {
            return false;
        };
        find_header_cell(infobox, |text| text.contains("Sell")).is_some()
    }
}

/// First `th` inside `scope` whose text satisfies `matches`.
pub(crate) fn find_header_cell<'a>(
    scope: ElementRef<'a>,
    matches: impl Fn(&str) -> bool,
) -> Option<ElementRef<'a>> {
    let th = selector("th")?;
    scope
        .select(&th)
        .find(|cell| matches(&element_text(*cell)))
}
