use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;
use wikidata_core::{clean_text, ItemRecord, Rarity};
use wikidata_logging::wiki_warn;

use crate::page::{element_text, selector, WikiPage};

fn sell_price_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9][0-9,]*").expect("sell price regex"))
}

/// Builds an item record from the page's info box.
///
/// Returns `None` when the page has no info box or no usable name.
pub fn parse_item_page(page: &WikiPage, _categories: &[String]) -> Option<ItemRecord> {
    let infobox = page.infobox()?;

    let title_row = selector("tr.infobox-title").and_then(|sel| infobox.select(&sel).next());
    let name = match title_row {
        Some(row) => clean_text(Some(&element_text(row))),
        None => page.first_heading(),
    };

    let (category, rarity) = parse_category_and_rarity(infobox);
    let sell = sell_price_row(infobox)
        .map(|row| clean_text(Some(&element_text(row))))
        .and_then(|text| parse_sell_price(&text));

    ItemRecord::new(name, rarity, category, sell)
}

/// Walks `tr.data-tag` rows: exact rarity labels set the rarity, the first
/// other non-empty row becomes the category.
fn parse_category_and_rarity(infobox: ElementRef<'_>) -> (Option<String>, Option<Rarity>) {
    let mut category = None;
    let mut rarity = None;
    let Some(sel) = selector("tr.data-tag") else {
        return (category, rarity);
    };
    for row in infobox.select(&sel) {
        let text = clean_text(Some(&element_text(row)));
        if text.is_empty() {
            continue;
        }
        if let Some(tier) = Rarity::from_label(&text) {
            rarity = Some(tier);
        } else if category.is_none() {
            category = Some(text);
        }
    }
    (category, rarity)
}

/// First row whose class list has a token containing `data-sellprice`.
fn sell_price_row(infobox: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let tr = selector("tr")?;
    infobox.select(&tr).find(|row| {
        row.value()
            .classes()
            .any(|class| class.contains("data-sellprice"))
    })
}

/// First digit run in `text`, thousands separators allowed.
///
/// `"Sell: 1,250 Scrap"` gives `Some(1250)`; text without digits gives `None`.
pub fn parse_sell_price(text: &str) -> Option<u64> {
    let found = sell_price_regex().find(text)?;
    let digits = found.as_str().replace(',', "");
    match digits.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            wiki_warn!("Ignoring sell price {digits:?}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_sell_price;

    #[test]
    fn thousands_separator_is_removed() {
        assert_eq!(parse_sell_price("Sell: 1,250 Scrap"), Some(1250));
    }

    #[test]
    fn first_run_wins() {
        assert_eq!(parse_sell_price("3x 40 each"), Some(3));
    }

    #[test]
    fn no_digits_is_absent() {
        assert_eq!(parse_sell_price("Cannot be sold"), None);
        assert_eq!(parse_sell_price(""), None);
    }

    #[test]
    fn trailing_comma_is_ignored() {
        assert_eq!(parse_sell_price("500, then more"), Some(500));
    }

    #[test]
    fn overflow_is_absent() {
        assert_eq!(parse_sell_price("99999999999999999999999"), None);
    }
}
