use std::sync::OnceLock;

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node;
use scraper::ElementRef;
use wikidata_core::{clean_text, QuestRecord};

use crate::page::{element_text, find_header_cell, WikiPage};

fn trader_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i:quests?\s+(?:given|offered)\s+by)\s+([A-Z][a-z]+)")
            .expect("trader regex")
    })
}

pub fn parse_quest_page(page: &WikiPage) -> QuestRecord {
    let quest_name = page.first_heading();
    let trader = page
        .meta_description()
        .and_then(trader_from_description)
        .or_else(|| trader_from_infobox(page));
    QuestRecord::new(quest_name, trader)
}

/// Matches phrasing like "a quest given by Celeste".
pub fn trader_from_description(description: &str) -> Option<String> {
    trader_regex()
        .captures(description)
        .map(|caps| caps[1].to_string())
}

fn trader_from_infobox(page: &WikiPage) -> Option<String> {
    let infobox = page.infobox()?;
    let header = find_header_cell(infobox, |text| {
        text.contains("Trader") || text.contains("Quest Giver")
    })?;
    let cell = next_data_cell(page, header)?;
    let trader = clean_text(Some(&element_text(cell)));
    (!trader.is_empty()).then_some(trader)
}

/// The first `td` after `header` in document order, not limited to siblings.
fn next_data_cell<'a>(page: &'a WikiPage, header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    page.document()
        .root_element()
        .descendants()
        .skip_while(|node: &NodeRef<'a, Node>| node.id() != header.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "td")
}
