//! Wikidata core: record types and pure page-classification helpers.
mod categories;
mod classify;
mod record;
mod text;

pub use categories::extract_categories;
pub use classify::{categories_exclude_item, is_hub_page, is_quest_page, HUB_KEYWORDS};
pub use record::{Component, ItemRecord, ItemRequirements, ItemValues, QuestRecord, Rarity};
pub use text::clean_text;
