/// Filename fragments that mark navigation and listing pages.
pub const HUB_KEYWORDS: [&str; 10] = [
    "quests",
    "weapons",
    "loot",
    "workshop",
    "traders",
    "materials",
    "components",
    "items",
    "crafting",
    "upgrades",
];

/// Hub pages are skipped before any other check runs.
///
/// The "Lore" category test is case-sensitive, unlike the quest and item checks.
pub fn is_hub_page(stem: &str, categories: &[String]) -> bool {
    let base = stem.to_lowercase();
    if HUB_KEYWORDS.iter().any(|kw| base.contains(kw)) {
        return true;
    }
    categories.iter().any(|cat| cat.contains("Lore"))
}

pub fn is_quest_page(stem: &str, categories: &[String]) -> bool {
    if stem.to_lowercase().contains("quest") {
        return true;
    }
    categories
        .iter()
        .any(|cat| cat.to_lowercase().starts_with("quest"))
}

/// Category-only half of the item check; the structural half needs a parsed page.
pub fn categories_exclude_item(categories: &[String]) -> bool {
    categories.iter().any(|cat| {
        let lower = cat.to_lowercase();
        lower.contains("quest") || lower.contains("lore")
    })
}
