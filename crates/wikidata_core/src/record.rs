use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of item quality tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Exact, case-sensitive match against the tier labels.
    pub fn from_label(text: &str) -> Option<Rarity> {
        Self::ALL.into_iter().find(|r| r.label() == text)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reserved shape for crafting inputs; never populated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemValues {
    pub sell: Option<u64>,
    pub recycle: BTreeMap<String, u64>,
}

/// Placeholder requirement lists. Keys are always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRequirements {
    pub workshop: Vec<Value>,
    pub quests: Vec<Value>,
    pub crafting: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub rarity: Option<Rarity>,
    pub category: Option<String>,
    pub values: ItemValues,
    pub components: Vec<Component>,
    pub requirements: ItemRequirements,
}

impl ItemRecord {
    /// Builds a record with the reserved fields left empty.
    /// Returns `None` for an empty name, since such a page yields no record.
    pub fn new(
        name: impl Into<String>,
        rarity: Option<Rarity>,
        category: Option<String>,
        sell: Option<u64>,
    ) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            rarity,
            category,
            values: ItemValues {
                sell,
                recycle: BTreeMap::new(),
            },
            components: Vec::new(),
            requirements: ItemRequirements::default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub quest_name: String,
    pub trader: Option<String>,
    pub requirements: Vec<Value>,
}

impl QuestRecord {
    pub fn new(quest_name: impl Into<String>, trader: Option<String>) -> Self {
        Self {
            quest_name: quest_name.into(),
            trader,
            requirements: Vec::new(),
        }
    }
}
