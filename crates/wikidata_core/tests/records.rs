use serde_json::json;
use wikidata_core::{ItemRecord, QuestRecord, Rarity};
use pretty_assertions::assert_eq;

#[test]
fn rarity_requires_exact_label() {
    assert_eq!(Rarity::from_label("Epic"), Some(Rarity::Epic));
    assert_eq!(Rarity::from_label("Epic Weapon"), None);
    assert_eq!(Rarity::from_label("epic"), None);
    assert_eq!(Rarity::Legendary.to_string(), "Legendary");
}

#[test]
fn empty_name_produces_no_record() {
    assert!(ItemRecord::new("", Some(Rarity::Rare), None, Some(10)).is_none());
}

#[test]
fn item_record_keeps_reserved_keys() {
    let record = ItemRecord::new("Ferro", Some(Rarity::Rare), Some("Weapon".into()), Some(500))
        .expect("named record");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Ferro",
            "rarity": "Rare",
            "category": "Weapon",
            "values": { "sell": 500, "recycle": {} },
            "components": [],
            "requirements": { "workshop": [], "quests": [], "crafting": [] }
        })
    );
}

#[test]
fn absent_fields_serialize_as_null() {
    let record = ItemRecord::new("Dud", None, None, None).unwrap();
    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(
        text,
        r#"{"name":"Dud","rarity":null,"category":null,"values":{"sell":null,"recycle":{}},"components":[],"requirements":{"workshop":[],"quests":[],"crafting":[]}}"#
    );
}

#[test]
fn quest_record_has_empty_requirements() {
    let quest = QuestRecord::new("Celeste's Request", Some("Celeste".into()));
    assert_eq!(
        serde_json::to_value(&quest).unwrap(),
        json!({ "quest_name": "Celeste's Request", "trader": "Celeste", "requirements": [] })
    );
}
