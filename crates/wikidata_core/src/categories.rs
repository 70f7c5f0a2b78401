use std::sync::OnceLock;

use regex::Regex;

fn category_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?s)"wgCategories":(\[.*?\])"#).expect("category regex"))
}

/// Pulls the `wgCategories` array out of the page's embedded config block.
///
/// A payload that is not a valid JSON string array is split on commas instead.
/// Pages without the key yield an empty list.
pub fn extract_categories(raw_html: &str) -> Vec<String> {
    let Some(caps) = category_regex().captures(raw_html) else {
        return Vec::new();
    };
    let payload = &caps[1];
    match serde_json::from_str::<Vec<String>>(payload) {
        Ok(categories) => categories,
        Err(_) => split_payload(payload),
    }
}

fn split_payload(payload: &str) -> Vec<String> {
    payload
        .trim_matches(&['[', ']'][..])
        .split(',')
        .map(|part| part.trim().trim_matches('"'))
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_payload;

    #[test]
    fn split_strips_brackets_and_quotes() {
        assert_eq!(
            split_payload(r#"["Weapons", "Epic" ,Loot]"#),
            vec!["Weapons", "Epic", "Loot"]
        );
    }

    #[test]
    fn split_drops_empty_parts() {
        assert_eq!(split_payload(r#"[,"A",, "" ,]"#), vec!["A"]);
        assert!(split_payload("[]").is_empty());
    }
}
