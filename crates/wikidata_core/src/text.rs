/// Collapses every whitespace run to a single space and trims the ends.
/// `None` and blank input both yield an empty string.
pub fn clean_text(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut out = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn missing_value_is_empty() {
        assert_eq!(clean_text(None), "");
        assert_eq!(clean_text(Some("")), "");
        assert_eq!(clean_text(Some(" \n\t ")), "");
    }

    #[test]
    fn collapses_newlines_and_tabs() {
        assert_eq!(clean_text(Some("  Rusted \n\n Gear\t Kit ")), "Rusted Gear Kit");
    }

    #[test]
    fn non_breaking_space_counts_as_whitespace() {
        assert_eq!(clean_text(Some("1,250\u{a0}Scrap")), "1,250 Scrap");
    }

    #[test]
    fn is_idempotent() {
        let once = clean_text(Some("\tA   B\nC "));
        assert_eq!(clean_text(Some(&once)), once);
    }
}
