/// Check whether message text contains any denylisted term.
///
/// Matching is case-insensitive substring containment with no word-boundary
/// handling, so a term matches anywhere in the text. Terms are expected
/// pre-lowercased by the config loader. Short-circuits on the first hit.
pub fn contains_denylisted(text: &str, denylist: &[String]) -> bool {
    let content = text.to_lowercase();
    denylist.iter().any(|term| content.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn matches_case_insensitively_as_substring() {
        assert!(contains_denylisted(
            "This is BADword here",
            &list(&["badword"])
        ));
    }

    #[test]
    fn matches_inside_a_longer_word() {
        // No word-boundary handling: "ass" matches "class"
        assert!(contains_denylisted("my class starts now", &list(&["ass"])));
    }

    #[test]
    fn clean_text_does_not_match() {
        assert!(!contains_denylisted("hello there", &list(&["badword"])));
    }

    #[test]
    fn empty_denylist_matches_nothing() {
        assert!(!contains_denylisted("anything at all", &[]));
    }
}
