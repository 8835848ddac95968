use crate::constants::responses::{FALLBACK_RESPONSE, POLICY_RESPONSES};

/// Answer a mention by keyword lookup over the policy table.
///
/// The first topic (in table order) whose keyword appears anywhere in the
/// lowercased text wins; anything else gets the fallback.
pub fn respond(text: &str) -> &'static str {
    let content = text.to_lowercase();
    for &(topic, answer) in POLICY_RESPONSES {
        if content.contains(topic) {
            return answer;
        }
    }
    FALLBACK_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_a_known_topic() {
        let answer = respond("What are the rules?");
        assert!(answer.starts_with("Server Rules:"));
    }

    #[test]
    fn first_table_entry_wins_when_several_topics_match() {
        // "rules" precedes "policies" in the table
        let answer = respond("tell me about the rules and policies");
        assert!(answer.starts_with("Server Rules:"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let answer = respond("HELP");
        assert!(answer.starts_with("You can ask me about:"));
    }

    #[test]
    fn unknown_topics_get_the_fallback() {
        assert_eq!(respond("what is the weather like"), FALLBACK_RESPONSE);
    }
}
