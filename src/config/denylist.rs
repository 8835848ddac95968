use std::fs;
use std::path::Path;

use crate::bot::error::Error;

/// Load the denylist from a JSON array of strings.
///
/// Terms are lowercased once here so the scanner can match without re-folding
/// case on every message.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let raw = fs::read_to_string(path)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<Vec<String>, Error> {
    let terms: Vec<String> = serde_json::from_str(raw)?;
    Ok(terms.into_iter().map(|term| term.to_lowercase()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_json_array() {
        let terms = parse(r#"["alpha", "beta"]"#).unwrap();
        assert_eq!(terms, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn lowercases_terms_at_load() {
        let terms = parse(r#"["BadWord"]"#).unwrap();
        assert_eq!(terms, vec!["badword".to_string()]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse(r#"{"words": true}"#).is_err());
        assert!(parse("not json").is_err());
    }
}
