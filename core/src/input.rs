use std::collections::HashMap;
use anyhow::{anyhow, Result};

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

impl ParsedInput {
    /// Removes and returns a metadata value, so callers can check for
    /// leftovers afterwards.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.metadata.remove(key)
    }
}

/// Splits free-form CLI words into a name and `key:value` metadata.
///
/// `goal add Q3 deadline start:2025-07-01 end:2025-09-30` yields the name
/// "Q3 deadline" with start/end metadata.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

/// Expands an unambiguous prefix to a full key.
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_goal_entry() {
        let args = vec![
            "Q3".to_string(),
            "deadline".to_string(),
            "start:2025-07-01".to_string(),
            "end:2025-09-30".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.name, "Q3 deadline");
        assert_eq!(parsed.metadata.get("start"), Some(&"2025-07-01".to_string()));
        assert_eq!(parsed.metadata.get("end"), Some(&"2025-09-30".to_string()));
    }

    #[test]
    fn test_take_drains_metadata() {
        let args = vec!["Read".to_string(), "icon:BookOpen".to_string()];
        let mut parsed = parse_args(&args);
        assert_eq!(parsed.take("icon"), Some("BookOpen".to_string()));
        assert_eq!(parsed.take("icon"), None);
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["present", "casual", "earned", "off", "transfer"];

        assert_eq!(expand_key("p", &candidates).unwrap(), "present");
        assert_eq!(expand_key("cas", &candidates).unwrap(), "casual");
        assert_eq!(expand_key("earned", &candidates).unwrap(), "earned");
        assert_eq!(expand_key("t", &candidates).unwrap(), "transfer");

        // Unknown
        assert!(expand_key("x", &candidates).is_err());

        // Ambiguous set
        let keys = vec!["start", "state"];
        assert!(expand_key("sta", &keys).is_err());
        assert_eq!(expand_key("star", &keys).unwrap(), "start");
    }
}
