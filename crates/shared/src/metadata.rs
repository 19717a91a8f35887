use serde::{Deserialize, Serialize};

/// TZIP-016 token-level metadata embedded in contract storage. Field order
/// matters: the serialized form is part of the storage expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub interfaces: Vec<String>,
}

impl TokenMetadata {
    /// The fixed metadata record every freshly originated collection starts
    /// with.
    pub fn sample() -> Self {
        Self {
            name: "example_name".to_string(),
            description: "sample_token".to_string(),
            interfaces: vec!["TZIP-012".to_string(), "TZIP-016".to_string()],
        }
    }

    /// Two-space-indented JSON, the exact form that gets hex-encoded into the
    /// `"contents"` storage entry.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_metadata_serializes_with_stable_layout() {
        let rendered = TokenMetadata::sample().to_pretty_json().unwrap();
        let expected = concat!(
            "{\n",
            "  \"name\": \"example_name\",\n",
            "  \"description\": \"sample_token\",\n",
            "  \"interfaces\": [\n",
            "    \"TZIP-012\",\n",
            "    \"TZIP-016\"\n",
            "  ]\n",
            "}"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let meta = TokenMetadata::sample();
        let rendered = meta.to_pretty_json().unwrap();
        let parsed: TokenMetadata = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, meta);
    }
}
