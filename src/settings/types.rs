//! Settings types for uninews.

use serde::{Deserialize, Serialize};

/// Institutions used when no settings file is available.
pub const DEFAULT_INSTITUTIONS: &[&str] = &[
    "고려대",
    "동국대",
    "연세대",
    "성균관대",
    "가천대",
    "건국대",
    "경기대",
];

/// Keywords used when no settings file is available.
pub const DEFAULT_KEYWORDS: &[&str] = &["장학금", "발전기금", "기부", "후원", "기금", "모금"];

/// Keywords to search for and institutions to filter by.
///
/// On disk the institution list is stored under `schools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Institution names matched against article titles, in priority order.
    #[serde(rename = "schools")]
    pub institutions: Vec<String>,
    /// Search terms, one feed request each.
    pub keywords: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            institutions: DEFAULT_INSTITUTIONS.iter().map(|s| s.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Create settings from explicit lists.
    pub fn new(institutions: Vec<String>, keywords: Vec<String>) -> Self {
        Self {
            institutions,
            keywords,
        }
    }

    /// Build settings from the two comma-separated input fields.
    pub fn from_inputs(keywords: &str, institutions: &str) -> Self {
        Self {
            institutions: parse_list(institutions),
            keywords: parse_list(keywords),
        }
    }

    /// Keywords joined for display in an input field.
    pub fn keywords_input(&self) -> String {
        self.keywords.join(", ")
    }

    /// Institutions joined for display in an input field.
    pub fn institutions_input(&self) -> String {
        self.institutions.join(", ")
    }
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.institutions.len(), 7);
        assert_eq!(settings.institutions[0], "고려대");
        assert_eq!(settings.keywords.len(), 6);
        assert_eq!(settings.keywords[0], "장학금");
    }

    #[test]
    fn test_parse_list_trims_and_drops_empty() {
        assert_eq!(
            parse_list(" 장학금 ,기부,, , 모금 "),
            vec!["장학금", "기부", "모금"]
        );
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_list_keeps_duplicates_and_order() {
        assert_eq!(parse_list("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_from_inputs_roundtrip_display() {
        let settings = Settings::from_inputs("장학금, 기부", "고려대,연세대");
        assert_eq!(settings.keywords, vec!["장학금", "기부"]);
        assert_eq!(settings.institutions, vec!["고려대", "연세대"]);
        assert_eq!(settings.keywords_input(), "장학금, 기부");
        assert_eq!(settings.institutions_input(), "고려대, 연세대");
    }

    #[test]
    fn test_serialized_field_names() {
        let settings = Settings::new(vec!["고려대".to_string()], vec!["기부".to_string()]);
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["schools"][0], "고려대");
        assert_eq!(json["keywords"][0], "기부");
        assert!(json.get("institutions").is_none());
    }
}
