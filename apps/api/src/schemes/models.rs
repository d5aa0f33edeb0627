use serde::{Deserialize, Serialize};

/// A record as produced by the PIB press-release scraper. Field names match
/// the scraped table headers verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheme {
    #[serde(rename = "Scheme Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Details", default)]
    pub details: Option<String>,
}

/// Who a scheme applies to. Defaults are the open wildcards; the keyword
/// heuristics in `classify` narrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub states: Vec<String>,
    pub income_groups: Vec<String>,
    pub gender: Vec<String>,
}

impl Default for Eligibility {
    fn default() -> Self {
        Eligibility {
            states: vec!["All States".to_string()],
            income_groups: vec!["All".to_string()],
            gender: vec!["All".to_string()],
        }
    }
}

/// A cleaned, categorized scheme ready to serve. The `id` is assigned per
/// response, after filtering, so it is stable within a result set only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub eligibility: Eligibility,
}
