//! Read-only scheme repository. The static scraped JSON file is the source
//! of truth; it is parsed, cleaned and categorized once at startup. When the
//! file cannot be read, a small built-in emergency list keeps the endpoint
//! serving rather than failing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::schemes::classify::{categorize, derive_eligibility};
use crate::schemes::models::{RawScheme, Scheme};

/// The scraped table repeats its header as a data row; the cleaner must
/// drop it.
const HEADER_ROW_NAME: &str = "Name       of       the Scheme";
const HEADER_ROW_DETAILS: &str = "Purpose";

/// Minimal list served when the data file is unusable.
const EMERGENCY_SCHEMES: &[(&str, &str)] = &[
    (
        "PM Kisan Yojana",
        "Agricultural scheme to provide financial assistance to farmers",
    ),
    (
        "PM Awas Yojana",
        "Housing scheme to provide affordable housing to all",
    ),
    (
        "PM Jan Dhan Yojana",
        "Financial scheme to provide banking services to all",
    ),
    (
        "PM Ujjwala Yojana",
        "LPG scheme to provide clean cooking fuel to all",
    ),
];

/// Filter parameters for a scheme listing request. All values are matched
/// case-insensitively; empty strings mean "no filter".
#[derive(Debug, Default, Clone)]
pub struct SchemeQuery {
    pub state: Option<String>,
    pub category: Option<String>,
    pub income: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone)]
pub struct SchemeRepository {
    schemes: Vec<Scheme>,
}

impl SchemeRepository {
    /// Loads and cleans the scraped JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read schemes file {}", path.display()))?;
        let records: Vec<RawScheme> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse schemes file {}", path.display()))?;

        let schemes: Vec<Scheme> = records.iter().filter_map(clean_scheme).collect();
        info!(
            count = schemes.len(),
            path = %path.display(),
            "scheme repository loaded"
        );
        Ok(SchemeRepository { schemes })
    }

    /// Loads the data file, degrading to the built-in emergency list on any
    /// failure. Never fails.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(repo) => repo,
            Err(e) => {
                warn!("falling back to built-in scheme list: {e:#}");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        let schemes = EMERGENCY_SCHEMES
            .iter()
            .map(|(name, details)| build_scheme(name, details))
            .collect();
        SchemeRepository { schemes }
    }

    /// Every cleaned scheme, unfiltered and without response IDs.
    pub fn all(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Applies the query filters and assigns sequential IDs to the surviving
    /// schemes (IDs are positional within the filtered result, matching the
    /// public API's historical behavior).
    pub fn filter(&self, query: &SchemeQuery) -> Vec<Scheme> {
        let category = normalized(&query.category);
        let state = normalized(&query.state);
        let gender = normalized(&query.gender);
        let income = normalized(&query.income);

        let mut matches: Vec<Scheme> = self
            .schemes
            .iter()
            .filter(|s| match &category {
                Some(c) => s.category.to_lowercase().contains(c),
                None => true,
            })
            .filter(|s| match &state {
                Some(wanted) => {
                    s.eligibility.states.iter().any(|st| st == "All States")
                        || s.eligibility
                            .states
                            .iter()
                            .any(|st| st.to_lowercase().contains(wanted))
                }
                None => true,
            })
            .filter(|s| match &gender {
                Some(wanted) => {
                    s.eligibility.gender.iter().any(|g| g == "All")
                        || s.eligibility
                            .gender
                            .iter()
                            .any(|g| g.to_lowercase() == *wanted)
                }
                None => true,
            })
            .filter(|s| match &income {
                Some(wanted) => {
                    s.eligibility.income_groups.iter().any(|ig| ig == "All")
                        || s.eligibility
                            .income_groups
                            .iter()
                            .any(|ig| ig.to_lowercase().contains(wanted))
                }
                None => true,
            })
            .cloned()
            .collect();

        for (i, scheme) in matches.iter_mut().enumerate() {
            scheme.id = Some(i as u32 + 1);
        }
        matches
    }
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Cleans one raw record: trims, drops empty/header rows, categorizes and
/// derives eligibility.
fn clean_scheme(raw: &RawScheme) -> Option<Scheme> {
    let name = raw.name.as_deref()?.trim();
    let details = raw.details.as_deref()?.trim();
    if name.is_empty() || details.is_empty() {
        return None;
    }
    if name == HEADER_ROW_NAME && details == HEADER_ROW_DETAILS {
        return None;
    }
    Some(build_scheme(name, details))
}

fn build_scheme(name: &str, details: &str) -> Scheme {
    Scheme {
        id: None,
        name: name.to_string(),
        description: details.to_string(),
        category: categorize(name, details).to_string(),
        eligibility: derive_eligibility(name, details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_file() -> tempfile::NamedTempFile {
        let json = serde_json::json!([
            {"Scheme Name": HEADER_ROW_NAME, "Details": HEADER_ROW_DETAILS},
            {"Scheme Name": "  PM-KISAN  ", "Details": "Income support for small and marginal farmers"},
            {"Scheme Name": "Pradhan Mantri Fasal Bima Yojana", "Details": "Crop insurance against natural risks"},
            {"Scheme Name": "Namo Drone Didi", "Details": "Drones for women self-help groups"},
            {"Scheme Name": "Mission Organic Value Chain Development for North Eastern Region", "Details": "Certified organic production"},
            {"Scheme Name": "", "Details": "orphan details"},
            {"Scheme Name": "No details scheme"}
        ])
        .to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_cleans_header_and_empty_rows() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        assert_eq!(repo.all().len(), 4);
        assert!(repo.all().iter().all(|s| s.name != HEADER_ROW_NAME));
        // Whitespace is trimmed during cleaning.
        assert_eq!(repo.all()[0].name, "PM-KISAN");
    }

    #[test]
    fn test_load_or_fallback_serves_emergency_list() {
        let repo = SchemeRepository::load_or_fallback("/nonexistent/schemes.json");
        assert_eq!(repo.all().len(), 4);
        assert_eq!(repo.all()[0].name, "PM Kisan Yojana");
        assert_eq!(repo.all()[0].category, "farmer support");
    }

    #[test]
    fn test_filter_by_category_substring() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery {
            category: Some("insurance".to_string()),
            ..SchemeQuery::default()
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pradhan Mantri Fasal Bima Yojana");
    }

    #[test]
    fn test_filter_by_state_honors_all_states_wildcard() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery {
            state: Some("Assam".to_string()),
            ..SchemeQuery::default()
        });
        // All-states schemes plus the NE-specific one.
        assert_eq!(results.len(), 4);

        let results = repo.filter(&SchemeQuery {
            state: Some("Kerala".to_string()),
            ..SchemeQuery::default()
        });
        // The NE-only scheme drops out.
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_filter_by_gender_exact_match() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery {
            gender: Some("female".to_string()),
            ..SchemeQuery::default()
        });
        assert_eq!(results.len(), 4);

        let results = repo.filter(&SchemeQuery {
            gender: Some("male".to_string()),
            ..SchemeQuery::default()
        });
        // Only the open ("All") schemes survive a male filter.
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_filter_by_income_group() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery {
            income: Some("low".to_string()),
            ..SchemeQuery::default()
        });
        // "low" matches both the wildcard-All schemes and "Low"/"Lower Middle".
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_filter_assigns_sequential_ids_after_filtering() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery::default());
        let ids: Vec<u32> = results.iter().map(|s| s.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let filtered = repo.filter(&SchemeQuery {
            category: Some("insurance".to_string()),
            ..SchemeQuery::default()
        });
        assert_eq!(filtered[0].id, Some(1));
    }

    #[test]
    fn test_empty_query_strings_mean_no_filter() {
        let file = sample_file();
        let repo = SchemeRepository::load(file.path()).unwrap();
        let results = repo.filter(&SchemeQuery {
            category: Some("  ".to_string()),
            gender: Some(String::new()),
            ..SchemeQuery::default()
        });
        assert_eq!(results.len(), 4);
    }
}
