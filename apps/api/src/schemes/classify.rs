//! Keyword heuristics that turn a raw scraped scheme into a categorized,
//! eligibility-tagged record. Pure functions over the name/details text so
//! they can be unit-tested independently of any I/O.

use crate::schemes::models::Eligibility;

const NORTH_EASTERN_STATES: &[&str] = &[
    "Arunachal Pradesh",
    "Assam",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Sikkim",
    "Tripura",
];

/// Assigns a category from scheme name/details keywords. First match wins;
/// everything else stays the default "agriculture".
pub fn categorize(name: &str, details: &str) -> &'static str {
    let name = name.to_lowercase();
    let details = details.to_lowercase();

    if name.contains("kisan") {
        "farmer support"
    } else if name.contains("fasal bima") {
        "insurance"
    } else if name.contains("infrastructure") || name.contains("fund") {
        "infrastructure"
    } else if name.contains("irrigation") || details.contains("water") {
        "irrigation"
    } else if name.contains("organic") {
        "organic farming"
    } else if name.contains("digital") {
        "technology"
    } else {
        "agriculture"
    }
}

/// Derives eligibility tags from scheme text. Starts from the open defaults
/// and narrows per keyword.
pub fn derive_eligibility(name: &str, details: &str) -> Eligibility {
    let name = name.to_lowercase();
    let details = details.to_lowercase();

    let mut eligibility = Eligibility::default();

    if name.contains("north eastern region") || details.contains("north east") {
        eligibility.states = NORTH_EASTERN_STATES
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    if name.contains("women") || details.contains("women") || name.contains("namo drone didi") {
        eligibility.gender = vec!["Female".to_string()];
    }

    if details.contains("small and marginal farmers") {
        eligibility.income_groups = vec!["Low".to_string(), "Lower Middle".to_string()];
    }

    eligibility
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kisan_schemes_are_farmer_support() {
        assert_eq!(categorize("PM-KISAN Samman Nidhi", ""), "farmer support");
        assert_eq!(categorize("pm kisan maandhan yojana", ""), "farmer support");
    }

    #[test]
    fn test_fasal_bima_is_insurance() {
        assert_eq!(
            categorize("Pradhan Mantri Fasal Bima Yojana", ""),
            "insurance"
        );
    }

    #[test]
    fn test_infrastructure_and_fund_keywords() {
        assert_eq!(
            categorize("Agriculture Infrastructure Fund", ""),
            "infrastructure"
        );
        assert_eq!(categorize("Micro Irrigation Fund", ""), "infrastructure");
    }

    #[test]
    fn test_irrigation_by_name_or_water_in_details() {
        assert_eq!(
            categorize("Pradhan Mantri Krishi Sinchayee Yojana - Irrigation", ""),
            "irrigation"
        );
        assert_eq!(
            categorize("Per Drop More Crop", "Efficient use of water at farm level"),
            "irrigation"
        );
    }

    #[test]
    fn test_organic_and_digital_categories() {
        assert_eq!(
            categorize("Paramparagat Krishi Vikas Yojana (Organic Farming)", ""),
            "organic farming"
        );
        assert_eq!(categorize("Digital Agriculture Mission", ""), "technology");
    }

    #[test]
    fn test_default_category_is_agriculture() {
        assert_eq!(categorize("National Food Security Mission", "Grain output"), "agriculture");
    }

    #[test]
    fn test_category_order_kisan_beats_fund() {
        // "kisan" is checked before "fund", so a name carrying both keywords
        // lands in farmer support.
        assert_eq!(categorize("Kisan Welfare Fund", ""), "farmer support");
    }

    #[test]
    fn test_default_eligibility_is_open() {
        let e = derive_eligibility("Some Scheme", "Some purpose");
        assert_eq!(e.states, vec!["All States"]);
        assert_eq!(e.income_groups, vec!["All"]);
        assert_eq!(e.gender, vec!["All"]);
    }

    #[test]
    fn test_north_eastern_schemes_list_eight_states() {
        let e = derive_eligibility(
            "Mission Organic Value Chain Development for North Eastern Region",
            "",
        );
        assert_eq!(e.states.len(), 8);
        assert!(e.states.contains(&"Assam".to_string()));
        assert!(e.states.contains(&"Tripura".to_string()));

        let e = derive_eligibility("Some Scheme", "Focused on the north east states");
        assert_eq!(e.states.len(), 8);
    }

    #[test]
    fn test_women_keywords_narrow_gender() {
        let e = derive_eligibility("Namo Drone Didi", "");
        assert_eq!(e.gender, vec!["Female"]);

        let e = derive_eligibility("Some Scheme", "Drone access for women self-help groups");
        assert_eq!(e.gender, vec!["Female"]);
    }

    #[test]
    fn test_small_and_marginal_farmers_narrow_income() {
        let e = derive_eligibility(
            "PM-KISAN",
            "Income support for small and marginal farmers across the country",
        );
        assert_eq!(e.income_groups, vec!["Low", "Lower Middle"]);
    }
}
