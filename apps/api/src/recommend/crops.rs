//! Static crop reference data: the label set the model was trained on and a
//! small agronomy details table surfaced alongside recommendations.

use serde::Serialize;

/// Labels the shipped model artifact can emit, in training-set order.
pub const SUPPORTED_CROPS: &[&str] = &[
    "rice",
    "maize",
    "chickpea",
    "kidneybeans",
    "pigeonpeas",
    "mothbeans",
    "mungbean",
    "blackgram",
    "lentil",
    "pomegranate",
    "banana",
    "mango",
    "grapes",
    "watermelon",
    "muskmelon",
    "apple",
    "orange",
    "papaya",
    "coconut",
    "cotton",
    "jute",
    "coffee",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropDetails {
    pub season: &'static str,
    pub water_requirement: &'static str,
    pub growth_period: &'static str,
    pub soil_preference: &'static str,
    pub nutritional_value: &'static str,
}

const UNKNOWN: &str = "Information not available";

/// Looks up agronomy details for a crop. Unknown crops get a placeholder
/// record rather than an error, matching the tolerant lookup semantics of
/// the recommendation surface.
pub fn details_for(crop: &str) -> CropDetails {
    match crop.to_lowercase().as_str() {
        "rice" => CropDetails {
            season: "Monsoon",
            water_requirement: "High",
            growth_period: "3-6 months",
            soil_preference: "Clay loam soil",
            nutritional_value: "High in carbohydrates, contains some protein",
        },
        "wheat" => CropDetails {
            season: "Winter",
            water_requirement: "Medium",
            growth_period: "4-5 months",
            soil_preference: "Loamy soil",
            nutritional_value: "Rich in carbohydrates and proteins",
        },
        "maize" => CropDetails {
            season: "Summer",
            water_requirement: "Medium",
            growth_period: "3-4 months",
            soil_preference: "Well-drained soil",
            nutritional_value: "Rich in carbohydrates, proteins and vitamins",
        },
        _ => CropDetails {
            season: UNKNOWN,
            water_requirement: UNKNOWN,
            growth_period: UNKNOWN,
            soil_preference: UNKNOWN,
            nutritional_value: UNKNOWN,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_crops_cover_twenty_two_labels() {
        assert_eq!(SUPPORTED_CROPS.len(), 22);
        assert!(SUPPORTED_CROPS.contains(&"rice"));
        assert!(SUPPORTED_CROPS.contains(&"coffee"));
    }

    #[test]
    fn test_details_lookup_is_case_insensitive() {
        assert_eq!(details_for("Rice"), details_for("rice"));
        assert_eq!(details_for("rice").season, "Monsoon");
    }

    #[test]
    fn test_unknown_crop_gets_placeholder_details() {
        let details = details_for("dragonfruit");
        assert_eq!(details.season, "Information not available");
        assert_eq!(details.water_requirement, "Information not available");
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let json = serde_json::to_value(details_for("wheat")).unwrap();
        assert_eq!(json["waterRequirement"], "Medium");
        assert_eq!(json["soilPreference"], "Loamy soil");
    }
}
