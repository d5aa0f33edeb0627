//! Feature Vector — the seven soil/climate inputs to crop recommendation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The seven numeric inputs the recommender was trained on, in training order:
/// N, P, K, temperature, humidity, ph, rainfall.
///
/// Deserialization is deliberately lenient: a missing field, a non-numeric
/// value, or a string that fails to parse all coerce to 0.0. No range
/// validation is performed — out-of-range values pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "N", alias = "n", default, deserialize_with = "lenient_f64")]
    pub n: f64,
    #[serde(rename = "P", alias = "p", default, deserialize_with = "lenient_f64")]
    pub p: f64,
    #[serde(rename = "K", alias = "k", default, deserialize_with = "lenient_f64")]
    pub k: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ph: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rainfall: f64,
}

impl FeatureVector {
    /// Returns the features in training order.
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Coerces a JSON value to f64: numbers pass through, numeric strings parse,
/// everything else (null, booleans, unparseable strings) becomes 0.0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        let json = r#"{"N": 90, "P": 42, "K": 43, "temperature": 20.8,
                       "humidity": 82.0, "ph": 6.5, "rainfall": 202.9}"#;
        let fv: FeatureVector = serde_json::from_str(json).unwrap();
        assert_eq!(fv.n, 90.0);
        assert_eq!(fv.p, 42.0);
        assert_eq!(fv.temperature, 20.8);
        assert_eq!(fv.rainfall, 202.9);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let fv: FeatureVector = serde_json::from_str(r#"{"N": 55}"#).unwrap();
        assert_eq!(fv.n, 55.0);
        assert_eq!(fv.p, 0.0);
        assert_eq!(fv.temperature, 0.0);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let fv: FeatureVector =
            serde_json::from_str(r#"{"N": "88", "temperature": " 31.5 "}"#).unwrap();
        assert_eq!(fv.n, 88.0);
        assert_eq!(fv.temperature, 31.5);
    }

    #[test]
    fn test_non_numeric_values_default_to_zero() {
        let fv: FeatureVector =
            serde_json::from_str(r#"{"N": "lots", "ph": null, "rainfall": true}"#).unwrap();
        assert_eq!(fv.n, 0.0);
        assert_eq!(fv.ph, 0.0);
        assert_eq!(fv.rainfall, 0.0);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let fv: FeatureVector = serde_json::from_str(r#"{"ph": 42.0, "N": -10}"#).unwrap();
        assert_eq!(fv.ph, 42.0);
        assert_eq!(fv.n, -10.0);
    }

    #[test]
    fn test_as_array_is_training_order() {
        let fv = FeatureVector {
            n: 1.0,
            p: 2.0,
            k: 3.0,
            temperature: 4.0,
            humidity: 5.0,
            ph: 6.0,
            rainfall: 7.0,
        };
        assert_eq!(fv.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
