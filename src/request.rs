//! Recommendation request model and boundary validation.
//!
//! Measurement and preference keys are accepted in English and in the
//! French form vocabulary (`poitrine`, `epaules`, `bassin`, `hanches`).
//! Validation runs before the engine: a missing top-level key is reported
//! by name, and nothing downstream ever sees a partial request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::adjustments::{FitPreference, Morphotype};
use crate::types::{positive, Dimension, Gender};

/// Top-level keys every request must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 5] = ["measurements", "fit_preferences", "gender", "height", "morphotype"];

/// Rejection raised at the request boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl RequestError {
    /// Stable error code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::NotAnObject => "INVALID_REQUEST",
            RequestError::MissingField(_) => "MISSING_FIELD",
            RequestError::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            RequestError::NotAnObject => None,
            RequestError::MissingField(field) => Some(*field),
            RequestError::InvalidField { field, .. } => Some(*field),
        }
    }
}

/// Body measurements in cm. Missing, null or non-positive values are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(default, alias = "poitrine", skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, alias = "epaules", skip_serializing_if = "Option::is_none")]
    pub shoulders: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdomen: Option<f64>,
    /// Hip-region (pelvis-level) waist measurement
    #[serde(default, alias = "bassin", skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, alias = "hanches", skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
}

impl Measurements {
    pub fn chest(&self) -> Option<f64> {
        positive(self.chest)
    }

    pub fn shoulders(&self) -> Option<f64> {
        positive(self.shoulders)
    }

    pub fn hips(&self) -> Option<f64> {
        positive(self.hips)
    }

    /// The hip-region waist key, read by bottom sizing and completeness
    pub fn waist(&self) -> Option<f64> {
        positive(self.waist)
    }

    /// Body-analysis waist: abdomen when provided, else the hip-region waist
    pub fn body_waist(&self) -> Option<f64> {
        positive(self.abdomen).or_else(|| self.waist())
    }

    /// Fraction of the four key dimensions (chest, shoulders, waist, hips) provided
    pub fn completeness(&self) -> f64 {
        let present = [self.chest(), self.shoulders(), self.waist(), self.hips()]
            .iter()
            .filter(|v| v.is_some())
            .count();
        present as f64 / 4.0
    }
}

/// Per-dimension fit preferences; absent dimensions default to standard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitPreferences {
    #[serde(default, alias = "poitrine", skip_serializing_if = "Option::is_none")]
    pub chest: Option<FitPreference>,
    #[serde(default, alias = "epaules", skip_serializing_if = "Option::is_none")]
    pub shoulders: Option<FitPreference>,
    #[serde(default, alias = "bassin", skip_serializing_if = "Option::is_none")]
    pub waist: Option<FitPreference>,
    #[serde(default, alias = "hanches", skip_serializing_if = "Option::is_none")]
    pub hips: Option<FitPreference>,
}

impl FitPreferences {
    /// Uniform preference across all dimensions
    pub fn uniform(preference: FitPreference) -> Self {
        Self {
            chest: Some(preference),
            shoulders: Some(preference),
            waist: Some(preference),
            hips: Some(preference),
        }
    }

    pub fn for_dimension(&self, dimension: Dimension) -> FitPreference {
        let pref = match dimension {
            Dimension::Chest => self.chest,
            Dimension::Shoulders => self.shoulders,
            Dimension::Waist => self.waist,
            Dimension::Hips => self.hips,
            _ => None,
        };
        pref.unwrap_or_default()
    }
}

/// A validated recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub measurements: Measurements,
    pub fit_preferences: FitPreferences,
    pub gender: Gender,
    /// Height in cm
    pub height: f64,
    pub morphotype: Morphotype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl RecommendationRequest {
    /// Validate a raw JSON body.
    ///
    /// Required keys are checked first (in `REQUIRED_FIELDS` order), then each
    /// field is decoded on its own so a bad value is reported by field name.
    /// Enum values are matched case-insensitively.
    pub fn from_value(value: &Value) -> Result<Self, RequestError> {
        let body = value.as_object().ok_or(RequestError::NotAnObject)?;

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !body.contains_key(**f)) {
            return Err(RequestError::MissingField(*missing));
        }

        let brand = match body.get("brand") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(RequestError::InvalidField {
                    field: "brand",
                    reason: format!("expected a string, got {}", other),
                })
            }
        };

        Ok(Self {
            measurements: decode_field(body, "measurements")?,
            fit_preferences: decode_field(body, "fit_preferences")?,
            gender: decode_field(body, "gender")?,
            height: decode_field(body, "height")?,
            morphotype: decode_field(body, "morphotype")?,
            brand,
        })
    }

    /// Brand id if one was supplied (empty strings mean no brand)
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }
}

fn decode_field<T: DeserializeOwned>(body: &Map<String, Value>, field: &'static str) -> Result<T, RequestError> {
    let raw = body.get(field).cloned().unwrap_or(Value::Null);
    serde_json::from_value(lowercase_strings(raw)).map_err(|e| RequestError::InvalidField {
        field,
        reason: e.to_string(),
    })
}

/// Lowercase string leaves (one level into objects) so `"Homme"` and
/// `{"chest": "Relaxed"}` decode like their lowercase forms.
fn lowercase_strings(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => (k, Value::String(s.to_lowercase())),
                    other => (k, other),
                })
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "measurements": {"chest": 96, "shoulders": 47, "waist": 82, "hips": 98},
            "fit_preferences": {"chest": "standard"},
            "gender": "homme",
            "height": 178,
            "morphotype": "balanced",
            "brand": "zara"
        })
    }

    #[test]
    fn test_valid_request() {
        let req = RecommendationRequest::from_value(&full_body()).unwrap();
        assert_eq!(req.gender, Gender::Homme);
        assert_eq!(req.height, 178.0);
        assert_eq!(req.morphotype, Morphotype::Balanced);
        assert_eq!(req.measurements.chest(), Some(96.0));
        assert_eq!(req.brand(), Some("zara"));
    }

    #[test]
    fn test_missing_measurements_is_named() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("measurements");
        let err = RecommendationRequest::from_value(&body).unwrap_err();
        assert_eq!(err, RequestError::MissingField("measurements"));
        assert_eq!(err.to_string(), "Missing required field: measurements");
        assert_eq!(err.code(), "MISSING_FIELD");
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let err = RecommendationRequest::from_value(&json!({"gender": "femme"})).unwrap_err();
        assert_eq!(err, RequestError::MissingField("measurements"));

        let mut body = full_body();
        let obj = body.as_object_mut().unwrap();
        obj.remove("height");
        obj.remove("morphotype");
        let err = RecommendationRequest::from_value(&body).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = RecommendationRequest::from_value(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, RequestError::NotAnObject);
    }

    #[test]
    fn test_invalid_enum_names_field() {
        let mut body = full_body();
        body["morphotype"] = json!("gigantic");
        let err = RecommendationRequest::from_value(&body).unwrap_err();
        assert_eq!(err.field(), Some("morphotype"));
        assert_eq!(err.code(), "INVALID_FIELD");
    }

    #[test]
    fn test_french_keys_and_case_insensitive_values() {
        let body = json!({
            "measurements": {"poitrine": 90, "epaules": 40, "bassin": 74, "hanches": 100, "abdomen": 0},
            "fit_preferences": {"poitrine": "Cintre", "hanches": "AMPLE"},
            "gender": "Femme",
            "height": 165,
            "morphotype": "Mince"
        });
        let req = RecommendationRequest::from_value(&body).unwrap();
        assert_eq!(req.gender, Gender::Femme);
        assert_eq!(req.morphotype, Morphotype::Lean);
        assert_eq!(req.fit_preferences.for_dimension(Dimension::Chest), FitPreference::Tailored);
        assert_eq!(req.fit_preferences.for_dimension(Dimension::Hips), FitPreference::Relaxed);
        assert_eq!(req.fit_preferences.for_dimension(Dimension::Waist), FitPreference::Standard);
        // abdomen 0 is absent, so body waist falls back to the hip-region key
        assert_eq!(req.measurements.body_waist(), Some(74.0));
        assert_eq!(req.brand(), None);
    }

    #[test]
    fn test_absent_measurements() {
        let m = Measurements {
            chest: Some(0.0),
            shoulders: Some(-3.0),
            abdomen: Some(88.0),
            waist: None,
            hips: Some(100.0),
        };
        assert_eq!(m.chest(), None);
        assert_eq!(m.shoulders(), None);
        assert_eq!(m.body_waist(), Some(88.0));
        assert_eq!(m.waist(), None);
        assert_eq!(m.completeness(), 0.25);
    }

    #[test]
    fn test_blank_brand_is_none() {
        let mut body = full_body();
        body["brand"] = json!("  ");
        let req = RecommendationRequest::from_value(&body).unwrap();
        assert_eq!(req.brand(), None);

        body["brand"] = json!(42);
        let err = RecommendationRequest::from_value(&body).unwrap_err();
        assert_eq!(err.field(), Some("brand"));
    }
}
