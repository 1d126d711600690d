//! Body Proportion Ratios
//!
//! Ratios are published rounded to 3 decimals. A ratio is omitted (not
//! zero-filled) when either operand is absent.

use serde::Serialize;

use crate::request::Measurements;
use crate::types::round3;

/// Shoulder width is a flat measurement; scaling by 2.2 puts it on the same
/// footing as the hip circumference.
pub const SHOULDER_HIP_SCALE: f64 = 2.2;

/// Assumed leg length as a fraction of height. Not measured.
pub const LEG_LENGTH_FRACTION: f64 = 0.45;

/// Computed proportion ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BodyRatios {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_hip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_hip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_torso: Option<f64>,
}

impl BodyRatios {
    /// Ratios from a measurement set; the waist operand is the body-analysis
    /// waist (abdomen, else hip-region waist).
    pub fn from_measurements(measurements: &Measurements, height: f64) -> Self {
        Self::from_dimensions(
            measurements.chest(),
            measurements.body_waist(),
            measurements.hips(),
            measurements.shoulders(),
            height,
        )
    }

    pub fn from_dimensions(
        chest: Option<f64>,
        waist: Option<f64>,
        hips: Option<f64>,
        shoulders: Option<f64>,
        height: f64,
    ) -> Self {
        let height = Some(height).filter(|h| h.is_finite() && *h > 0.0);

        let shoulder_hip = shoulders
            .zip(hips)
            .map(|(s, h)| round3(s / h * SHOULDER_HIP_SCALE));
        let waist_hip = waist.zip(hips).map(|(w, h)| round3(w / h));
        let chest_waist = chest.zip(waist).map(|(c, w)| round3(c / w));
        let chest_height = chest.zip(height).map(|(c, h)| round3(c / h));
        let leg_torso = height.map(|h| {
            let leg_length = h * LEG_LENGTH_FRACTION;
            round3(leg_length / (h - leg_length))
        });

        Self {
            shoulder_hip,
            waist_hip,
            chest_waist,
            chest_height,
            leg_torso,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_ratios_present() {
        let r = BodyRatios::from_dimensions(Some(100.0), Some(80.0), Some(100.0), Some(50.0), 180.0);
        assert_relative_eq!(r.shoulder_hip.unwrap(), 1.1, epsilon = 1e-9);
        assert_relative_eq!(r.waist_hip.unwrap(), 0.8, epsilon = 1e-9);
        assert_relative_eq!(r.chest_waist.unwrap(), 1.25, epsilon = 1e-9);
        assert_relative_eq!(r.chest_height.unwrap(), 0.556, epsilon = 1e-9);
        // 0.45h / 0.55h, independent of h
        assert_relative_eq!(r.leg_torso.unwrap(), 0.818, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_operands_omit_ratios() {
        let r = BodyRatios::from_dimensions(Some(96.0), None, Some(98.0), None, 175.0);
        assert_eq!(r.shoulder_hip, None);
        assert_eq!(r.waist_hip, None);
        assert_eq!(r.chest_waist, None);
        assert!(r.chest_height.is_some());
        assert!(r.leg_torso.is_some());
    }

    #[test]
    fn test_non_positive_height_skips_height_ratios() {
        let r = BodyRatios::from_dimensions(Some(96.0), Some(80.0), Some(98.0), Some(45.0), 0.0);
        assert_eq!(r.chest_height, None);
        assert_eq!(r.leg_torso, None);
        assert!(r.shoulder_hip.is_some());
    }

    #[test]
    fn test_abdomen_preferred_over_waist() {
        let m = Measurements {
            chest: Some(100.0),
            abdomen: Some(90.0),
            waist: Some(80.0),
            hips: Some(100.0),
            ..Default::default()
        };
        let r = BodyRatios::from_measurements(&m, 180.0);
        assert_relative_eq!(r.waist_hip.unwrap(), 0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_omitted_ratios_absent_from_json() {
        let r = BodyRatios::from_dimensions(None, None, None, None, 170.0);
        let json = serde_json::to_value(r).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("leg_torso"));
    }
}
