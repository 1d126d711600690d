//! Shared vocabulary types for the sizing pipeline.

use serde::{Deserialize, Serialize};

/// Classification branch and chart family.
/// Wire values follow the French form labels (`homme` / `femme`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "homme", alias = "male")]
    Homme,
    #[serde(rename = "femme", alias = "female")]
    Femme,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Homme => "homme",
            Gender::Femme => "femme",
        }
    }
}

/// Garment family: tops are sized on chest/shoulders, bottoms on waist/hips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Top,
    Bottom,
}

impl GarmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Top => "top",
            GarmentCategory::Bottom => "bottom",
        }
    }
}

/// Body dimensions published by the size charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Chest,
    Shoulders,
    Neck,
    Sleeve,
    Waist,
    Hips,
    Rise,
    Thigh,
}

impl Dimension {
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Chest => "chest",
            Dimension::Shoulders => "shoulders",
            Dimension::Neck => "neck",
            Dimension::Sleeve => "sleeve",
            Dimension::Waist => "waist",
            Dimension::Hips => "hips",
            Dimension::Rise => "rise",
            Dimension::Thigh => "thigh",
        }
    }
}

/// Round to 3 decimals, the precision used for every published ratio.
///
/// Rounds the exact stored value through the decimal formatter; scaling by
/// 1000 first would round twice and push values just below a tie upward.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

/// Treat missing, non-finite and non-positive measurements as absent
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
