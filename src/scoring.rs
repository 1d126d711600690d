//! Scores
//!
//! Aggregate scores published with every recommendation:
//! - proportional harmony: deviation of the ratios from fixed ideals
//! - comfort prediction: mean of harmony, chest proximity and a shape bonus
//! - confidence: measurement completeness plus harmony
//! - garment-fit precision: distance from the chosen size's midpoint
//!
//! Every score is clamped to a documented range.

use serde::Serialize;

use crate::analysis::{BodyRatios, BodyShape};
use crate::charts::SizeChart;
use crate::types::Dimension;

pub const HARMONY_FLOOR: f64 = 60.0;
pub const HARMONY_MAX_PENALTY: f64 = 30.0;
const HARMONY_PENALTY_SCALE: f64 = 20.0;

const IDEAL_SHOULDER_HIP: f64 = 1.0;
const IDEAL_WAIST_HIP: f64 = 0.7;
const IDEAL_CHEST_WAIST: f64 = 1.3;

pub const CONFIDENCE_FLOOR: f64 = 80.0;
pub const CONFIDENCE_CEILING: f64 = 98.0;

/// Chest circumference with the best comfort prediction
const COMFORT_REFERENCE_CHEST: f64 = 95.0;
const COMFORT_FLOOR: f64 = 60.0;

/// Start at 100 and subtract a capped penalty for each ratio present
pub fn proportional_harmony(ratios: &BodyRatios) -> f64 {
    let penalties = [
        ratios.shoulder_hip.map(|r| (r, IDEAL_SHOULDER_HIP)),
        ratios.waist_hip.map(|r| (r, IDEAL_WAIST_HIP)),
        ratios.chest_waist.map(|r| (r, IDEAL_CHEST_WAIST)),
    ];

    let score = penalties
        .iter()
        .flatten()
        .fold(100.0, |score, (actual, ideal)| {
            score - ((actual - ideal).abs() * HARMONY_PENALTY_SCALE).min(HARMONY_MAX_PENALTY)
        });

    score.max(HARMONY_FLOOR)
}

fn shape_bonus(shape: BodyShape) -> f64 {
    match shape {
        BodyShape::AthleticVShape | BodyShape::Hourglass => 90.0,
        BodyShape::Rectangle => 80.0,
        _ => 75.0,
    }
}

/// Mean of harmony, chest proximity (when chest is known) and the shape bonus
pub fn comfort_score(harmony: f64, chest: Option<f64>, shape: BodyShape) -> f64 {
    let chest_score = chest
        .map(|c| (100.0 - (c - COMFORT_REFERENCE_CHEST).abs() * 1.5).max(COMFORT_FLOOR));

    let scores: Vec<f64> = [Some(harmony), chest_score, Some(shape_bonus(shape))]
        .into_iter()
        .flatten()
        .collect();

    scores.iter().sum::<f64>() / scores.len() as f64
}

/// 85 + 10 x completeness + 0.3 x (harmony - 80), clamped to [80, 98]
pub fn confidence_score(completeness: f64, harmony: f64) -> f64 {
    (85.0 + completeness * 10.0 + (harmony - 80.0) * 0.3).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

/// Qualitative fit of one garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Perfect,
    Excellent,
    Good,
    NeedsAdjustment,
    Unknown,
}

impl FitLevel {
    pub fn from_difference(difference: f64) -> Self {
        let gap = difference.abs();
        if gap <= 1.0 {
            FitLevel::Perfect
        } else if gap <= 3.0 {
            FitLevel::Excellent
        } else if gap <= 5.0 {
            FitLevel::Good
        } else {
            FitLevel::NeedsAdjustment
        }
    }

    pub fn precision(&self) -> u8 {
        match self {
            FitLevel::Perfect => 95,
            FitLevel::Excellent => 85,
            FitLevel::Good => 75,
            FitLevel::NeedsAdjustment => 60,
            FitLevel::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GarmentFit {
    pub fit: FitLevel,
    pub precision: u8,
    /// Measurement minus the size midpoint (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

impl GarmentFit {
    pub fn unknown() -> Self {
        Self {
            fit: FitLevel::Unknown,
            precision: 0,
            difference: None,
        }
    }
}

/// Compare a measurement against the midpoint of `size`'s `dimension` range
pub fn garment_fit(measurement: Option<f64>, size: Option<&str>, chart: &SizeChart, dimension: Dimension) -> GarmentFit {
    let (Some(measurement), Some(size)) = (measurement, size) else {
        return GarmentFit::unknown();
    };
    let Some(range) = chart.entry(size).and_then(|entry| entry.range(dimension)) else {
        return GarmentFit::unknown();
    };

    let difference = measurement - range.midpoint();
    let fit = FitLevel::from_difference(difference);
    GarmentFit {
        fit,
        precision: fit.precision(),
        difference: Some(difference),
    }
}
