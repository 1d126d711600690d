//! Fit engineering notes: challenges, solutions and advantages derived from
//! measurement differentials and the body shape.

use serde::Serialize;

use crate::analysis::classify::{BodyClassification, BodyShape};
use crate::analysis::ratios::SHOULDER_HIP_SCALE;
use crate::request::Measurements;

/// Chest-waist gap (cm) above which tapered cuts are needed
pub const WIDE_CHEST_WAIST_GAP: f64 = 15.0;
/// Chest-waist gap (cm) below which the waist reads as undefined
pub const NARROW_CHEST_WAIST_GAP: f64 = 8.0;
/// Scaled shoulder vs hip gap (cm) treated as an imbalance
pub const SHOULDER_HIP_IMBALANCE: f64 = 12.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FitAnalysis {
    pub challenges: Vec<&'static str>,
    pub solutions: Vec<&'static str>,
    pub advantages: Vec<&'static str>,
    pub fit_priority: &'static str,
}

pub fn analyze_fit_engineering(measurements: &Measurements, classification: &BodyClassification) -> FitAnalysis {
    let mut analysis = FitAnalysis {
        fit_priority: classification.fit_priority,
        ..Default::default()
    };

    if let (Some(chest), Some(waist)) = (measurements.chest(), measurements.body_waist()) {
        let gap = chest - waist;
        if gap > WIDE_CHEST_WAIST_GAP {
            analysis.challenges.push("Significant chest-waist differential");
            analysis.solutions.push("Seek brands with athletic or tailored fits");
        } else if gap < NARROW_CHEST_WAIST_GAP {
            analysis.challenges.push("Minimal waist definition");
            analysis.solutions.push("Use structured garments to create shape");
        }
    }

    if let (Some(shoulders), Some(hips)) = (measurements.shoulders(), measurements.hips()) {
        let scaled = shoulders * SHOULDER_HIP_SCALE;
        if (scaled - hips).abs() > SHOULDER_HIP_IMBALANCE {
            analysis.challenges.push("Significant shoulder-hip imbalance");
            if scaled > hips {
                analysis.solutions.push("Size separately for tops and bottoms");
                analysis.advantages.push("Strong shoulder line - excellent for structured garments");
            } else {
                analysis.solutions.push("Emphasize upper body with structured tops");
                analysis.advantages.push("Feminine hip line - excellent for A-line silhouettes");
            }
        }
    }

    match classification.shape {
        BodyShape::AthleticVShape => {
            analysis.advantages.extend([
                "Ideal masculine proportions",
                "Excellent for tailored clothing",
                "Strong presence in structured garments",
            ]);
            analysis.challenges.push("May need athletic cut shirts");
            analysis.solutions.push("Look for brands with athletic fits");
        }
        BodyShape::Hourglass => {
            analysis.advantages.extend([
                "Ideal feminine proportions",
                "Excellent for fitted styles",
                "Natural waist emphasis",
            ]);
            analysis.solutions.push("Emphasize waist in all garments");
        }
        BodyShape::Rectangle => {
            analysis.challenges.push("Creating visual interest and curves");
            analysis.solutions.extend([
                "Use layering to add dimension",
                "Choose textured fabrics and patterns",
                "Add accessories to create focal points",
            ]);
            analysis.advantages.push("Versatile - can wear many different styles");
        }
        _ => {}
    }

    analysis
}
