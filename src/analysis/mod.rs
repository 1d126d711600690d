//! Body proportion analysis
//!
//! Computes ratios, classifies body shape, and derives fit-engineering notes
//! and the styling profile for the classification.
//!
//! - `ratios`: proportion ratios from measurements
//! - `classify`: ordered first-match rule tables per gender
//! - `fit_engineering`: challenges / solutions / advantages

pub mod ratios;
pub mod classify;
pub mod fit_engineering;

pub use ratios::BodyRatios;
pub use classify::{classify_body, BodyClassification, BodyShape};
pub use fit_engineering::{analyze_fit_engineering, FitAnalysis};

use serde::Serialize;

use crate::request::Measurements;
use crate::scoring::proportional_harmony;
use crate::styling::{StylingProfile, styling_profile};
use crate::types::Gender;

/// Complete body analysis for one request
#[derive(Debug, Clone, Serialize)]
pub struct BodyAnalysis {
    pub classification: BodyClassification,
    pub ratios: BodyRatios,
    pub fit_analysis: FitAnalysis,
    pub styling_profile: StylingProfile,
    pub proportional_harmony: f64,
}

pub fn analyze_body(measurements: &Measurements, gender: Gender, height: f64) -> BodyAnalysis {
    let ratios = BodyRatios::from_measurements(measurements, height);
    let classification = classify_body(&ratios, gender);
    let fit_analysis = analyze_fit_engineering(measurements, &classification);
    let styling_profile = styling_profile(classification.shape);
    let proportional_harmony = proportional_harmony(&ratios);

    tracing::debug!(
        shape = classification.shape.label(),
        harmony = proportional_harmony,
        "Body analysis complete"
    );

    BodyAnalysis {
        classification,
        ratios,
        fit_analysis,
        styling_profile,
        proportional_harmony,
    }
}
