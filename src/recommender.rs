//! Recommendation Orchestrator
//!
//! Pipeline per request:
//!   1. Body analysis (ratios, classification, fit engineering, styling profile)
//!   2. Top and bottom size matching
//!   3. Brand adjustment when a brand is supplied
//!   4. Comfort and confidence scores, garment-fit precision
//!   5. Static outfit and styling content
//!
//! Requests are independent; the engine holds only immutable tables and is
//! shared across threads behind an `Arc`.

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::analysis::{analyze_body, BodyAnalysis};
use crate::brand::{BrandAdjustment, BrandCatalog};
use crate::charts::chart_for;
use crate::matcher::{match_bottom, match_top};
use crate::request::{Measurements, RecommendationRequest, RequestError};
use crate::scoring::{comfort_score, confidence_score, garment_fit, GarmentFit};
use crate::styling::{
    clothing_categories, outfit_recommendations, suggest_adjustments, OutfitRecommendations, StylingPrinciple,
    PROFESSIONAL_RECOMMENDATIONS,
};
use crate::types::{Dimension, GarmentCategory};

pub const ENGINE_VERSION: &str = "2.0";
pub const ENGINE_NAME: &str = "Professional Fashion Sizing Engine";
pub const SIZING_STANDARDS: &[&str] = &["ISO 3635", "EN 13402"];

/// Comfort above this reads as an excellent overall fit
const EXCELLENT_COMFORT: f64 = 85.0;

// ============================================================================
// Result model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentSize {
    pub size: Option<String>,
    pub categories: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sizes {
    pub top: GarmentSize,
    pub bottom: GarmentSize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandRecommendations {
    pub top: BrandAdjustment,
    pub bottom: BrandAdjustment,
}

/// Measurements as used by the fitting assessment (waist is the body waist)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMeasurements {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub shoulders: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GarmentFitAnalysis {
    pub top: GarmentFit,
    pub bottom: GarmentFit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalAssessment {
    pub overall_fit: &'static str,
    pub adjustments_needed: Vec<&'static str>,
    pub confidence_level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VirtualFitting {
    pub body_measurements: BodyMeasurements,
    pub fit_analysis: GarmentFitAnalysis,
    pub comfort_prediction: f64,
    pub professional_assessment: ProfessionalAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalInsights {
    pub body_type_advantages: Vec<&'static str>,
    pub styling_strategy: Vec<StylingPrinciple>,
    pub fit_engineering_notes: Vec<&'static str>,
    pub professional_recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiMetadata {
    pub version: &'static str,
    pub engine: &'static str,
    pub standards: &'static [&'static str],
    pub confidence_level: f64,
}

/// Full recommendation for one request
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub sizes: Sizes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_recommendations: Option<BrandRecommendations>,
    pub body_analysis: BodyAnalysis,
    pub virtual_fitting: VirtualFitting,
    pub confidence: f64,
    pub outfit_recommendations: OutfitRecommendations,
    pub professional_insights: ProfessionalInsights,
    pub api_metadata: ApiMetadata,
}

impl Recommendation {
    pub fn top_size(&self) -> Option<&str> {
        self.sizes.top.size.as_deref()
    }

    pub fn bottom_size(&self) -> Option<&str> {
        self.sizes.bottom.size.as_deref()
    }
}

/// One batch element: a recommendation or that element's rejection
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Ok {
        success: bool,
        data: Recommendation,
    },
    Err {
        success: bool,
        error: String,
        error_code: &'static str,
    },
}

impl From<Result<Recommendation, RequestError>> for BatchOutcome {
    fn from(result: Result<Recommendation, RequestError>) -> Self {
        match result {
            Ok(data) => BatchOutcome::Ok { success: true, data },
            Err(e) => BatchOutcome::Err {
                success: false,
                error: e.to_string(),
                error_code: e.code(),
            },
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

pub struct SizeRecommendationEngine {
    brands: BrandCatalog,
}

impl SizeRecommendationEngine {
    pub fn new() -> Self {
        let brands = BrandCatalog::new();
        tracing::info!(brands = brands.len(), "Size recommendation engine ready");
        Self { brands }
    }

    pub fn brands(&self) -> &BrandCatalog {
        &self.brands
    }

    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        let measurements = &request.measurements;
        let gender = request.gender;

        // 1. Body analysis
        let body_analysis = analyze_body(measurements, gender, request.height);

        // 2. Chart matching
        let top = match_top(measurements, &request.fit_preferences, gender, request.morphotype);
        let bottom = match_bottom(measurements, &request.fit_preferences, gender, request.morphotype);
        let top_size = top.map(|m| m.label);
        let bottom_size = bottom.map(|m| m.label);

        let categories = clothing_categories(gender);
        let sizes = Sizes {
            top: GarmentSize {
                size: top_size.map(str::to_string),
                categories: categories.top,
            },
            bottom: GarmentSize {
                size: bottom_size.map(str::to_string),
                categories: categories.bottom,
            },
        };

        // 3. Brand adjustment
        let brand_recommendations = request.brand().map(|brand| BrandRecommendations {
            top: self.brands.adjust(top_size, brand, GarmentCategory::Top),
            bottom: self.brands.adjust(bottom_size, brand, GarmentCategory::Bottom),
        });

        // 4. Scores
        let shape = body_analysis.classification.shape;
        let harmony = body_analysis.proportional_harmony;
        let confidence = confidence_score(measurements.completeness(), harmony);
        let virtual_fitting = self.virtual_fitting(request, &body_analysis, top_size, bottom_size);

        // 5. Static content
        let outfit_recommendations = outfit_recommendations(gender, shape, top_size, bottom_size);
        let professional_insights = ProfessionalInsights {
            body_type_advantages: body_analysis.fit_analysis.advantages.clone(),
            styling_strategy: body_analysis.styling_profile.principles.clone(),
            fit_engineering_notes: body_analysis.fit_analysis.solutions.clone(),
            professional_recommendations: PROFESSIONAL_RECOMMENDATIONS,
        };

        tracing::debug!(
            gender = gender.as_str(),
            top = ?top_size,
            bottom = ?bottom_size,
            brand = ?request.brand(),
            confidence,
            "Recommendation assembled"
        );

        Recommendation {
            sizes,
            brand_recommendations,
            body_analysis,
            virtual_fitting,
            confidence,
            outfit_recommendations,
            professional_insights,
            api_metadata: ApiMetadata {
                version: ENGINE_VERSION,
                engine: ENGINE_NAME,
                standards: SIZING_STANDARDS,
                confidence_level: confidence,
            },
        }
    }

    fn virtual_fitting(
        &self,
        request: &RecommendationRequest,
        body_analysis: &BodyAnalysis,
        top_size: Option<&str>,
        bottom_size: Option<&str>,
    ) -> VirtualFitting {
        let measurements: &Measurements = &request.measurements;
        let body_waist = measurements.body_waist();

        let fit_analysis = GarmentFitAnalysis {
            top: garment_fit(
                measurements.chest(),
                top_size,
                chart_for(request.gender, GarmentCategory::Top),
                Dimension::Chest,
            ),
            bottom: garment_fit(
                body_waist,
                bottom_size,
                chart_for(request.gender, GarmentCategory::Bottom),
                Dimension::Waist,
            ),
        };

        let shape = body_analysis.classification.shape;
        let comfort = comfort_score(body_analysis.proportional_harmony, measurements.chest(), shape);

        VirtualFitting {
            body_measurements: BodyMeasurements {
                chest: measurements.chest(),
                waist: body_waist,
                hips: measurements.hips(),
                shoulders: measurements.shoulders(),
            },
            fit_analysis,
            comfort_prediction: comfort,
            professional_assessment: ProfessionalAssessment {
                overall_fit: if comfort > EXCELLENT_COMFORT { "Excellent" } else { "Good" },
                adjustments_needed: suggest_adjustments(shape),
                confidence_level: "High",
            },
        }
    }

    /// Validate a raw JSON body, then recommend
    pub fn recommend_value(&self, body: &Value) -> Result<Recommendation, RequestError> {
        let request = RecommendationRequest::from_value(body)?;
        Ok(self.recommend(&request))
    }

    /// Process independent requests in parallel. Results keep input order.
    pub fn recommend_batch(&self, bodies: &[Value]) -> Vec<Result<Recommendation, RequestError>> {
        tracing::debug!(count = bodies.len(), "Batch recommendation");
        bodies.par_iter().map(|body| self.recommend_value(body)).collect()
    }
}

impl Default for SizeRecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::BodyShape;
    use crate::scoring::FitLevel;
    use serde_json::json;

    fn engine() -> SizeRecommendationEngine {
        SizeRecommendationEngine::new()
    }

    fn men_body() -> Value {
        json!({
            "measurements": {"chest": 96, "shoulders": 47, "waist": 82, "hips": 98},
            "fit_preferences": {},
            "gender": "homme",
            "height": 178,
            "morphotype": "balanced"
        })
    }

    #[test]
    fn test_full_pipeline() {
        let rec = engine().recommend_value(&men_body()).unwrap();
        assert_eq!(rec.top_size(), Some("M"));
        // 82/98 sits on the shared 40/42 boundary; the smaller size wins
        assert_eq!(rec.bottom_size(), Some("40"));
        assert!(rec.brand_recommendations.is_none());
        assert!((80.0..=98.0).contains(&rec.confidence));
        assert_eq!(rec.api_metadata.confidence_level, rec.confidence);
        assert_eq!(rec.virtual_fitting.fit_analysis.top.fit, FitLevel::Perfect);
    }

    #[test]
    fn test_brand_recommendations() {
        let mut body = men_body();
        body["brand"] = json!("Zara");
        let rec = engine().recommend_value(&body).unwrap();
        let brands = rec.brand_recommendations.unwrap();
        assert_eq!(brands.top.size.as_deref(), Some("S"));
        assert_eq!(brands.bottom.size.as_deref(), Some("36"));
    }

    #[test]
    fn test_unmatchable_top_does_not_block_bottom() {
        let body = json!({
            "measurements": {"waist": 74, "hips": 100},
            "fit_preferences": {},
            "gender": "femme",
            "height": 165,
            "morphotype": "balanced",
            "brand": "uniqlo"
        });
        let rec = engine().recommend_value(&body).unwrap();
        assert_eq!(rec.top_size(), None);
        assert_eq!(rec.bottom_size(), Some("40"));
        assert_eq!(rec.virtual_fitting.fit_analysis.top, GarmentFit::unknown());
        let brands = rec.brand_recommendations.unwrap();
        assert_eq!(brands.top.size, None);
        assert_eq!(brands.top.adjustment, 1);
    }

    #[test]
    fn test_overall_fit_follows_comfort() {
        let rec = engine().recommend_value(&men_body()).unwrap();
        let expected = if rec.virtual_fitting.comfort_prediction > 85.0 { "Excellent" } else { "Good" };
        assert_eq!(rec.virtual_fitting.professional_assessment.overall_fit, expected);
    }

    #[test]
    fn test_insights_mirror_analysis() {
        let rec = engine().recommend_value(&men_body()).unwrap();
        assert_eq!(rec.professional_insights.body_type_advantages, rec.body_analysis.fit_analysis.advantages);
        assert_eq!(rec.professional_insights.styling_strategy.len(), rec.body_analysis.styling_profile.principles.len());
        assert_eq!(rec.professional_insights.professional_recommendations.len(), 4);
    }

    #[test]
    fn test_result_shape() {
        let rec = engine().recommend_value(&men_body()).unwrap();
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["sizes"]["top"]["size"], "M");
        assert!(json["sizes"]["bottom"]["categories"].is_array());
        assert!(json.get("brand_recommendations").is_none());
        assert!(json["body_analysis"]["classification"]["type"].is_string());
        assert!(json["virtual_fitting"]["professional_assessment"]["adjustments_needed"].is_array());
        assert_eq!(json["api_metadata"]["version"], "2.0");
        assert_eq!(json["api_metadata"]["standards"][1], "EN 13402");
    }

    #[test]
    fn test_missing_field_rejected_before_pipeline() {
        let mut body = men_body();
        body.as_object_mut().unwrap().remove("gender");
        let err = engine().recommend_value(&body).unwrap_err();
        assert_eq!(err, RequestError::MissingField("gender"));
    }

    #[test]
    fn test_batch_keeps_order() {
        let bad = json!({"gender": "homme"});
        let women = json!({
            "measurements": {"chest": 92, "shoulders": 41, "waist": 70, "hips": 96},
            "fit_preferences": {"chest": "relaxed"},
            "gender": "femme",
            "height": 168,
            "morphotype": "lean"
        });
        let results = engine().recommend_batch(&[men_body(), bad, women]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().top_size(), Some("M"));
        assert_eq!(results[1].as_ref().unwrap_err(), &RequestError::MissingField("measurements"));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_batch_outcome_envelope() {
        let results = engine().recommend_batch(&[json!("not an object")]);
        let outcome = BatchOutcome::from(results.into_iter().next().unwrap());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error_code"], "INVALID_REQUEST");
    }

    #[test]
    fn test_hourglass_classification_flows_through() {
        let body = json!({
            "measurements": {"chest": 92, "shoulders": 45, "abdomen": 68, "waist": 74, "hips": 99},
            "fit_preferences": {},
            "gender": "femme",
            "height": 168,
            "morphotype": "balanced"
        });
        let rec = engine().recommend_value(&body).unwrap();
        // 45 / 99 * 2.2 = 1.0; 68 / 99 = 0.687
        assert_eq!(rec.body_analysis.classification.shape, BodyShape::Hourglass);
        assert_eq!(rec.virtual_fitting.body_measurements.waist, Some(68.0));
        assert_eq!(rec.virtual_fitting.professional_assessment.adjustments_needed.len(), 2);

        // Size matching reads the hip-region waist (74 -> "40", midpoint 74);
        // precision reads the abdomen
        assert_eq!(rec.bottom_size(), Some("40"));
        let bottom = rec.virtual_fitting.fit_analysis.bottom;
        assert_eq!(bottom.fit, FitLevel::NeedsAdjustment);
        assert_eq!(bottom.difference, Some(-6.0));
    }
}
