//! Adjustment Tables
//!
//! Fixed offsets applied before chart matching (fit ease, morphotype) and
//! after it (brand sizing conventions). All values in centimeters except
//! brand offsets, which count size steps.

use serde::{Deserialize, Serialize};

use crate::types::{Dimension, GarmentCategory};

// ============================================================================
// Fit preference (garment ease)
// ============================================================================

/// Desired garment ease for one body dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FitPreference {
    #[serde(rename = "tailored", alias = "cintre", alias = "slim")]
    Tailored,
    #[default]
    #[serde(rename = "standard", alias = "regular")]
    Standard,
    #[serde(rename = "relaxed", alias = "ample", alias = "loose")]
    Relaxed,
}

impl FitPreference {
    /// Ease added to the body measurement before matching (cm)
    pub fn ease(&self) -> f64 {
        match self {
            FitPreference::Tailored => -2.0,
            FitPreference::Standard => 0.0,
            FitPreference::Relaxed => 3.0,
        }
    }
}

// ============================================================================
// Morphotype (body build)
// ============================================================================

/// Coarse body-build category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Morphotype {
    #[serde(rename = "lean", alias = "mince")]
    Lean,
    #[serde(rename = "balanced", alias = "normal")]
    Balanced,
    #[serde(rename = "full", alias = "fort")]
    Full,
    #[serde(rename = "athletic", alias = "athletique")]
    Athletic,
}

/// Per-dimension morphotype offsets in cm (chest, waist, hips)
#[derive(Debug, Clone, Copy)]
pub struct MorphotypeProfile {
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
}

static LEAN: MorphotypeProfile = MorphotypeProfile {
    chest: -2.0,
    waist: -2.0,
    hips: -2.0,
};

static BALANCED: MorphotypeProfile = MorphotypeProfile {
    chest: 0.0,
    waist: 0.0,
    hips: 0.0,
};

static FULL: MorphotypeProfile = MorphotypeProfile {
    chest: 2.0,
    waist: 2.0,
    hips: 2.0,
};

static ATHLETIC: MorphotypeProfile = MorphotypeProfile {
    chest: 1.0,
    waist: -1.0,
    hips: 0.0,
};

impl Morphotype {
    pub fn profile(&self) -> &'static MorphotypeProfile {
        match self {
            Morphotype::Lean => &LEAN,
            Morphotype::Balanced => &BALANCED,
            Morphotype::Full => &FULL,
            Morphotype::Athletic => &ATHLETIC,
        }
    }

    /// Offset for a dimension; dimensions without an entry get 0
    pub fn offset(&self, dimension: Dimension) -> f64 {
        let profile = self.profile();
        match dimension {
            Dimension::Chest => profile.chest,
            Dimension::Waist => profile.waist,
            Dimension::Hips => profile.hips,
            _ => 0.0,
        }
    }
}

/// Apply fit ease and the morphotype offset for `offset_dimension`.
///
/// Shoulders are adjusted with the chest offset, so callers pass the offset
/// dimension explicitly rather than the measured one.
pub fn adjust_measurement(
    value: f64,
    preference: FitPreference,
    morphotype: Morphotype,
    offset_dimension: Dimension,
) -> f64 {
    value + preference.ease() + morphotype.offset(offset_dimension)
}

// ============================================================================
// Brand profiles
// ============================================================================

/// Brand sizing convention. Offsets count size steps (negative = size down).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrandProfile {
    #[serde(skip)]
    pub id: &'static str,
    pub top: i32,
    pub bottom: i32,
    pub note: &'static str,
    pub fit_style: &'static str,
    pub target_demographic: &'static str,
}

impl BrandProfile {
    pub fn offset(&self, category: GarmentCategory) -> i32 {
        match category {
            GarmentCategory::Top => self.top,
            GarmentCategory::Bottom => self.bottom,
        }
    }
}

pub static BRAND_PROFILES: &[BrandProfile] = &[
    BrandProfile { id: "zara", top: -1, bottom: -2, note: "European slim fit - size up for comfort", fit_style: "Contemporary European", target_demographic: "Fashion-forward, younger market" },
    BrandProfile { id: "h&m", top: 0, bottom: -1, note: "Fast fashion standard - true to size tops", fit_style: "Mass market standard", target_demographic: "Broad consumer base" },
    BrandProfile { id: "uniqlo", top: 1, bottom: 0, note: "Japanese sizing - generous fit", fit_style: "Asian-influenced comfort fit", target_demographic: "Quality-conscious consumers" },
    BrandProfile { id: "nike", top: 0, bottom: 0, note: "Athletic performance fit", fit_style: "Performance athletic", target_demographic: "Active lifestyle" },
    BrandProfile { id: "adidas", top: 0, bottom: 0, note: "Sports lifestyle fit", fit_style: "Athletic lifestyle", target_demographic: "Sports enthusiasts" },
    BrandProfile { id: "levis", top: 0, bottom: 1, note: "American heritage fit - relaxed", fit_style: "Classic American", target_demographic: "Heritage denim lovers" },
    BrandProfile { id: "calvin_klein", top: 0, bottom: 0, note: "Modern American fit", fit_style: "Contemporary American", target_demographic: "Professional modern" },
    BrandProfile { id: "tommy_hilfiger", top: 1, bottom: 0, note: "Preppy American fit - generous", fit_style: "Preppy American", target_demographic: "Classic American style" },
    BrandProfile { id: "hugo_boss", top: 0, bottom: -1, note: "German precision tailoring", fit_style: "European tailored", target_demographic: "Business professional" },
    BrandProfile { id: "armani", top: -1, bottom: -1, note: "Italian luxury fit - slim", fit_style: "Italian luxury", target_demographic: "Luxury fashion" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_ease_values() {
        assert_eq!(FitPreference::Tailored.ease(), -2.0);
        assert_eq!(FitPreference::Standard.ease(), 0.0);
        assert_eq!(FitPreference::Relaxed.ease(), 3.0);
        assert_eq!(FitPreference::default(), FitPreference::Standard);
    }

    #[test]
    fn test_morphotype_offsets() {
        assert_eq!(Morphotype::Lean.offset(Dimension::Hips), -2.0);
        assert_eq!(Morphotype::Full.offset(Dimension::Waist), 2.0);
        assert_eq!(Morphotype::Athletic.offset(Dimension::Chest), 1.0);
        assert_eq!(Morphotype::Athletic.offset(Dimension::Waist), -1.0);
        assert_eq!(Morphotype::Athletic.offset(Dimension::Hips), 0.0);
        assert_eq!(Morphotype::Full.offset(Dimension::Shoulders), 0.0);
    }

    #[test]
    fn test_adjust_measurement() {
        // 100 relaxed (+3) athletic chest (+1)
        let adjusted = adjust_measurement(100.0, FitPreference::Relaxed, Morphotype::Athletic, Dimension::Chest);
        assert_eq!(adjusted, 104.0);
        let adjusted = adjust_measurement(80.0, FitPreference::Tailored, Morphotype::Lean, Dimension::Waist);
        assert_eq!(adjusted, 76.0);
    }

    #[test]
    fn test_french_aliases() {
        let fit: FitPreference = serde_json::from_str("\"cintre\"").unwrap();
        assert_eq!(fit, FitPreference::Tailored);
        let fit: FitPreference = serde_json::from_str("\"ample\"").unwrap();
        assert_eq!(fit, FitPreference::Relaxed);
        let morph: Morphotype = serde_json::from_str("\"athletique\"").unwrap();
        assert_eq!(morph, Morphotype::Athletic);
        let morph: Morphotype = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(morph, Morphotype::Balanced);
    }

    #[test]
    fn test_brand_ids_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for brand in BRAND_PROFILES {
            assert_eq!(brand.id, brand.id.to_lowercase());
            assert!(seen.insert(brand.id), "duplicate brand {}", brand.id);
        }
        assert_eq!(BRAND_PROFILES.len(), 10);
    }
}
