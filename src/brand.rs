//! Brand Size Adjustment
//!
//! Shifts a chart size along the alphabetic scale or the even numeric scale
//! according to the brand's sizing convention. Unknown brands degrade to the
//! base size with medium confidence.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::adjustments::{BrandProfile, BRAND_PROFILES};
use crate::types::GarmentCategory;

/// Alphabetic size scale, smallest to largest
pub const ALPHA_SCALE: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

pub const UNKNOWN_BRAND_NOTE: &str = "Brand not in database - standard sizing recommended";

/// Move `label` by `offset` size steps.
///
/// Numeric labels move two units per step and never go below zero.
/// Alphabetic labels clamp to the scale ends; labels outside the scale are
/// returned unchanged.
pub fn shift_size(label: &str, offset: i32) -> String {
    if offset == 0 {
        return label.to_string();
    }

    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = label.parse::<i64>() {
            return (value + i64::from(offset) * 2).max(0).to_string();
        }
    }

    match ALPHA_SCALE.iter().position(|s| *s == label) {
        Some(index) => {
            let last = (ALPHA_SCALE.len() - 1) as i64;
            let shifted = (index as i64 + i64::from(offset)).clamp(0, last) as usize;
            ALPHA_SCALE[shifted].to_string()
        }
        None => label.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrandConfidence {
    High,
    Medium,
}

/// Brand-adjusted size for one garment category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandAdjustment {
    pub size: Option<String>,
    pub adjustment: i32,
    pub note: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_style: Option<&'static str>,
    pub confidence: BrandConfidence,
}

/// Brand profiles indexed by lowercase id
pub struct BrandCatalog {
    index: FxHashMap<&'static str, &'static BrandProfile>,
}

impl BrandCatalog {
    pub fn new() -> Self {
        let mut index = FxHashMap::default();
        index.reserve(BRAND_PROFILES.len());
        for profile in BRAND_PROFILES {
            index.insert(profile.id, profile);
        }
        Self { index }
    }

    /// Case-insensitive lookup
    pub fn get(&self, brand: &str) -> Option<&'static BrandProfile> {
        self.index.get(brand.trim().to_lowercase().as_str()).copied()
    }

    /// Brand ids in table order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        BRAND_PROFILES.iter().map(|p| p.id)
    }

    pub fn profiles(&self) -> &'static [BrandProfile] {
        BRAND_PROFILES
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn adjust(&self, base: Option<&str>, brand: &str, category: GarmentCategory) -> BrandAdjustment {
        let Some(profile) = self.get(brand) else {
            tracing::debug!(brand, "Unknown brand, keeping base size");
            return BrandAdjustment {
                size: base.map(str::to_string),
                adjustment: 0,
                note: UNKNOWN_BRAND_NOTE,
                fit_style: None,
                confidence: BrandConfidence::Medium,
            };
        };

        let offset = profile.offset(category);
        tracing::debug!(brand = profile.id, category = category.as_str(), offset, "Brand offset applied");
        BrandAdjustment {
            size: base.map(|label| shift_size(label, offset)),
            adjustment: offset,
            note: profile.note,
            fit_style: Some(profile.fit_style),
            confidence: BrandConfidence::High,
        }
    }
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self::new()
    }
}
