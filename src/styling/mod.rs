//! Styling content
//!
//! Static guidance keyed by body shape and gender:
//! - `profile`: colors, fabrics, silhouettes, principles, shopping strategy
//! - `outfits`: clothing categories, outfit recommendations, tailoring notes
//! - `guide`: measurement instructions

pub mod profile;
pub mod outfits;
pub mod guide;

pub use profile::{styling_profile, StylingProfile, StylingPrinciple};
pub use outfits::{
    clothing_categories, outfit_recommendations, suggest_adjustments, ClothingCategories,
    OutfitRecommendations, PROFESSIONAL_RECOMMENDATIONS,
};
pub use guide::{MeasurementInstructions, MeasurementStandards, MEASUREMENT_GUIDE, MEASUREMENT_STANDARDS};
