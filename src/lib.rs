//! Size Recommendation Engine
//!
//! Maps body measurements, fit preferences and an optional brand to garment
//! sizes, a body-shape classification and derived styling guidance.
//!
//! Module layout (leaf-first):
//! - `types`, `charts`, `adjustments`: vocabulary and immutable lookup tables
//! - `request`: request model and boundary validation
//! - `analysis/`: ratios, shape classification, fit engineering
//! - `styling/`: static styling, outfit and measurement-guide content
//! - `matcher`, `brand`, `scoring`: size selection and scores
//! - `recommender`: the pipeline that assembles a full recommendation
//! - `api_server` (feature `api`): axum HTTP shell

pub mod types;
pub mod charts;
pub mod adjustments;
pub mod request;
pub mod analysis;
pub mod styling;
pub mod matcher;
pub mod brand;
pub mod scoring;
pub mod recommender;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use types::{Dimension, GarmentCategory, Gender};
pub use adjustments::{FitPreference, Morphotype};
pub use request::{FitPreferences, Measurements, RecommendationRequest, RequestError};
pub use analysis::{BodyAnalysis, BodyClassification, BodyRatios, BodyShape};
pub use brand::{BrandAdjustment, BrandCatalog};
pub use recommender::{Recommendation, SizeRecommendationEngine};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
