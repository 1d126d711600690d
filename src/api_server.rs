// Axum API Server Module
//
// Purpose: REST shell around the size recommendation engine
// Engine work is synchronous and CPU-bound; batches run on the blocking pool.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::adjustments::BrandProfile;
use crate::charts::{SizeChart, MEN_BOTTOM_CHART, MEN_TOP_CHART, WOMEN_BOTTOM_CHART, WOMEN_TOP_CHART};
use crate::recommender::{BatchOutcome, Recommendation, SizeRecommendationEngine, ENGINE_NAME, ENGINE_VERSION, SIZING_STANDARDS};
use crate::request::RequestError;
use crate::styling::{MeasurementInstructions, MeasurementStandards, MEASUREMENT_GUIDE, MEASUREMENT_STANDARDS};

pub const SERVICE_NAME: &str = "Professional Fashion Sizing API";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SizeRecommendationEngine>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("Initializing size recommendation engine...");
        Self {
            engine: Arc::new(SizeRecommendationEngine::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))

        // Recommendations
        .route("/api/recommend", post(recommend))
        .route("/api/recommend/batch", post(recommend_batch))

        // Reference tables
        .route("/api/brands", get(get_brands))
        .route("/api/sizes", get(get_size_charts))
        .route("/api/measurement-guide", get(get_measurement_guide))

        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Serialize)]
struct ApiInfo {
    version: &'static str,
    engine: &'static str,
    timestamp: String,
    processing_time_ms: f64,
}

#[derive(Serialize)]
struct RecommendResponse {
    success: bool,
    data: Recommendation,
    api_info: ApiInfo,
}

#[derive(Serialize)]
struct BatchResponse {
    success: bool,
    data: Vec<BatchOutcome>,
    api_info: ApiInfo,
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    data: T,
}

fn ok<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { success: true, data })
}

fn api_info(started: Instant) -> ApiInfo {
    ApiInfo {
        version: ENGINE_VERSION,
        engine: ENGINE_NAME,
        timestamp: chrono::Utc::now().to_rfc3339(),
        processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": ENGINE_VERSION,
        "engine": ENGINE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": "Available",
        "features": [
            "Professional body analysis",
            "Brand-specific recommendations",
            "Virtual fitting simulation",
            "Professional outfit curation"
        ]
    }))
}

async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let started = Instant::now();
    let Json(body) = payload?;

    let data = state.engine.recommend_value(&body)?;
    tracing::info!(
        top = ?data.top_size(),
        bottom = ?data.bottom_size(),
        confidence = data.confidence,
        "Recommendation served"
    );

    Ok(Json(RecommendResponse {
        success: true,
        data,
        api_info: api_info(started),
    }))
}

async fn recommend_batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BatchResponse>, AppError> {
    let started = Instant::now();
    let Json(body) = payload?;

    let Value::Array(requests) = body else {
        return Err(AppError::BadRequest {
            message: "Batch body must be a JSON array of requests".to_string(),
            code: "INVALID_REQUEST",
        });
    };

    tracing::info!("Scoring batch of {} requests", requests.len());

    // CPU-bound work: run Rayon on the blocking thread pool
    let engine = state.engine.clone();
    let results = tokio::task::spawn_blocking(move || engine.recommend_batch(&requests))
        .await
        .map_err(|e| AppError::Internal(format!("Batch task failed: {}", e)))?;

    Ok(Json(BatchResponse {
        success: true,
        data: results.into_iter().map(BatchOutcome::from).collect(),
        api_info: api_info(started),
    }))
}

/// Brand profiles keyed by id, in table order
struct BrandDetails(&'static [BrandProfile]);

impl Serialize for BrandDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for profile in self.0 {
            map.serialize_entry(profile.id, profile)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct BrandsData {
    brands: Vec<&'static str>,
    brand_details: BrandDetails,
    total_brands: usize,
}

async fn get_brands(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.engine.brands();
    ok(BrandsData {
        brands: catalog.ids().collect(),
        brand_details: BrandDetails(catalog.profiles()),
        total_brands: catalog.len(),
    })
}

#[derive(Serialize)]
struct SizeChartsData {
    men_tops: &'static SizeChart,
    women_tops: &'static SizeChart,
    men_bottoms: &'static SizeChart,
    women_bottoms: &'static SizeChart,
    standards: &'static [&'static str],
    regions: &'static [&'static str],
}

async fn get_size_charts() -> impl IntoResponse {
    ok(SizeChartsData {
        men_tops: &MEN_TOP_CHART,
        women_tops: &WOMEN_TOP_CHART,
        men_bottoms: &MEN_BOTTOM_CHART,
        women_bottoms: &WOMEN_BOTTOM_CHART,
        standards: SIZING_STANDARDS,
        regions: &["European", "International"],
    })
}

/// Measurement instructions keyed by request key, in guide order
struct GuideMeasurements(&'static [MeasurementInstructions]);

impl Serialize for GuideMeasurements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(entry.key, entry)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct MeasurementGuideData {
    measurements: GuideMeasurements,
    professional_standards: MeasurementStandards,
}

async fn get_measurement_guide() -> impl IntoResponse {
    ok(MeasurementGuideData {
        measurements: GuideMeasurements(MEASUREMENT_GUIDE),
        professional_standards: MEASUREMENT_STANDARDS,
    })
}

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Request(RequestError),
    BadRequest { message: String, code: &'static str },
    InvalidJson(String),
    NotFound(String),
    Internal(String),
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::Request(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidJson(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Request(err) => {
                tracing::warn!(code = err.code(), "Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string(), err.code())
            }
            AppError::BadRequest { message, code } => {
                tracing::warn!(code, "Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message, code)
            }
            AppError::InvalidJson(msg) => {
                tracing::warn!("Malformed JSON body: {}", msg);
                (StatusCode::BAD_REQUEST, msg, "INVALID_JSON")
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "INTERNAL_ERROR")
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message,
            "error_code": code
        }));

        (status, body).into_response()
    }
}
