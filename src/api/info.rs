use axum::response::{IntoResponse, Json};
use cvd_transform::Deficiency;
use serde::Serialize;
use utoipa::ToSchema;

/// Response from the index endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    /// Usage hint
    pub message: String,
    /// Accepted deficiency names
    pub deficiencies: Vec<String>,
}

/// One catalog entry
#[derive(Debug, Serialize, ToSchema)]
pub struct DeficiencyInfo {
    /// Name accepted by /correct/{deficiency}
    pub name: String,
    /// Simulation matrix, row-major
    #[schema(value_type = Vec<Vec<f64>>)]
    pub simulation: [[f64; 3]; 3],
    /// Daltonization matrix, row-major
    #[schema(value_type = Vec<Vec<f64>>)]
    pub daltonization: [[f64; 3]; 3],
}

impl From<Deficiency> for DeficiencyInfo {
    fn from(deficiency: Deficiency) -> Self {
        let pair = deficiency.matrices();
        Self {
            name: deficiency.name().to_string(),
            simulation: *pair.simulation.rows(),
            daltonization: *pair.daltonization.rows(),
        }
    }
}

/// Response from the deficiency catalog endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct DeficienciesResponse {
    pub deficiencies: Vec<DeficiencyInfo>,
}

/// API usage banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Usage information", body = IndexResponse),
    ),
    tag = "Info"
)]
pub async fn handle_index() -> impl IntoResponse {
    Json(IndexResponse {
        message: "CVD Recolorization API. POST to /correct/<deficiency> with form-file 'image'."
            .to_string(),
        deficiencies: Deficiency::names().into_iter().map(String::from).collect(),
    })
}

/// List supported deficiencies with their matrices
#[utoipa::path(
    get,
    path = "/api/deficiencies",
    responses(
        (status = 200, description = "Deficiency catalog", body = DeficienciesResponse),
    ),
    tag = "Info"
)]
pub async fn handle_deficiencies() -> impl IntoResponse {
    Json(DeficienciesResponse {
        deficiencies: Deficiency::ALL.into_iter().map(DeficiencyInfo::from).collect(),
    })
}
