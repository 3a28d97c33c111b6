use crate::core::Catalog;
use crate::models::domain::EvaluationResult;
use serde::{Deserialize, Serialize};

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    #[serde(rename = "evaluationId")]
    pub evaluation_id: String,
    #[serde(rename = "evaluatedAt")]
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub result: EvaluationResult,
}

/// Response for the category listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse<'a> {
    #[serde(flatten)]
    pub catalog: &'a Catalog,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogVersion")]
    pub catalog_version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}
