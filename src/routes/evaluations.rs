use actix_web::{web, HttpResponse, Responder};
use crate::core::{Evaluator, CATALOG_VERSION};
use crate::models::{
    CatalogResponse, ErrorResponse, EvaluateRequest, EvaluateResponse, HealthResponse,
    ProfileError,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator<'static>,
    pub default_language: String,
}

/// Configure all evaluation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/travel/evaluate", web::post().to(evaluate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_version: CATALOG_VERSION.to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every category with its destinations and rules
///
/// GET /api/v1/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.evaluator.catalog();

    HttpResponse::Ok().json(CatalogResponse {
        catalog,
        count: catalog.len(),
    })
}

/// Evaluate a traveler profile
///
/// POST /api/v1/travel/evaluate
///
/// Request body:
/// ```json
/// {
///   "age": 28 | "28",
///   "income": "very-low|low|high|very-high",
///   "riskTolerance": "low|medium|high",
///   "fitnessLevel": "sedentary|moderate|active|athletic",
///   "interests": ["adventure"],
///   "languages": ["english"],
///   "tripDuration": "weekend|one-week|two-weeks|month-or-more",
///   "travelGroup": "solo|couple|friends|family-with-children|family-adults"
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    let profile = match req.into_inner().into_profile(&state.default_language) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Rejected traveler profile: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: error_label(&e).to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let result = state.evaluator.evaluate(&profile);

    let response = EvaluateResponse {
        evaluation_id: uuid::Uuid::new_v4().to_string(),
        evaluated_at: chrono::Utc::now(),
        result,
    };

    tracing::info!(
        "Evaluation {}: top match '{}' for {:?}/{:?}",
        response.evaluation_id,
        response
            .result
            .top_matches
            .first()
            .map(|m| m.category.as_str())
            .unwrap_or("none"),
        profile.travel_group,
        profile.trip_duration
    );

    HttpResponse::Ok().json(response)
}

fn error_label(err: &ProfileError) -> &'static str {
    match err {
        ProfileError::Validation(_) => "Validation failed",
        ProfileError::UnknownValue(_) => "Invalid value",
        ProfileError::EmptyInterests => "Missing interests",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_labels() {
        assert_eq!(error_label(&ProfileError::EmptyInterests), "Missing interests");
        assert_eq!(
            error_label(&ProfileError::Validation("age".to_string())),
            "Validation failed"
        );
    }
}
