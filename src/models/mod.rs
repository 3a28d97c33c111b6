// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CategoryMatch, EvaluationResult, FitnessLevel, IncomeLevel, RiskTolerance, TravelGroup,
    TravelerProfile, TripDuration, UnknownValue,
};
pub use requests::{AgeInput, EvaluateRequest, ProfileError, DEFAULT_LANGUAGE, MAX_AGE};
pub use responses::{CatalogResponse, ErrorResponse, EvaluateResponse, HealthResponse};
