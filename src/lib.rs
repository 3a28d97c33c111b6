//! Travel Match - rule-based matching of traveler profiles to travel categories
//!
//! This library provides the evaluator used by the travel match service.
//! A static, versioned catalog of categories is scored rule by rule against a
//! profile, clamped, ranked and summarized.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{build_summary, evaluate_profile, Catalog, Evaluator};
pub use models::{CategoryMatch, EvaluateRequest, EvaluationResult, TravelerProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(Catalog::builtin().len(), Evaluator::builtin().catalog().len());
    }
}
