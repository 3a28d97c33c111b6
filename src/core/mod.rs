// Core algorithm exports
pub mod aggregator;
pub mod catalog;
pub mod evaluator;
pub mod rules;
pub mod summary;

pub use aggregator::score_category;
pub use catalog::{Catalog, CategoryDefinition, CATALOG_VERSION};
pub use evaluator::{evaluate_profile, Evaluator, TOP_MATCHES};
pub use rules::{Rule, RuleKind, RuleOutcome};
pub use summary::build_summary;
