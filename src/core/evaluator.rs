use crate::core::{aggregator::score_category, catalog::Catalog, summary::build_summary};
use crate::models::{CategoryMatch, EvaluationResult, TravelerProfile};

/// Number of categories reported as top matches
pub const TOP_MATCHES: usize = 5;

/// Ranks every catalog category for a profile
///
/// # Pipeline Stages
/// 1. Rule evaluation (per category, per rule)
/// 2. Aggregation and clamping (per category)
/// 3. Stable ranking across categories
/// 4. Profile summary
///
/// Holds only a shared reference to an immutable catalog.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Evaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Evaluate a profile against every category of the catalog
    ///
    /// Equal scores keep catalog declaration order.
    pub fn evaluate(&self, profile: &TravelerProfile) -> EvaluationResult {
        let mut all_matches: Vec<CategoryMatch> = self
            .catalog
            .categories
            .iter()
            .map(|category| score_category(category, profile))
            .collect();

        // `sort_by` is stable: ties stay in declaration order
        all_matches.sort_by(|a, b| b.score.cmp(&a.score));

        let top_matches: Vec<CategoryMatch> =
            all_matches.iter().take(TOP_MATCHES).cloned().collect();

        if let Some(best) = top_matches.first() {
            tracing::debug!(
                "Best match '{}' ({}) out of {} categories",
                best.category,
                best.score,
                all_matches.len()
            );
        }

        EvaluationResult {
            profile: profile.clone(),
            top_matches,
            all_matches,
            profile_summary: build_summary(profile),
        }
    }
}

impl Evaluator<'static> {
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Evaluate a profile against the built-in catalog
pub fn evaluate_profile(profile: &TravelerProfile) -> EvaluationResult {
    Evaluator::builtin().evaluate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CategoryDefinition;
    use crate::core::rules::{Outcome, Rule};
    use crate::models::{FitnessLevel, IncomeLevel, RiskTolerance, TravelGroup, TripDuration};

    fn create_test_profile() -> TravelerProfile {
        TravelerProfile {
            age: 34,
            income: IncomeLevel::Low,
            risk_tolerance: RiskTolerance::Medium,
            fitness_level: FitnessLevel::Moderate,
            interests: vec!["history".to_string()],
            languages: vec!["italian".to_string()],
            trip_duration: TripDuration::OneWeek,
            travel_group: TravelGroup::Couple,
        }
    }

    fn fixed_category(name: &str, score: i32) -> CategoryDefinition {
        CategoryDefinition::new(name, &[], vec![Rule::fixed("Fixed", Outcome::plain(score))])
    }

    #[test]
    fn test_evaluate_builtin() {
        let result = evaluate_profile(&create_test_profile());

        assert_eq!(result.all_matches.len(), 11);
        assert_eq!(result.top_matches.len(), TOP_MATCHES);
        assert_eq!(result.top_matches[..], result.all_matches[..TOP_MATCHES]);
        assert_eq!(result.profile, create_test_profile());
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let result = evaluate_profile(&create_test_profile());

        for pair in result.all_matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(
            "test",
            vec![
                fixed_category("Low", 10),
                fixed_category("First tie", 50),
                fixed_category("Second tie", 50),
                fixed_category("High", 90),
            ],
        );

        let result = Evaluator::new(&catalog).evaluate(&create_test_profile());
        let order: Vec<&str> = result
            .all_matches
            .iter()
            .map(|m| m.category.as_str())
            .collect();

        assert_eq!(order, vec!["High", "First tie", "Second tie", "Low"]);
    }

    #[test]
    fn test_small_catalog_top_matches_is_whole_list() {
        let catalog = Catalog::new(
            "test",
            vec![fixed_category("A", 10), fixed_category("B", 20)],
        );

        let result = Evaluator::new(&catalog).evaluate(&create_test_profile());

        assert_eq!(result.top_matches.len(), 2);
        assert_eq!(result.top_matches, result.all_matches);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new("empty", vec![]);
        let result = Evaluator::new(&catalog).evaluate(&create_test_profile());

        assert!(result.all_matches.is_empty());
        assert!(result.top_matches.is_empty());
        assert!(!result.profile_summary.is_empty());
    }
}
