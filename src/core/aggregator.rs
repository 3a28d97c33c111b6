use crate::core::catalog::CategoryDefinition;
use crate::models::{CategoryMatch, TravelerProfile};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Score one category for a profile
///
/// Every rule runs in catalog order, even after a disqualifying penalty.
/// The running total may leave `0..=100`; only the final score is clamped.
pub fn score_category(category: &CategoryDefinition, profile: &TravelerProfile) -> CategoryMatch {
    let mut total: i32 = 0;
    let mut reasons = Vec::new();
    let mut warnings = Vec::new();

    for rule in &category.rules {
        let outcome = rule.evaluate(profile);
        total += outcome.score_delta;
        reasons.extend(outcome.reasons);
        warnings.extend(outcome.warnings);
    }

    let score = clamp_score(total);

    tracing::debug!(
        "category '{}': raw {} -> score {} ({} reasons, {} warnings)",
        category.name,
        total,
        score,
        reasons.len(),
        warnings.len()
    );

    CategoryMatch {
        category: category.name.clone(),
        score,
        reasons,
        warnings,
        example_destinations: category.example_destinations.clone(),
    }
}

#[inline]
fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::{Cutoff, Metric, Outcome, Rule};
    use crate::models::{
        FitnessLevel, IncomeLevel, RiskTolerance, TravelGroup, TripDuration,
    };

    fn create_test_profile(age: u32) -> TravelerProfile {
        TravelerProfile {
            age,
            income: IncomeLevel::High,
            risk_tolerance: RiskTolerance::High,
            fitness_level: FitnessLevel::Athletic,
            interests: vec!["adventure".to_string()],
            languages: vec!["english".to_string()],
            trip_duration: TripDuration::TwoWeeks,
            travel_group: TravelGroup::Solo,
        }
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_score(-40), 0);
        assert_eq!(clamp_score(57), 57);
        assert_eq!(clamp_score(180), 100);
    }

    #[test]
    fn test_sums_and_concatenates_in_rule_order() {
        let category = CategoryDefinition::new(
            "Test",
            &["Somewhere"],
            vec![
                Rule::fixed("a", Outcome::reward(20, "first")),
                Rule::fixed("b", Outcome::warn(-5, "careful")),
                Rule::fixed("c", Outcome::reward(15, "second")),
            ],
        );

        let result = score_category(&category, &create_test_profile(30));

        assert_eq!(result.score, 30);
        assert_eq!(result.reasons, vec!["first", "second"]);
        assert_eq!(result.warnings, vec!["careful"]);
        assert_eq!(result.example_destinations, vec!["Somewhere"]);
    }

    #[test]
    fn test_over_hundred_is_clamped() {
        let category = CategoryDefinition::new(
            "Overflow",
            &[],
            vec![
                Rule::fixed("a", Outcome::plain(80)),
                Rule::fixed("b", Outcome::plain(80)),
            ],
        );

        assert_eq!(score_category(&category, &create_test_profile(30)).score, 100);
    }

    #[test]
    fn test_no_early_exit_after_disqualifying_penalty() {
        let category = CategoryDefinition::new(
            "Age gated",
            &[],
            vec![
                Rule::threshold("Age")
                    .when(Metric::Age, Cutoff::Below(18), Outcome::warn(-50, "too young"))
                    .otherwise(Outcome::plain(10)),
                Rule::fixed("after", Outcome::reward(5, "still evaluated")),
                Rule::duration(30, "long trips"),
            ],
        );

        let result = score_category(&category, &create_test_profile(12));

        assert_eq!(result.score, 0);
        assert_eq!(result.reasons, vec!["still evaluated"]);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0], "too young");
    }
}
