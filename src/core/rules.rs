use crate::models::{TravelGroup, TravelerProfile};
use serde::Serialize;

/// Language every catalog category treats as a universal fallback
pub const BRIDGE_LANGUAGE: &str = "english";

/// Reward granted by a duration rule when the trip is long enough
const DURATION_REWARD: i32 = 10;
/// Penalty applied by a duration rule when the trip is far too short
const DURATION_PENALTY: i32 = -15;
const GROUP_REWARD: i32 = 10;
const GROUP_PENALTY: i32 = -10;
const LANGUAGE_REWARD: i32 = 8;
const LANGUAGE_FALLBACK_REWARD: i32 = 3;

/// What a single rule contributes to a category for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    #[serde(rename = "scoreDelta")]
    pub score_delta: i32,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Static outcome template stored in the catalog
///
/// Texts may contain `{matched}` (matched tags joined with `/`) and `{count}`
/// (number of matched tags); only membership rules fill them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub delta: i32,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

impl Outcome {
    /// Favorable contribution with an explanation
    pub fn reward(delta: i32, reason: &str) -> Self {
        Self {
            delta,
            reasons: vec![reason.to_string()],
            warnings: Vec::new(),
        }
    }

    /// Contribution without any message
    pub fn plain(delta: i32) -> Self {
        Self {
            delta,
            reasons: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Contribution flagged with a caution, whatever the sign of `delta`
    pub fn warn(delta: i32, warning: &str) -> Self {
        Self {
            delta,
            reasons: Vec::new(),
            warnings: vec![warning.to_string()],
        }
    }

    fn render(&self, matched: &[&str]) -> RuleOutcome {
        let fill = |text: &String| {
            if text.contains('{') {
                text.replace("{matched}", &matched.join("/"))
                    .replace("{count}", &matched.len().to_string())
            } else {
                text.clone()
            }
        };

        RuleOutcome {
            score_delta: self.delta,
            reasons: self.reasons.iter().map(fill).collect(),
            warnings: self.warnings.iter().map(fill).collect(),
        }
    }
}

/// Numeric view of a profile attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Age,
    Fitness,
    Income,
    Risk,
    DurationDays,
}

impl Metric {
    pub fn read(self, profile: &TravelerProfile) -> u32 {
        match self {
            Metric::Age => profile.age,
            Metric::Fitness => profile.fitness_level.rank(),
            Metric::Income => profile.income.rank(),
            Metric::Risk => profile.risk_tolerance.rank(),
            Metric::DurationDays => profile.trip_duration.days(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "op", content = "value")]
pub enum Cutoff {
    AtLeast(u32),
    AtMost(u32),
    Below(u32),
    Exactly(u32),
}

impl Cutoff {
    #[inline]
    pub fn admits(self, value: u32) -> bool {
        match self {
            Cutoff::AtLeast(limit) => value >= limit,
            Cutoff::AtMost(limit) => value <= limit,
            Cutoff::Below(limit) => value < limit,
            Cutoff::Exactly(limit) => value == limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Check {
    pub metric: Metric,
    pub cutoff: Cutoff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdTier {
    /// All checks must pass for the tier to apply
    pub checks: Vec<Check>,
    pub outcome: Outcome,
}

/// Ordered numeric tiers; the first tier whose checks all pass wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdRule {
    pub name: String,
    pub tiers: Vec<ThresholdTier>,
    pub otherwise: Outcome,
}

impl ThresholdRule {
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        self.tiers
            .iter()
            .find(|tier| {
                tier.checks
                    .iter()
                    .all(|check| check.cutoff.admits(check.metric.read(profile)))
            })
            .map(|tier| &tier.outcome)
            .unwrap_or(&self.otherwise)
            .render(&[])
    }
}

/// Tag list of the profile a membership rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagField {
    Interests,
    Languages,
    TravelGroup,
}

impl TagField {
    fn tags<'p>(self, profile: &'p TravelerProfile) -> Vec<&'p str> {
        match self {
            TagField::Interests => profile.interests.iter().map(String::as_str).collect(),
            TagField::Languages => profile.languages.iter().map(String::as_str).collect(),
            TagField::TravelGroup => vec![profile.travel_group.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "tags")]
pub enum Pool {
    /// Every tag the profile carries counts as a match
    Any,
    OneOf(Vec<String>),
}

impl Pool {
    /// Distinct matched tags, in pool order for fixed pools and profile order otherwise
    fn matches<'a>(&'a self, tags: &[&'a str]) -> Vec<&'a str> {
        match self {
            Pool::Any => {
                let mut distinct: Vec<&str> = Vec::with_capacity(tags.len());
                for &tag in tags {
                    if !distinct.contains(&tag) {
                        distinct.push(tag);
                    }
                }
                distinct
            }
            Pool::OneOf(pool) => pool
                .iter()
                .map(String::as_str)
                .filter(|wanted| tags.contains(wanted))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipTier {
    pub pool: Pool,
    #[serde(rename = "atLeast")]
    pub at_least: usize,
    pub outcome: Outcome,
}

/// Ordered set-intersection tiers over one tag field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipRule {
    pub name: String,
    pub field: TagField,
    pub tiers: Vec<MembershipTier>,
    pub otherwise: Outcome,
}

impl MembershipRule {
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        let tags = self.field.tags(profile);

        for tier in &self.tiers {
            let matched = tier.pool.matches(&tags);
            if !matched.is_empty() && matched.len() >= tier.at_least {
                return tier.outcome.render(&matched);
            }
        }

        self.otherwise.render(&[])
    }
}

/// Rewards trips long enough for the category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationRule {
    #[serde(rename = "minDays")]
    pub min_days: u32,
    pub label: String,
}

impl DurationRule {
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        let days = profile.trip_duration.days();

        if days >= self.min_days {
            return Outcome::reward(
                DURATION_REWARD,
                &format!("Trip length suits {}", self.label),
            )
            .render(&[]);
        }

        // days >= 0.6 * min_days, kept in integers
        if days * 5 >= self.min_days * 3 {
            return Outcome::warn(
                0,
                &format!("Borderline trip length: {} in a reduced version", self.label),
            )
            .render(&[]);
        }

        Outcome::warn(
            DURATION_PENALTY,
            &format!(
                "Trip too short for {} (at least ~{} days)",
                self.label, self.min_days
            ),
        )
        .render(&[])
    }
}

/// Rewards or penalizes the travel group; unlisted groups are neutral
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRule {
    pub good: Vec<TravelGroup>,
    pub bad: Vec<TravelGroup>,
    pub warning: String,
}

impl GroupRule {
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        let group = profile.travel_group;

        if self.bad.contains(&group) {
            return Outcome::warn(GROUP_PENALTY, &self.warning).render(&[]);
        }
        if self.good.contains(&group) {
            return Outcome::reward(GROUP_REWARD, &format!("Ideal for {group}")).render(&[]);
        }

        RuleOutcome::default()
    }
}

/// Rewards speaking a language that helps on the ground
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRule {
    pub helpful: Vec<String>,
    pub label: String,
}

impl LanguageRule {
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        if profile.speaks(&self.helpful) {
            return Outcome::reward(
                LANGUAGE_REWARD,
                &format!("You speak {}: a big advantage", self.label),
            )
            .render(&[]);
        }

        let bridge = profile.languages.iter().any(|lang| lang == BRIDGE_LANGUAGE);
        if bridge || profile.language_count() >= 2 {
            return Outcome::reward(
                LANGUAGE_FALLBACK_REWARD,
                "English or a second language opens doors everywhere",
            )
            .render(&[]);
        }

        Outcome::warn(
            0,
            &format!("Knowing {} would make this experience much easier", self.label),
        )
        .render(&[])
    }
}

/// Introspection tag for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Fixed,
    Threshold,
    Membership,
    Duration,
    Group,
    Language,
}

/// A single scoring rule of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rule {
    Fixed { name: String, outcome: Outcome },
    Threshold(ThresholdRule),
    Membership(MembershipRule),
    Duration(DurationRule),
    Group(GroupRule),
    Language(LanguageRule),
}

impl Rule {
    pub fn fixed(name: &str, outcome: Outcome) -> Self {
        Rule::Fixed {
            name: name.to_string(),
            outcome,
        }
    }

    pub fn threshold(name: &str) -> ThresholdBuilder {
        ThresholdBuilder {
            name: name.to_string(),
            tiers: Vec::new(),
        }
    }

    pub fn interests(name: &str) -> MembershipBuilder {
        MembershipBuilder::new(name, TagField::Interests)
    }

    pub fn languages(name: &str) -> MembershipBuilder {
        MembershipBuilder::new(name, TagField::Languages)
    }

    pub fn travel_group(name: &str) -> MembershipBuilder {
        MembershipBuilder::new(name, TagField::TravelGroup)
    }

    pub fn duration(min_days: u32, label: &str) -> Self {
        Rule::Duration(DurationRule {
            min_days,
            label: label.to_string(),
        })
    }

    pub fn group(good: &[TravelGroup], bad: &[TravelGroup], warning: &str) -> Self {
        Rule::Group(GroupRule {
            good: good.to_vec(),
            bad: bad.to_vec(),
            warning: warning.to_string(),
        })
    }

    pub fn language(helpful: &[&str], label: &str) -> Self {
        Rule::Language(LanguageRule {
            helpful: to_tags(helpful),
            label: label.to_string(),
        })
    }

    /// Display name, used for tracing only
    pub fn name(&self) -> &str {
        match self {
            Rule::Fixed { name, .. } => name,
            Rule::Threshold(rule) => &rule.name,
            Rule::Membership(rule) => &rule.name,
            Rule::Duration(_) => "Trip duration",
            Rule::Group(_) => "Group composition",
            Rule::Language(_) => "Spoken languages",
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Fixed { .. } => RuleKind::Fixed,
            Rule::Threshold(_) => RuleKind::Threshold,
            Rule::Membership(_) => RuleKind::Membership,
            Rule::Duration(_) => RuleKind::Duration,
            Rule::Group(_) => RuleKind::Group,
            Rule::Language(_) => RuleKind::Language,
        }
    }

    /// Run the rule against a profile. Pure and total.
    pub fn evaluate(&self, profile: &TravelerProfile) -> RuleOutcome {
        let outcome = match self {
            Rule::Fixed { outcome, .. } => outcome.render(&[]),
            Rule::Threshold(rule) => rule.evaluate(profile),
            Rule::Membership(rule) => rule.evaluate(profile),
            Rule::Duration(rule) => rule.evaluate(profile),
            Rule::Group(rule) => rule.evaluate(profile),
            Rule::Language(rule) => rule.evaluate(profile),
        };

        tracing::trace!(
            "rule '{}' ({:?}) -> {:+}",
            self.name(),
            self.kind(),
            outcome.score_delta
        );

        outcome
    }
}

fn to_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

pub struct ThresholdBuilder {
    name: String,
    tiers: Vec<ThresholdTier>,
}

impl ThresholdBuilder {
    pub fn when(self, metric: Metric, cutoff: Cutoff, outcome: Outcome) -> Self {
        self.when_all(&[(metric, cutoff)], outcome)
    }

    pub fn when_all(mut self, checks: &[(Metric, Cutoff)], outcome: Outcome) -> Self {
        self.tiers.push(ThresholdTier {
            checks: checks
                .iter()
                .map(|&(metric, cutoff)| Check { metric, cutoff })
                .collect(),
            outcome,
        });
        self
    }

    pub fn otherwise(self, outcome: Outcome) -> Rule {
        Rule::Threshold(ThresholdRule {
            name: self.name,
            tiers: self.tiers,
            otherwise: outcome,
        })
    }
}

pub struct MembershipBuilder {
    name: String,
    field: TagField,
    tiers: Vec<MembershipTier>,
}

impl MembershipBuilder {
    fn new(name: &str, field: TagField) -> Self {
        Self {
            name: name.to_string(),
            field,
            tiers: Vec::new(),
        }
    }

    /// Tier that applies when at least one tag of `pool` is present
    pub fn any_of(self, pool: &[&str], outcome: Outcome) -> Self {
        self.at_least(Pool::OneOf(to_tags(pool)), 1, outcome)
    }

    pub fn at_least(mut self, pool: Pool, count: usize, outcome: Outcome) -> Self {
        self.tiers.push(MembershipTier {
            pool,
            at_least: count,
            outcome,
        });
        self
    }

    pub fn group(self, group: TravelGroup, outcome: Outcome) -> Self {
        self.any_of(&[group.as_str()], outcome)
    }

    pub fn otherwise(self, outcome: Outcome) -> Rule {
        Rule::Membership(MembershipRule {
            name: self.name,
            field: self.field,
            tiers: self.tiers,
            otherwise: outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, IncomeLevel, RiskTolerance, TripDuration};

    fn create_test_profile(trip_duration: TripDuration, languages: &[&str]) -> TravelerProfile {
        TravelerProfile {
            age: 30,
            income: IncomeLevel::Low,
            risk_tolerance: RiskTolerance::Medium,
            fitness_level: FitnessLevel::Moderate,
            interests: vec!["nature".to_string()],
            languages: to_tags(languages),
            trip_duration,
            travel_group: TravelGroup::Solo,
        }
    }

    #[test]
    fn test_duration_reward_at_threshold() {
        let rule = Rule::duration(12, "long trips");
        let outcome = rule.evaluate(&create_test_profile(TripDuration::TwoWeeks, &["italian"]));

        assert_eq!(outcome.score_delta, 10);
        assert_eq!(outcome.reasons, vec!["Trip length suits long trips"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_duration_neutral_at_sixty_percent() {
        // 6 days is exactly 0.6 * 10
        let rule = Rule::duration(10, "expeditions");
        let outcome = rule.evaluate(&create_test_profile(TripDuration::OneWeek, &["italian"]));

        assert_eq!(outcome.score_delta, 0);
        assert!(outcome.reasons.is_empty());
        assert_eq!(
            outcome.warnings,
            vec!["Borderline trip length: expeditions in a reduced version"]
        );
    }

    #[test]
    fn test_duration_penalty_below_sixty_percent() {
        let rule = Rule::duration(10, "expeditions");
        let outcome = rule.evaluate(&create_test_profile(TripDuration::Weekend, &["italian"]));

        assert_eq!(outcome.score_delta, -15);
        assert_eq!(
            outcome.warnings,
            vec!["Trip too short for expeditions (at least ~10 days)"]
        );
    }

    #[test]
    fn test_group_rule_tiers() {
        let rule = Rule::group(
            &[TravelGroup::Solo],
            &[TravelGroup::FamilyWithChildren],
            "Not for kids",
        );
        let mut profile = create_test_profile(TripDuration::OneWeek, &["italian"]);

        let good = rule.evaluate(&profile);
        assert_eq!(good.score_delta, 10);
        assert_eq!(good.reasons, vec!["Ideal for solo"]);

        profile.travel_group = TravelGroup::FamilyWithChildren;
        let bad = rule.evaluate(&profile);
        assert_eq!(bad.score_delta, -10);
        assert_eq!(bad.warnings, vec!["Not for kids"]);

        profile.travel_group = TravelGroup::Couple;
        assert_eq!(rule.evaluate(&profile), RuleOutcome::default());
    }

    #[test]
    fn test_language_rule_fallback_chain() {
        let rule = Rule::language(&["spanish"], "Spanish");

        let helpful = rule.evaluate(&create_test_profile(TripDuration::OneWeek, &["spanish"]));
        assert_eq!(helpful.score_delta, 8);

        let bridge = rule.evaluate(&create_test_profile(TripDuration::OneWeek, &["english"]));
        assert_eq!(bridge.score_delta, 3);

        let two = rule.evaluate(&create_test_profile(
            TripDuration::OneWeek,
            &["italian", "german"],
        ));
        assert_eq!(two.score_delta, 3);
        assert!(two.reasons.iter().all(|r| !r.contains("Spanish")));
        assert!(two.warnings.is_empty());

        let none = rule.evaluate(&create_test_profile(TripDuration::OneWeek, &["italian"]));
        assert_eq!(none.score_delta, 0);
        assert!(none.reasons.is_empty());
        assert_eq!(none.warnings.len(), 1);
    }

    #[test]
    fn test_threshold_first_matching_tier_wins() {
        let rule = Rule::threshold("Age")
            .when(Metric::Age, Cutoff::Below(18), Outcome::warn(-50, "too young"))
            .when(Metric::Age, Cutoff::AtMost(40), Outcome::reward(10, "ideal"))
            .otherwise(Outcome::plain(0));

        let mut profile = create_test_profile(TripDuration::OneWeek, &["italian"]);
        profile.age = 17;
        assert_eq!(rule.evaluate(&profile).score_delta, -50);
        profile.age = 40;
        assert_eq!(rule.evaluate(&profile).score_delta, 10);
        profile.age = 41;
        assert_eq!(rule.evaluate(&profile).score_delta, 0);
    }

    #[test]
    fn test_threshold_combined_checks() {
        let rule = Rule::threshold("Comfort")
            .when_all(
                &[
                    (Metric::Age, Cutoff::AtLeast(50)),
                    (Metric::Fitness, Cutoff::AtMost(2)),
                ],
                Outcome::reward(15, "comfort"),
            )
            .otherwise(Outcome::plain(5));

        let mut profile = create_test_profile(TripDuration::OneWeek, &["italian"]);
        assert_eq!(rule.evaluate(&profile).score_delta, 5);
        profile.age = 60;
        assert_eq!(rule.evaluate(&profile).score_delta, 15);
        profile.fitness_level = FitnessLevel::Active;
        assert_eq!(rule.evaluate(&profile).score_delta, 5);
    }

    #[test]
    fn test_membership_fills_matched_and_count() {
        let rule = Rule::languages("Languages")
            .at_least(Pool::Any, 3, Outcome::reward(12, "You speak {count} languages"))
            .any_of(&["french", "spanish"], Outcome::reward(10, "You speak {matched}"))
            .otherwise(Outcome::warn(-3, "language barrier"));

        let three = create_test_profile(TripDuration::OneWeek, &["italian", "german", "dutch"]);
        assert_eq!(rule.evaluate(&three).reasons, vec!["You speak 3 languages"]);

        // Pool order, not profile order
        let two = create_test_profile(TripDuration::OneWeek, &["spanish", "french"]);
        assert_eq!(rule.evaluate(&two).reasons, vec!["You speak french/spanish"]);

        let none = create_test_profile(TripDuration::OneWeek, &["italian"]);
        let outcome = rule.evaluate(&none);
        assert_eq!(outcome.score_delta, -3);
        assert_eq!(outcome.warnings, vec!["language barrier"]);
    }

    #[test]
    fn test_repeated_tags_count_once() {
        let rule = Rule::languages("Languages")
            .at_least(Pool::Any, 3, Outcome::reward(12, "You speak {count} languages"))
            .otherwise(Outcome::warn(-3, "language barrier"));
        let profile = create_test_profile(
            TripDuration::OneWeek,
            &["italian", "italian", "italian"],
        );

        let outcome = rule.evaluate(&profile);

        assert_eq!(outcome.score_delta, -3);
        assert_eq!(outcome.warnings, vec!["language barrier"]);
    }

    #[test]
    fn test_membership_minimum_matches() {
        let rule = Rule::interests("Interests")
            .at_least(
                Pool::OneOf(to_tags(&["history", "art", "relax"])),
                2,
                Outcome::reward(25, "many"),
            )
            .otherwise(Outcome::plain(5));

        let mut profile = create_test_profile(TripDuration::OneWeek, &["italian"]);
        profile.interests = to_tags(&["history"]);
        assert_eq!(rule.evaluate(&profile).score_delta, 5);
        profile.interests = to_tags(&["history", "relax"]);
        assert_eq!(rule.evaluate(&profile).score_delta, 25);
    }

    #[test]
    fn test_rule_kind_and_name() {
        assert_eq!(Rule::duration(4, "x").kind(), RuleKind::Duration);
        assert_eq!(Rule::fixed("Budget", Outcome::plain(1)).name(), "Budget");
        assert_eq!(
            Rule::travel_group("Group")
                .group(TravelGroup::Couple, Outcome::plain(8))
                .otherwise(Outcome::plain(5))
                .kind(),
            RuleKind::Membership
        );
    }
}
