use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A token that does not belong to one of the fixed profile enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} value: '{value}'")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

/// Lower-case, trim and unify separators so `Two_Weeks` and `two weeks` parse alike
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Declared income bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeLevel {
    VeryLow,
    Low,
    High,
    VeryHigh,
}

impl IncomeLevel {
    /// Ordinal rank (1-4) used for threshold comparisons
    pub fn rank(self) -> u32 {
        match self {
            IncomeLevel::VeryLow => 1,
            IncomeLevel::Low => 2,
            IncomeLevel::High => 3,
            IncomeLevel::VeryHigh => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeLevel::VeryLow => "very-low",
            IncomeLevel::Low => "low",
            IncomeLevel::High => "high",
            IncomeLevel::VeryHigh => "very-high",
        }
    }
}

impl FromStr for IncomeLevel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "very-low" => Ok(IncomeLevel::VeryLow),
            "low" => Ok(IncomeLevel::Low),
            "high" => Ok(IncomeLevel::High),
            "very-high" => Ok(IncomeLevel::VeryHigh),
            _ => Err(UnknownValue {
                field: "income",
                value: s.to_string(),
            }),
        }
    }
}

/// How much uncertainty the traveler accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Ordinal rank (1-3) used for threshold comparisons
    pub fn rank(self) -> u32 {
        match self {
            RiskTolerance::Low => 1,
            RiskTolerance::Medium => 2,
            RiskTolerance::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(UnknownValue {
                field: "riskTolerance",
                value: s.to_string(),
            }),
        }
    }
}

/// Self-reported physical fitness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    Sedentary,
    Moderate,
    Active,
    Athletic,
}

impl FitnessLevel {
    /// Ordinal rank (1-4) used for threshold comparisons
    pub fn rank(self) -> u32 {
        match self {
            FitnessLevel::Sedentary => 1,
            FitnessLevel::Moderate => 2,
            FitnessLevel::Active => 3,
            FitnessLevel::Athletic => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FitnessLevel::Sedentary => "sedentary",
            FitnessLevel::Moderate => "moderate",
            FitnessLevel::Active => "active",
            FitnessLevel::Athletic => "athletic",
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "sedentary" => Ok(FitnessLevel::Sedentary),
            "moderate" => Ok(FitnessLevel::Moderate),
            "active" => Ok(FitnessLevel::Active),
            "athletic" => Ok(FitnessLevel::Athletic),
            _ => Err(UnknownValue {
                field: "fitnessLevel",
                value: s.to_string(),
            }),
        }
    }
}

/// Planned trip length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripDuration {
    Weekend,
    OneWeek,
    TwoWeeks,
    MonthOrMore,
}

impl TripDuration {
    /// Approximate day count, only meaningful for threshold comparisons
    pub fn days(self) -> u32 {
        match self {
            TripDuration::Weekend => 2,
            TripDuration::OneWeek => 6,
            TripDuration::TwoWeeks => 12,
            TripDuration::MonthOrMore => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TripDuration::Weekend => "weekend",
            TripDuration::OneWeek => "one-week",
            TripDuration::TwoWeeks => "two-weeks",
            TripDuration::MonthOrMore => "month-or-more",
        }
    }
}

impl FromStr for TripDuration {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "weekend" => Ok(TripDuration::Weekend),
            "one-week" => Ok(TripDuration::OneWeek),
            "two-weeks" => Ok(TripDuration::TwoWeeks),
            "month-or-more" => Ok(TripDuration::MonthOrMore),
            _ => Err(UnknownValue {
                field: "tripDuration",
                value: s.to_string(),
            }),
        }
    }
}

/// Who the traveler is going with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelGroup {
    Solo,
    Couple,
    Friends,
    FamilyWithChildren,
    FamilyAdults,
}

impl TravelGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelGroup::Solo => "solo",
            TravelGroup::Couple => "couple",
            TravelGroup::Friends => "friends",
            TravelGroup::FamilyWithChildren => "family-with-children",
            TravelGroup::FamilyAdults => "family-adults",
        }
    }
}

impl fmt::Display for TravelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelGroup {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "solo" => Ok(TravelGroup::Solo),
            "couple" => Ok(TravelGroup::Couple),
            "friends" => Ok(TravelGroup::Friends),
            "family-with-children" => Ok(TravelGroup::FamilyWithChildren),
            "family-adults" => Ok(TravelGroup::FamilyAdults),
            _ => Err(UnknownValue {
                field: "travelGroup",
                value: s.to_string(),
            }),
        }
    }
}

/// Validated traveler profile, the sole input of the evaluator
///
/// `interests` and `languages` are lower-case, de-duplicated tag lists in the
/// order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub age: u32,
    pub income: IncomeLevel,
    #[serde(rename = "riskTolerance")]
    pub risk_tolerance: RiskTolerance,
    #[serde(rename = "fitnessLevel")]
    pub fitness_level: FitnessLevel,
    pub interests: Vec<String>,
    pub languages: Vec<String>,
    #[serde(rename = "tripDuration")]
    pub trip_duration: TripDuration,
    #[serde(rename = "travelGroup")]
    pub travel_group: TravelGroup,
}

impl TravelerProfile {
    pub fn speaks(&self, any_of: &[String]) -> bool {
        any_of.iter().any(|tag| self.languages.contains(tag))
    }

    /// Number of distinct languages spoken
    pub fn language_count(&self) -> usize {
        self.languages
            .iter()
            .enumerate()
            .filter(|(i, lang)| !self.languages[..*i].contains(*lang))
            .count()
    }
}

/// Score of one category for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(rename = "exampleDestinations")]
    pub example_destinations: Vec<String>,
}

/// Ranked evaluation of every catalog category for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub profile: TravelerProfile,
    #[serde(rename = "topMatches")]
    pub top_matches: Vec<CategoryMatch>,
    #[serde(rename = "allMatches")]
    pub all_matches: Vec<CategoryMatch>,
    #[serde(rename = "profileSummary")]
    pub profile_summary: String,
}
