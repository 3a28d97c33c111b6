use crate::models::domain::{TravelerProfile, UnknownValue};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

/// Language assumed when the caller does not send any
pub const DEFAULT_LANGUAGE: &str = "italian";

/// Oldest accepted traveler age
pub const MAX_AGE: u32 = 120;

/// Reasons a request cannot become a `TravelerProfile`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    UnknownValue(#[from] UnknownValue),

    #[error("at least one interest is required")]
    EmptyInterests,
}

/// Raw traveler profile as posted by clients
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateRequest {
    pub age: AgeInput,
    #[validate(length(min = 1))]
    pub income: String,
    #[validate(length(min = 1))]
    #[serde(alias = "risk_tolerance", rename = "riskTolerance")]
    pub risk_tolerance: String,
    #[validate(length(min = 1))]
    #[serde(alias = "fitness_level", rename = "fitnessLevel")]
    pub fitness_level: String,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "one_or_many")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub languages: Option<Vec<String>>,
    #[validate(length(min = 1))]
    #[serde(alias = "trip_duration", rename = "tripDuration")]
    pub trip_duration: String,
    #[validate(length(min = 1))]
    #[serde(alias = "travel_group", rename = "travelGroup")]
    pub travel_group: String,
}

impl EvaluateRequest {
    /// Validate and normalize into a profile the evaluator can trust
    ///
    /// Tags are trimmed, lower-cased, stripped of blanks and de-duplicated
    /// keeping first occurrence. Missing or empty `languages` fall back to
    /// `default_language`.
    pub fn into_profile(self, default_language: &str) -> Result<TravelerProfile, ProfileError> {
        self.validate()
            .map_err(|errors| ProfileError::Validation(errors.to_string()))?;

        let age = self.age.years().filter(|years| *years <= MAX_AGE).ok_or_else(|| {
            ProfileError::Validation(format!(
                "age: expected a whole number between 0 and {MAX_AGE}, got {}",
                self.age
            ))
        })?;

        let interests = normalize_tags(&self.interests);
        if interests.is_empty() {
            return Err(ProfileError::EmptyInterests);
        }

        let mut languages = normalize_tags(self.languages.as_deref().unwrap_or_default());
        if languages.is_empty() {
            languages = normalize_tags(&[default_language.to_string()]);
        }

        Ok(TravelerProfile {
            age,
            income: self.income.parse()?,
            risk_tolerance: self.risk_tolerance.parse()?,
            fitness_level: self.fitness_level.parse()?,
            interests,
            languages,
            trip_duration: self.trip_duration.parse()?,
            travel_group: self.travel_group.parse()?,
        })
    }
}

/// Age as sent by clients: a JSON number or a numeric string such as `"28"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Whole(i64),
    Text(String),
}

impl AgeInput {
    /// Age in whole years, `None` when negative or not a number
    pub fn years(&self) -> Option<u32> {
        match self {
            AgeInput::Whole(value) => u32::try_from(*value).ok(),
            AgeInput::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<u32> for AgeInput {
    fn from(years: u32) -> Self {
        AgeInput::Whole(i64::from(years))
    }
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeInput::Whole(value) => write!(f, "{value}"),
            AgeInput::Text(text) => write!(f, "'{text}'"),
        }
    }
}

fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(tag) => vec![tag],
            OneOrMany::Many(tags) => tags,
        }
    }
}

/// Accept `"nature"` as well as `["nature"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

fn optional_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<OneOrMany>::deserialize(deserializer).map(|value| value.map(Vec::from))
}
