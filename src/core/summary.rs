use crate::models::{FitnessLevel, IncomeLevel, TravelGroup, TravelerProfile, TripDuration};

fn life_stage(age: u32) -> &'static str {
    match age {
        0..=24 => "young explorer",
        25..=39 => "traveler in the prime of life",
        40..=59 => "seasoned traveler",
        _ => "mature traveler",
    }
}

fn fitness_phrase(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Sedentary => "easy-going pace",
        FitnessLevel::Moderate => "good stamina",
        FitnessLevel::Active => "physically active",
        FitnessLevel::Athletic => "in excellent shape",
    }
}

fn budget_phrase(income: IncomeLevel) -> &'static str {
    match income {
        IncomeLevel::VeryLow => "tight budget",
        IncomeLevel::Low => "flexible budget",
        IncomeLevel::High => "comfortable budget",
        IncomeLevel::VeryHigh => "unlimited budget",
    }
}

fn companionship_phrase(group: TravelGroup) -> &'static str {
    match group {
        TravelGroup::Solo => "travelling solo",
        TravelGroup::Couple => "as a couple",
        TravelGroup::Friends => "with friends",
        TravelGroup::FamilyWithChildren => "with family and children",
        TravelGroup::FamilyAdults => "with family",
    }
}

fn duration_phrase(duration: TripDuration) -> &'static str {
    match duration {
        TripDuration::Weekend => "a weekend",
        TripDuration::OneWeek => "one week",
        TripDuration::TwoWeeks => "two weeks",
        TripDuration::MonthOrMore => "a month or more",
    }
}

fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-paragraph, four-sentence description of a profile
///
/// `"<Life stage>, <fitness>, <budget>. <Companionship> for <duration>.
/// Languages: <list>. Interests: <list>."`
pub fn build_summary(profile: &TravelerProfile) -> String {
    format!(
        "{}, {}, {}. {} for {}. Languages: {}. Interests: {}.",
        capitalize(life_stage(profile.age)),
        fitness_phrase(profile.fitness_level),
        budget_phrase(profile.income),
        capitalize(companionship_phrase(profile.travel_group)),
        duration_phrase(profile.trip_duration),
        profile.languages.join(", "),
        profile.interests.join(", "),
    )
}
