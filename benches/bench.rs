// Criterion benchmarks for Travel Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use travel_match::core::{build_summary, evaluate_profile, score_category, Catalog};
use travel_match::models::{
    FitnessLevel, IncomeLevel, RiskTolerance, TravelGroup, TravelerProfile, TripDuration,
};

const INTERESTS: [&str; 8] = [
    "adventure",
    "nature",
    "history",
    "art",
    "gastronomy",
    "relax",
    "photography",
    "sea",
];
const LANGUAGES: [&str; 5] = ["italian", "english", "spanish", "french", "japanese"];

fn create_profile(id: usize) -> TravelerProfile {
    let tags = |pool: &[&str], n: usize| -> Vec<String> {
        pool.iter()
            .cycle()
            .skip(id % pool.len())
            .take(n)
            .map(|tag| tag.to_string())
            .collect()
    };

    TravelerProfile {
        age: 18 + (id % 60) as u32,
        income: [
            IncomeLevel::VeryLow,
            IncomeLevel::Low,
            IncomeLevel::High,
            IncomeLevel::VeryHigh,
        ][id % 4],
        risk_tolerance: [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High][id % 3],
        fitness_level: [
            FitnessLevel::Sedentary,
            FitnessLevel::Moderate,
            FitnessLevel::Active,
            FitnessLevel::Athletic,
        ][(id / 2) % 4],
        interests: tags(&INTERESTS, 1 + id % 4),
        languages: tags(&LANGUAGES, 1 + id % 3),
        trip_duration: [
            TripDuration::Weekend,
            TripDuration::OneWeek,
            TripDuration::TwoWeeks,
            TripDuration::MonthOrMore,
        ][(id / 3) % 4],
        travel_group: [
            TravelGroup::Solo,
            TravelGroup::Couple,
            TravelGroup::Friends,
            TravelGroup::FamilyWithChildren,
            TravelGroup::FamilyAdults,
        ][id % 5],
    }
}

fn bench_score_category(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let profile = create_profile(7);

    let mut group = c.benchmark_group("score_category");

    for category in catalog.categories.iter().take(3) {
        group.bench_with_input(
            BenchmarkId::from_parameter(&category.name),
            category,
            |b, category| {
                b.iter(|| score_category(black_box(category), black_box(&profile)));
            },
        );
    }

    group.finish();
}

fn bench_evaluate_profile(c: &mut Criterion) {
    let profile = create_profile(0);

    c.bench_function("evaluate_profile", |b| {
        b.iter(|| evaluate_profile(black_box(&profile)));
    });
}

fn bench_build_summary(c: &mut Criterion) {
    let profile = create_profile(11);

    c.bench_function("build_summary", |b| {
        b.iter(|| build_summary(black_box(&profile)));
    });
}

fn bench_evaluation_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation_batch");

    for profile_count in [10, 100, 1000].iter() {
        let profiles: Vec<TravelerProfile> = (0..*profile_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("evaluate_profiles", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|profile| evaluate_profile(black_box(profile)))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_category,
    bench_evaluate_profile,
    bench_build_summary,
    bench_evaluation_batch
);

criterion_main!(benches);
