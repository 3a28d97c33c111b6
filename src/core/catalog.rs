use crate::core::rules::{Cutoff, Metric, Outcome, Pool, Rule};
use crate::models::TravelGroup::{Couple, FamilyAdults, FamilyWithChildren, Friends, Solo};
use serde::Serialize;
use std::sync::OnceLock;

/// Version of the built-in rule set, bumped whenever a weight or text changes
pub const CATALOG_VERSION: &str = "2.0";

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// One travel archetype with its scoring rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(rename = "exampleDestinations")]
    pub example_destinations: Vec<String>,
    pub rules: Vec<Rule>,
}

impl CategoryDefinition {
    pub fn new(name: &str, destinations: &[&str], rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            example_destinations: destinations.iter().map(|d| d.to_string()).collect(),
            rules,
        }
    }
}

/// Immutable, ordered collection of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub version: String,
    pub categories: Vec<CategoryDefinition>,
}

impl Catalog {
    pub fn new(version: &str, categories: Vec<CategoryDefinition>) -> Self {
        Self {
            version: version.to_string(),
            categories,
        }
    }

    /// The built-in catalog, constructed on first use and never mutated afterwards
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let catalog = Catalog::new(CATALOG_VERSION, builtin_categories());
            tracing::debug!(
                "Built-in catalog v{} loaded with {} categories",
                catalog.version,
                catalog.categories.len()
            );
            catalog
        })
    }

    pub fn get(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn builtin_categories() -> Vec<CategoryDefinition> {
    vec![
        extreme_adventure(),
        trekking_and_nature(),
        culture_and_history(),
        art_and_design(),
        food_and_wine(),
        relaxation_and_wellness(),
        safari_and_wildlife(),
        luxury_cruise(),
        backpacking(),
        surfing_and_water_sports(),
        nature_photography(),
    ]
}

fn extreme_adventure() -> CategoryDefinition {
    CategoryDefinition::new(
        "Extreme adventure",
        &["Patagonia", "Himalayas", "Antarctica", "Iceland volcanoes", "Congo Virunga"],
        vec![
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::AtLeast(3), Outcome::reward(40, "High risk tolerance!"))
                .when(
                    Metric::Risk,
                    Cutoff::Exactly(2),
                    Outcome::warn(10, "High risk could be stressful"),
                )
                .otherwise(Outcome::warn(-30, "Not recommended: risk is too high")),
            Rule::threshold("Fitness")
                .when(Metric::Fitness, Cutoff::AtLeast(3), Outcome::reward(35, "Excellent physical shape"))
                .when(
                    Metric::Fitness,
                    Cutoff::Exactly(2),
                    Outcome::warn(5, "Requires additional preparation"),
                )
                .otherwise(Outcome::warn(-20, "Insufficient physical fitness")),
            Rule::interests("Interest")
                .any_of(&["adventure"], Outcome::reward(20, "Adventure enthusiast"))
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Age")
                .when(Metric::Age, Cutoff::Below(18), Outcome::warn(-50, "Minimum age not reached"))
                .when(Metric::Age, Cutoff::AtMost(40), Outcome::reward(10, "Ideal age"))
                .when(
                    Metric::Age,
                    Cutoff::AtMost(55),
                    Outcome::warn(0, "Weigh your physical condition carefully"),
                )
                .otherwise(Outcome::warn(-10, "A medical check-up beforehand is advised")),
            Rule::threshold("Budget")
                .when(Metric::Income, Cutoff::AtLeast(3), Outcome::reward(5, "Adequate budget"))
                .otherwise(Outcome::warn(-5, "Significant costs")),
            Rule::duration(10, "extreme adventures"),
            Rule::group(
                &[Solo, Friends],
                &[FamilyWithChildren],
                "Extreme adventures are not recommended with children",
            ),
            Rule::language(
                &["english", "spanish", "portuguese"],
                "English/Spanish (essential for guides and permits)",
            ),
        ],
    )
}

fn trekking_and_nature() -> CategoryDefinition {
    CategoryDefinition::new(
        "Trekking and nature",
        &["Dolomites", "New Zealand", "Costa Rica", "Norwegian fjords", "Nepal"],
        vec![
            Rule::interests("Interest")
                .any_of(&["nature", "photography"], Outcome::reward(35, "You love nature"))
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Fitness")
                .when(Metric::Fitness, Cutoff::AtLeast(2), Outcome::reward(30, "Good shape for trekking"))
                .otherwise(Outcome::warn(-10, "Treks could be tiring")),
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::AtLeast(2), Outcome::reward(15, "Open to demanding trails"))
                .otherwise(Outcome::reward(5, "Easy treks are available")),
            Rule::fixed("Budget", Outcome::reward(20, "Affordable at any income level")),
            Rule::duration(4, "quality trekking"),
            Rule::group(
                &[Solo, Couple, Friends],
                &[FamilyWithChildren],
                "Demanding treks are not well suited to young children",
            ),
            Rule::language(&["english", "german"], "English/German"),
        ],
    )
}

fn culture_and_history() -> CategoryDefinition {
    CategoryDefinition::new(
        "Culture and history",
        &["Rome", "Athens", "Cairo", "Kyoto", "Petra", "Machu Picchu"],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["history", "art", "architecture"],
                    Outcome::reward(45, "Strong interest in culture"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::fixed("Fitness", Outcome::reward(20, "No demanding physical effort required")),
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::Exactly(1), Outcome::reward(20, "Safe destinations"))
                .otherwise(Outcome::plain(10)),
            Rule::threshold("Budget")
                .when(Metric::Income, Cutoff::AtLeast(2), Outcome::reward(15, "Budget for museums and tours"))
                .otherwise(Outcome::warn(5, "Some attractions charge admission")),
            Rule::duration(4, "cultural itineraries"),
            Rule::travel_group("Group")
                .group(Couple, Outcome::reward(8, "Perfect for a couple"))
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-5, "Pick kid-friendly attractions"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::languages("Languages")
                .any_of(
                    &["italian", "spanish", "french", "german", "arabic", "japanese"],
                    Outcome::reward(10, "You speak {matched}: deeper immersion"),
                )
                .any_of(
                    &["english"],
                    Outcome::reward(4, "English is enough at the main sites"),
                )
                .otherwise(Outcome::warn(-3, "Language barriers may limit the experience")),
        ],
    )
}

fn art_and_design() -> CategoryDefinition {
    CategoryDefinition::new(
        "Art and design",
        &["Berlin", "New York", "Milan", "Barcelona", "Paris", "Tokyo"],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["art", "architecture", "photography"],
                    Outcome::reward(50, "Passion for art and design"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::fixed("Accessibility", Outcome::reward(20, "Accessible at any age")),
            Rule::interests("Nightlife")
                .any_of(
                    &["nightlife"],
                    Outcome::reward(15, "Creative cities have lively nightlife"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Budget")
                .when(Metric::Income, Cutoff::AtLeast(2), Outcome::reward(15, "Budget for galleries and museums"))
                .otherwise(Outcome::warn(0, "Exclusive experiences need a bigger budget")),
            Rule::duration(2, "artistic city breaks"),
            Rule::travel_group("Group")
                .group(Couple, Outcome::reward(10, "Perfect for a couple"))
                .group(Friends, Outcome::reward(8, "Fun with friends"))
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-5, "Modern art museums are not always ideal with children"),
                )
                .otherwise(Outcome::plain(3)),
            Rule::language(
                &["english", "french", "german", "japanese"],
                "English/French (local art scenes)",
            ),
        ],
    )
}

fn food_and_wine() -> CategoryDefinition {
    CategoryDefinition::new(
        "Food and wine",
        &["Tuscany", "Lyon", "San Sebastián", "Japan", "Mexico", "Peru"],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["gastronomy"],
                    Outcome::reward(55, "Food is at the heart of your interests!"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::interests("Culture")
                .any_of(
                    &["history", "art"],
                    Outcome::reward(15, "Food destinations offer culture too"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Budget")
                .when(
                    Metric::Income,
                    Cutoff::AtLeast(3),
                    Outcome::reward(20, "Budget for starred restaurants and wine tours"),
                )
                .when(Metric::Income, Cutoff::AtLeast(2), Outcome::reward(10, "Affordable food experiences"))
                .otherwise(Outcome::warn(0, "The best restaurants can be expensive")),
            Rule::fixed("Fitness", Outcome::reward(10, "Perfect for any fitness level")),
            Rule::duration(4, "food tours"),
            Rule::travel_group("Group")
                .group(Couple, Outcome::reward(12, "The romantic experience par excellence"))
                .group(Friends, Outcome::reward(10, "Sharing food with friends: perfect"))
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-5, "Children narrow the choice of restaurants"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::languages("Languages")
                .any_of(
                    &["italian", "french", "spanish", "japanese", "portuguese"],
                    Outcome::reward(
                        10,
                        "You speak {matched}: access to off-menu experiences and markets",
                    ),
                )
                .otherwise(Outcome::warn(
                    2,
                    "The local language opens up many more food experiences",
                )),
        ],
    )
}

fn relaxation_and_wellness() -> CategoryDefinition {
    CategoryDefinition::new(
        "Relaxation and wellness",
        &["Maldives", "Bali", "Santorini", "Thailand", "Mauritius", "Azores"],
        vec![
            Rule::interests("Interest")
                .any_of(&["relax"], Outcome::reward(50, "Relaxation is your priority"))
                .otherwise(Outcome::reward(10, "Everyone needs to unwind")),
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::Exactly(1), Outcome::reward(25, "Safe and peaceful destinations"))
                .otherwise(Outcome::plain(10)),
            Rule::threshold("Budget")
                .when(Metric::Income, Cutoff::AtLeast(3), Outcome::reward(20, "Budget for luxury resorts"))
                .when(Metric::Income, Cutoff::AtLeast(2), Outcome::reward(10, "Good mid-range options"))
                .otherwise(Outcome::warn(-5, "Exclusive destinations are expensive")),
            Rule::fixed("Fitness", Outcome::reward(5, "No particular fitness required")),
            Rule::duration(4, "relaxing holidays"),
            Rule::travel_group("Group")
                .group(Couple, Outcome::reward(15, "A romantic, restorative holiday"))
                .group(
                    FamilyWithChildren,
                    Outcome::reward(8, "Resorts with family services available"),
                )
                .group(Solo, Outcome::reward(5, "Recharging on your own: a great idea"))
                .otherwise(Outcome::plain(5)),
            Rule::language(&["english"], "English (enough in every resort)"),
        ],
    )
}

fn safari_and_wildlife() -> CategoryDefinition {
    CategoryDefinition::new(
        "Safari and wildlife",
        &[
            "Kenya Masai Mara",
            "Tanzania Serengeti",
            "South Africa",
            "Botswana Okavango",
            "Rwanda gorillas",
        ],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["nature", "photography"],
                    Outcome::reward(45, "Perfect for nature and wildlife photography"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::AtLeast(3), Outcome::reward(20, "Open to safari adventures"))
                .when(Metric::Risk, Cutoff::Exactly(2), Outcome::plain(10))
                .otherwise(Outcome::warn(
                    -5,
                    "Safaris involve some risk and unpredictability",
                )),
            Rule::threshold("Budget")
                .when(
                    Metric::Income,
                    Cutoff::AtLeast(3),
                    Outcome::reward(25, "Budget for lodges and specialist guides"),
                )
                .when(
                    Metric::Income,
                    Cutoff::AtLeast(2),
                    Outcome::warn(5, "Quality safaris come at a significant cost"),
                )
                .otherwise(Outcome::warn(-10, "Luxury safaris are out of budget")),
            Rule::threshold("Age")
                .when(Metric::Age, Cutoff::AtLeast(12), Outcome::plain(5))
                .otherwise(Outcome::warn(-20, "Minimum age required")),
            Rule::duration(6, "full safaris"),
            Rule::travel_group("Group")
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-8, "Check the lodge's minimum age requirement"),
                )
                .group(
                    Couple,
                    Outcome::reward(10, "A couple's safari: unique and romantic"),
                )
                .group(Solo, Outcome::reward(8, "Group safaris for solo travelers are common"))
                .otherwise(Outcome::plain(5)),
            Rule::language(
                &["english", "french", "portuguese"],
                "English/French (essential in Africa)",
            ),
        ],
    )
}

fn luxury_cruise() -> CategoryDefinition {
    CategoryDefinition::new(
        "Luxury cruise",
        &[
            "Mediterranean",
            "Caribbean",
            "Alaska",
            "Norwegian fjords",
            "Antarctica expedition",
        ],
        vec![
            Rule::threshold("Budget")
                .when(
                    Metric::Income,
                    Cutoff::AtLeast(3),
                    Outcome::reward(35, "Ideal budget for luxury cruises"),
                )
                .when(
                    Metric::Income,
                    Cutoff::Exactly(2),
                    Outcome::warn(10, "Mid-range options exist"),
                )
                .otherwise(Outcome::warn(-10, "Luxury cruises are out of budget")),
            Rule::interests("Multiple interests")
                .at_least(
                    Pool::OneOf(
                        ["history", "art", "gastronomy", "relax", "nature"]
                            .iter()
                            .map(|tag| tag.to_string())
                            .collect(),
                    ),
                    2,
                    Outcome::reward(25, "A cruise covers many of your interests in one trip"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::threshold("Risk")
                .when(
                    Metric::Risk,
                    Cutoff::Exactly(1),
                    Outcome::reward(20, "A safe and comfortable experience"),
                )
                .otherwise(Outcome::plain(10)),
            Rule::threshold("Age/Fitness")
                .when_all(
                    &[
                        (Metric::Age, Cutoff::AtLeast(50)),
                        (Metric::Fitness, Cutoff::AtMost(2)),
                    ],
                    Outcome::reward(15, "Maximum comfort without physical effort"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::threshold("Duration")
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(7),
                    Outcome::reward(15, "Ideal length for a full cruise"),
                )
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(4),
                    Outcome::warn(5, "Short cruises limit the ports of call"),
                )
                .otherwise(Outcome::warn(-15, "A cruise needs at least 5-7 days")),
            Rule::travel_group("Group")
                .group(
                    FamilyWithChildren,
                    Outcome::reward(10, "Cruise ships have excellent family services"),
                )
                .group(Couple, Outcome::reward(12, "Perfect for a couple"))
                .group(
                    FamilyAdults,
                    Outcome::reward(10, "Ideal for families with different interests"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::language(
                &["english", "italian", "spanish"],
                "English (official language on international ships)",
            ),
        ],
    )
}

fn backpacking() -> CategoryDefinition {
    CategoryDefinition::new(
        "Backpacking",
        &["Southeast Asia", "Latin America", "India", "Morocco", "Eastern Europe"],
        vec![
            Rule::threshold("Budget")
                .when(
                    Metric::Income,
                    Cutoff::AtMost(2),
                    Outcome::reward(30, "Backpacking makes the most of a limited budget"),
                )
                .otherwise(Outcome::plain(10)),
            Rule::threshold("Risk")
                .when(
                    Metric::Risk,
                    Cutoff::AtLeast(2),
                    Outcome::reward(25, "Open to the unpredictability of travel"),
                )
                .otherwise(Outcome::warn(-10, "Backpacking can be unpredictable")),
            Rule::threshold("Age")
                .when(Metric::Age, Cutoff::AtMost(30), Outcome::reward(25, "Ideal age for backpacking"))
                .when(Metric::Age, Cutoff::AtMost(45), Outcome::plain(10))
                .otherwise(Outcome::warn(-5, "Intensive backpacking can become tiring")),
            Rule::threshold("Fitness")
                .when(
                    Metric::Fitness,
                    Cutoff::AtLeast(2),
                    Outcome::reward(20, "Good stamina for frequent moves"),
                )
                .otherwise(Outcome::warn(-5, "Constant moving requires energy")),
            Rule::threshold("Duration")
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(14),
                    Outcome::reward(20, "Perfect length for immersive backpacking"),
                )
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(7),
                    Outcome::reward(10, "Enough to explore one region"),
                )
                .otherwise(Outcome::warn(
                    -5,
                    "Backpacking is more rewarding with at least 7-14 days",
                )),
            Rule::travel_group("Group")
                .group(
                    Solo,
                    Outcome::reward(20, "Solo backpacking is a unique growth experience"),
                )
                .group(Friends, Outcome::reward(15, "With friends: safer and more fun"))
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-20, "Backpacking is not recommended with young children"),
                )
                .group(Couple, Outcome::reward(10, "Very romantic as a couple"))
                .otherwise(Outcome::plain(5)),
            Rule::languages("Languages")
                .at_least(
                    Pool::Any,
                    3,
                    Outcome::reward(12, "You speak {count} languages: great for travelling alone"),
                )
                .any_of(
                    &["english", "spanish"],
                    Outcome::reward(8, "English/Spanish cover most destinations"),
                )
                .otherwise(Outcome::warn(-3, "English is almost indispensable when backpacking")),
        ],
    )
}

fn surfing_and_water_sports() -> CategoryDefinition {
    CategoryDefinition::new(
        "Surfing and water sports",
        &[
            "Hawaii",
            "Bali",
            "Nazaré, Portugal",
            "Byron Bay, Australia",
            "Puerto Escondido, Mexico",
        ],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["sport", "adventure"],
                    Outcome::reward(50, "Passion for sport and adventure"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Fitness")
                .when(Metric::Fitness, Cutoff::AtLeast(3), Outcome::reward(30, "Excellent physical shape"))
                .when(
                    Metric::Fitness,
                    Cutoff::Exactly(2),
                    Outcome::warn(10, "Start with beginner lessons"),
                )
                .otherwise(Outcome::warn(-15, "Water sports require good physical shape")),
            Rule::threshold("Risk")
                .when(Metric::Risk, Cutoff::AtLeast(2), Outcome::plain(15))
                .otherwise(Outcome::warn(-10, "Water sports carry risks")),
            Rule::threshold("Age")
                .when(Metric::Age, Cutoff::AtMost(35), Outcome::reward(10, "Ideal age"))
                .when(
                    Metric::Age,
                    Cutoff::AtMost(50),
                    Outcome::warn(5, "Possible with the right experience"),
                )
                .otherwise(Outcome::warn(
                    -5,
                    "Consider less intense options (kayaking, snorkeling)",
                )),
            Rule::threshold("Duration")
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(7),
                    Outcome::reward(10, "Enough time to learn and progress"),
                )
                .when(Metric::DurationDays, Cutoff::AtLeast(4), Outcome::plain(5))
                .otherwise(Outcome::warn(
                    -5,
                    "With fewer than 4 days it is hard to progress at surfing",
                )),
            Rule::group(
                &[Friends, Solo, Couple],
                &[FamilyWithChildren],
                "Demanding water sports are not well suited to families with children",
            ),
            Rule::language(
                &["english", "portuguese", "spanish"],
                "English/Spanish (international surf community)",
            ),
        ],
    )
}

fn nature_photography() -> CategoryDefinition {
    CategoryDefinition::new(
        "Nature photography",
        &[
            "Iceland",
            "Galápagos",
            "Amazon",
            "Yellowstone",
            "Namibia",
            "Norwegian aurora",
        ],
        vec![
            Rule::interests("Interest")
                .any_of(
                    &["photography", "nature"],
                    Outcome::reward(55, "Photography and nature are your passions!"),
                )
                .any_of(&["adventure"], Outcome::plain(15))
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Fitness")
                .when(
                    Metric::Fitness,
                    Cutoff::AtLeast(2),
                    Outcome::reward(20, "Adequate fitness for excursions"),
                )
                .otherwise(Outcome::warn(
                    -5,
                    "Some locations require long walks at dawn",
                )),
            Rule::threshold("Risk")
                .when(
                    Metric::Risk,
                    Cutoff::AtLeast(2),
                    Outcome::reward(15, "Open to remote and wild locations"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::threshold("Budget")
                .when(
                    Metric::Income,
                    Cutoff::AtLeast(2),
                    Outcome::reward(10, "Budget for equipment and guides"),
                )
                .otherwise(Outcome::plain(0)),
            Rule::threshold("Duration")
                .when(
                    Metric::DurationDays,
                    Cutoff::AtLeast(7),
                    Outcome::reward(15, "Enough time to chase the perfect light"),
                )
                .when(Metric::DurationDays, Cutoff::AtLeast(4), Outcome::plain(5))
                .otherwise(Outcome::warn(
                    -10,
                    "Wildlife photography needs at least 5-7 days",
                )),
            Rule::travel_group("Group")
                .group(
                    Solo,
                    Outcome::reward(15, "On your own: full freedom to follow light and subjects"),
                )
                .any_of(
                    &[Couple.as_str(), Friends.as_str()],
                    Outcome::warn(5, "Make sure everyone shares the same pace and hours"),
                )
                .group(
                    FamilyWithChildren,
                    Outcome::warn(-10, "Young children make the required patience hard"),
                )
                .otherwise(Outcome::plain(5)),
            Rule::language(
                &["english", "spanish", "portuguese"],
                "English (key for guides and permits in the reserves)",
            ),
        ],
    )
}
