use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Archetypes scored by the six-question Likert survey.
///
/// Declaration order is significant: it breaks ties when ranking dominant styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParentingStyle {
    Authoritative,
    Mindful,
    AttachmentBased,
    Montessori,
    Authoritarian,
    Permissive,
}

impl ParentingStyle {
    pub const ALL: [ParentingStyle; 6] = [
        ParentingStyle::Authoritative,
        ParentingStyle::Mindful,
        ParentingStyle::AttachmentBased,
        ParentingStyle::Montessori,
        ParentingStyle::Authoritarian,
        ParentingStyle::Permissive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ParentingStyle::Authoritative => "authoritative",
            ParentingStyle::Mindful => "mindful",
            ParentingStyle::AttachmentBased => "attachment_based",
            ParentingStyle::Montessori => "montessori",
            ParentingStyle::Authoritarian => "authoritarian",
            ParentingStyle::Permissive => "permissive",
        }
    }

    /// The match-engine approach sharing this archetype's name, if any.
    pub const fn approach(self) -> Option<ParentingApproach> {
        match self {
            ParentingStyle::Authoritative => Some(ParentingApproach::Authoritative),
            ParentingStyle::Authoritarian => Some(ParentingApproach::Authoritarian),
            ParentingStyle::Permissive => Some(ParentingApproach::Permissive),
            ParentingStyle::Mindful
            | ParentingStyle::AttachmentBased
            | ParentingStyle::Montessori => None,
        }
    }
}

/// Parenting vocabulary used by the match engine's style weights and the
/// multiple-choice questionnaire.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParentingApproach {
    #[default]
    Authoritative,
    Authoritarian,
    Permissive,
    Neglectful,
    Helicopter,
    FreeRange,
}

impl ParentingApproach {
    pub const ALL: [ParentingApproach; 6] = [
        ParentingApproach::Authoritative,
        ParentingApproach::Authoritarian,
        ParentingApproach::Permissive,
        ParentingApproach::Neglectful,
        ParentingApproach::Helicopter,
        ParentingApproach::FreeRange,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ParentingApproach::Authoritative => "authoritative",
            ParentingApproach::Authoritarian => "authoritarian",
            ParentingApproach::Permissive => "permissive",
            ParentingApproach::Neglectful => "neglectful",
            ParentingApproach::Helicopter => "helicopter",
            ParentingApproach::FreeRange => "free_range",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChildInterest {
    ArtCrafts,
    Music,
    Sports,
    Science,
    Technology,
    Nature,
    Animals,
    Reading,
    Puzzles,
    Building,
    PretendPlay,
    OutdoorActivities,
}

impl ChildInterest {
    pub const ALL: [ChildInterest; 12] = [
        ChildInterest::ArtCrafts,
        ChildInterest::Music,
        ChildInterest::Sports,
        ChildInterest::Science,
        ChildInterest::Technology,
        ChildInterest::Nature,
        ChildInterest::Animals,
        ChildInterest::Reading,
        ChildInterest::Puzzles,
        ChildInterest::Building,
        ChildInterest::PretendPlay,
        ChildInterest::OutdoorActivities,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ChildInterest::ArtCrafts => "art_crafts",
            ChildInterest::Music => "music",
            ChildInterest::Sports => "sports",
            ChildInterest::Science => "science",
            ChildInterest::Technology => "technology",
            ChildInterest::Nature => "nature",
            ChildInterest::Animals => "animals",
            ChildInterest::Reading => "reading",
            ChildInterest::Puzzles => "puzzles",
            ChildInterest::Building => "building",
            ChildInterest::PretendPlay => "pretend_play",
            ChildInterest::OutdoorActivities => "outdoor_activities",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GrowthGoal {
    CognitiveDevelopment,
    EmotionalIntelligence,
    SocialSkills,
    PhysicalDevelopment,
    Creativity,
    ProblemSolving,
    LanguageSkills,
    MotorSkills,
    SelfConfidence,
    Independence,
}

impl GrowthGoal {
    pub const ALL: [GrowthGoal; 10] = [
        GrowthGoal::CognitiveDevelopment,
        GrowthGoal::EmotionalIntelligence,
        GrowthGoal::SocialSkills,
        GrowthGoal::PhysicalDevelopment,
        GrowthGoal::Creativity,
        GrowthGoal::ProblemSolving,
        GrowthGoal::LanguageSkills,
        GrowthGoal::MotorSkills,
        GrowthGoal::SelfConfidence,
        GrowthGoal::Independence,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GrowthGoal::CognitiveDevelopment => "cognitive_development",
            GrowthGoal::EmotionalIntelligence => "emotional_intelligence",
            GrowthGoal::SocialSkills => "social_skills",
            GrowthGoal::PhysicalDevelopment => "physical_development",
            GrowthGoal::Creativity => "creativity",
            GrowthGoal::ProblemSolving => "problem_solving",
            GrowthGoal::LanguageSkills => "language_skills",
            GrowthGoal::MotorSkills => "motor_skills",
            GrowthGoal::SelfConfidence => "self_confidence",
            GrowthGoal::Independence => "independence",
        }
    }
}

/// Personality traits inferred by the multiple-choice questionnaire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChildPersonality {
    Introvert,
    Extrovert,
    Sensitive,
    Adventurous,
    Analytical,
    Creative,
    Leader,
    TeamPlayer,
    Independent,
    Dependent,
}

impl ChildPersonality {
    pub const ALL: [ChildPersonality; 10] = [
        ChildPersonality::Introvert,
        ChildPersonality::Extrovert,
        ChildPersonality::Sensitive,
        ChildPersonality::Adventurous,
        ChildPersonality::Analytical,
        ChildPersonality::Creative,
        ChildPersonality::Leader,
        ChildPersonality::TeamPlayer,
        ChildPersonality::Independent,
        ChildPersonality::Dependent,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ChildPersonality::Introvert => "introvert",
            ChildPersonality::Extrovert => "extrovert",
            ChildPersonality::Sensitive => "sensitive",
            ChildPersonality::Adventurous => "adventurous",
            ChildPersonality::Analytical => "analytical",
            ChildPersonality::Creative => "creative",
            ChildPersonality::Leader => "leader",
            ChildPersonality::TeamPlayer => "team_player",
            ChildPersonality::Independent => "independent",
            ChildPersonality::Dependent => "dependent",
        }
    }
}

/// Target audience of a product, and the gender a search is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unisex];

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        }
    }
}

/// Raised when a label does not name any member of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, UnknownLabel> {
    let needle = raw.trim().to_ascii_lowercase().replace('-', "_");
    all.iter()
        .copied()
        .find(|candidate| label(*candidate) == needle)
        .ok_or_else(|| UnknownLabel {
            kind,
            value: raw.to_string(),
        })
}

impl FromStr for ParentingStyle {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("parenting style", raw, &Self::ALL, Self::label)
    }
}

impl FromStr for ParentingApproach {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("parenting approach", raw, &Self::ALL, Self::label)
    }
}

impl FromStr for ChildInterest {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("interest", raw, &Self::ALL, Self::label)
    }
}

impl FromStr for GrowthGoal {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("growth goal", raw, &Self::ALL, Self::label)
    }
}

impl FromStr for Gender {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("gender", raw, &Self::ALL, Self::label)
    }
}

impl fmt::Display for ParentingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ParentingApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive age bracket, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub const fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// Inclusive price bracket in the catalog currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Catalog entry as seen by the matcher. The matcher never mutates products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub age_range: AgeRange,
    pub gender: Gender,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: u64,
}

/// Child and parent profile a smart search is ranked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSearchCriteria {
    pub child_age: u32,
    pub child_gender: Gender,
    #[serde(default)]
    pub interests: BTreeSet<ChildInterest>,
    #[serde(default)]
    pub growth_goals: BTreeSet<GrowthGoal>,
    #[serde(default)]
    pub parenting_style: ParentingApproach,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<PriceRange>,
}
