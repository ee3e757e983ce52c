//! Closed lookup tables linking free-text catalog attributes to the matching vocabularies.

use super::domain::{ChildInterest, GrowthGoal, ParentingApproach};

/// Growth goals a catalog skill label supports. Unlisted skills support none.
pub(crate) fn goals_for_skill(skill: &str) -> &'static [GrowthGoal] {
    match skill {
        "ریاضی" | "منطق" => &[GrowthGoal::CognitiveDevelopment, GrowthGoal::ProblemSolving],
        "خلاقیت" => &[GrowthGoal::Creativity],
        "اجتماعی" => &[GrowthGoal::SocialSkills, GrowthGoal::EmotionalIntelligence],
        "حرکتی" => &[GrowthGoal::PhysicalDevelopment, GrowthGoal::MotorSkills],
        "زبانی" => &[GrowthGoal::LanguageSkills],
        "اعتماد به نفس" => &[GrowthGoal::SelfConfidence],
        "استقلال" => &[GrowthGoal::Independence],
        _ => &[],
    }
}

/// Interests a catalog tag signals. Unlisted tags signal none.
pub(crate) fn interests_for_tag(tag: &str) -> &'static [ChildInterest] {
    match tag {
        "هنری" => &[ChildInterest::ArtCrafts],
        "موسیقی" => &[ChildInterest::Music],
        "ورزشی" => &[ChildInterest::Sports],
        "علمی" => &[ChildInterest::Science],
        "تکنولوژی" => &[ChildInterest::Technology],
        "طبیعت" => &[ChildInterest::Nature],
        "حیوانات" => &[ChildInterest::Animals],
        "کتاب" => &[ChildInterest::Reading],
        "پازل" => &[ChildInterest::Puzzles],
        "ساختن" => &[ChildInterest::Building],
        "تخیلی" => &[ChildInterest::PretendPlay],
        "بیرون از خانه" => &[ChildInterest::OutdoorActivities],
        _ => &[],
    }
}

impl ParentingApproach {
    /// Static multiplier applied to the parenting-style criterion.
    pub const fn weight(self) -> f64 {
        match self {
            ParentingApproach::Authoritative => 1.0,
            ParentingApproach::Authoritarian => 0.8,
            ParentingApproach::Permissive => 0.9,
            ParentingApproach::Neglectful => 0.6,
            ParentingApproach::Helicopter => 0.7,
            ParentingApproach::FreeRange => 0.8,
        }
    }
}
