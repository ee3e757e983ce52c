use super::super::domain::{Gender, Product, SmartSearchCriteria};
use super::super::vocabulary::{goals_for_skill, interests_for_tag};
use super::{MatchFactor, ScoreComponent};

pub(crate) const AGE_POINTS: f64 = 20.0;
pub(crate) const GENDER_POINTS: f64 = 15.0;
pub(crate) const GROWTH_GOAL_POINTS: f64 = 25.0;
pub(crate) const INTEREST_POINTS: f64 = 20.0;
pub(crate) const PARENTING_STYLE_POINTS: f64 = 10.0;
pub(crate) const BUDGET_POINTS: f64 = 10.0;

/// Share of `matching` in `total`; an empty attribute list contributes nothing.
fn coverage(matching: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matching as f64 / total as f64
    }
}

pub(crate) fn matching_skills(product: &Product, criteria: &SmartSearchCriteria) -> usize {
    product
        .skills
        .iter()
        .filter(|skill| {
            goals_for_skill(skill)
                .iter()
                .any(|goal| criteria.growth_goals.contains(goal))
        })
        .count()
}

pub(crate) fn matching_tags(product: &Product, criteria: &SmartSearchCriteria) -> usize {
    product
        .tags
        .iter()
        .filter(|tag| {
            interests_for_tag(tag)
                .iter()
                .any(|interest| criteria.interests.contains(interest))
        })
        .count()
}

/// Scores one product. Components are pushed, and summed, in a fixed criterion order.
pub(crate) fn score_product(
    product: &Product,
    criteria: &SmartSearchCriteria,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::with_capacity(6);
    let mut total_score = 0.0;

    let age_fit = product.age_range.contains(criteria.child_age);
    let points = if age_fit { AGE_POINTS } else { 0.0 };
    components.push(ScoreComponent {
        factor: MatchFactor::AgeFit,
        points,
        notes: if age_fit {
            format!(
                "age {} within {}-{}",
                criteria.child_age, product.age_range.min, product.age_range.max
            )
        } else {
            format!(
                "age {} outside {}-{}",
                criteria.child_age, product.age_range.min, product.age_range.max
            )
        },
    });
    total_score += points;

    let gender_fit = product.gender == criteria.child_gender || product.gender == Gender::Unisex;
    let points = if gender_fit { GENDER_POINTS } else { 0.0 };
    components.push(ScoreComponent {
        factor: MatchFactor::GenderFit,
        points,
        notes: format!(
            "product for {} vs. child {}",
            product.gender.label(),
            criteria.child_gender.label()
        ),
    });
    total_score += points;

    let skills = matching_skills(product, criteria);
    let points = coverage(skills, product.skills.len()) * GROWTH_GOAL_POINTS;
    components.push(ScoreComponent {
        factor: MatchFactor::GrowthGoalFit,
        points,
        notes: format!(
            "{skills} of {} skill(s) serve a requested goal",
            product.skills.len()
        ),
    });
    total_score += points;

    let tags = matching_tags(product, criteria);
    let points = coverage(tags, product.tags.len()) * INTEREST_POINTS;
    components.push(ScoreComponent {
        factor: MatchFactor::InterestFit,
        points,
        notes: format!("{tags} of {} tag(s) match an interest", product.tags.len()),
    });
    total_score += points;

    let weight = criteria.parenting_style.weight();
    let points = weight * PARENTING_STYLE_POINTS;
    components.push(ScoreComponent {
        factor: MatchFactor::ParentingStyleFit,
        points,
        notes: format!("{} weight {weight:.1}", criteria.parenting_style.label()),
    });
    total_score += points;

    if let Some(budget) = criteria.budget {
        let within = budget.contains(product.price);
        let points = if within { BUDGET_POINTS } else { 0.0 };
        components.push(ScoreComponent {
            factor: MatchFactor::BudgetFit,
            points,
            notes: format!(
                "price {} {} budget {}-{}",
                product.price,
                if within { "within" } else { "outside" },
                budget.min,
                budget.max
            ),
        });
        total_score += points;
    }

    (components, total_score)
}
