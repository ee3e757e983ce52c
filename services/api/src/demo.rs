use crate::infra::{budget_range, load_catalog};
use clap::Args;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;
use toymatch::error::AppError;
use toymatch::matching::{
    analyze_parenting_styles, CatalogProvider, ChildInterest, Gender, GrowthGoal,
    ParentingApproach, ParentingScoreResult, ProductMatch, QuestionBank, QuestionnaireAnswers,
    RecommendationRequest, SmartMatchService, SmartSearchCriteria, SurveyAnswers,
    SurveyQuestion,
};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Rule enforcement (1) vs. preserving the relationship (10)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q1: i32,
    /// Reacting on the spot (1) vs. a considered response (10) when tired
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q2: i32,
    /// How often the child is consulted on family decisions
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q3: i32,
    /// Ignoring (1) vs. guiding (10) strong emotions
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q4: i32,
    /// Focusing on the outcome (1) vs. the root cause (10) of a mistake
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q5: i32,
    /// How much responsibility is delegated to the child
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=10))]
    pub(crate) q6: i32,
    /// Print the raw JSON payload instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl AnalyzeArgs {
    fn answers(&self) -> SurveyAnswers {
        [
            (SurveyQuestion::Q1, self.q1),
            (SurveyQuestion::Q2, self.q2),
            (SurveyQuestion::Q3, self.q3),
            (SurveyQuestion::Q4, self.q4),
            (SurveyQuestion::Q5, self.q5),
            (SurveyQuestion::Q6, self.q6),
        ]
        .into_iter()
        .collect()
    }
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Child age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Child gender: male, female, or unisex
    #[arg(long)]
    pub(crate) gender: Gender,
    /// Interest to match against product tags (repeatable)
    #[arg(long)]
    pub(crate) interest: Vec<ChildInterest>,
    /// Growth goal to match against product skills (repeatable)
    #[arg(long)]
    pub(crate) goal: Vec<GrowthGoal>,
    /// Parenting approach weighting the style criterion
    #[arg(long, default_value_t = ParentingApproach::Authoritative)]
    pub(crate) style: ParentingApproach,
    /// Lowest acceptable price
    #[arg(long)]
    pub(crate) budget_min: Option<u64>,
    /// Highest acceptable price
    #[arg(long)]
    pub(crate) budget_max: Option<u64>,
    /// Product catalog CSV (defaults to the sample products)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the raw JSON payload instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Product catalog CSV (defaults to the sample products)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Skip the multiple-choice questionnaire portion of the demo.
    #[arg(long)]
    pub(crate) skip_questionnaire: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let answers = args.answers();
    answers.validate()?;
    let result = analyze_parenting_styles(&answers);

    if args.json {
        print_json(&result)?;
    } else {
        render_analysis(&result);
    }
    Ok(())
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        age,
        gender,
        interest,
        goal,
        style,
        budget_min,
        budget_max,
        catalog,
        json,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let catalog_size = catalog.len();
    let service = SmartMatchService::new(Arc::new(catalog));
    let criteria = SmartSearchCriteria {
        child_age: age,
        child_gender: gender,
        interests: interest.into_iter().collect(),
        growth_goals: goal.into_iter().collect(),
        parenting_style: style,
        budget: budget_range(budget_min, budget_max),
    };

    let matches = service.search(&criteria)?;
    if json {
        print_json(&matches)?;
    } else {
        render_matches(&matches, catalog_size);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        catalog,
        skip_questionnaire,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let catalog_size = catalog.len();
    let service = SmartMatchService::new(Arc::new(catalog));

    println!("Toy match demo");
    run_demo_with(&service, catalog_size, skip_questionnaire)
}

fn run_demo_with<C>(
    service: &SmartMatchService<C>,
    catalog_size: usize,
    skip_questionnaire: bool,
) -> Result<(), AppError>
where
    C: CatalogProvider + 'static,
{
    let answers: SurveyAnswers = [
        (SurveyQuestion::Q1, 9),
        (SurveyQuestion::Q2, 8),
        (SurveyQuestion::Q3, 7),
        (SurveyQuestion::Q4, 9),
        (SurveyQuestion::Q5, 8),
        (SurveyQuestion::Q6, 6),
    ]
    .into_iter()
    .collect();

    if !skip_questionnaire {
        println!("\nQuestionnaire walkthrough (first option on every question)");
        render_questionnaire(service.questionnaire());
    }

    let request = RecommendationRequest {
        answers,
        child_age: 5,
        child_gender: Gender::Female,
        interests: BTreeSet::from([ChildInterest::ArtCrafts, ChildInterest::Music]),
        growth_goals: BTreeSet::from([GrowthGoal::SocialSkills, GrowthGoal::Creativity]),
        parenting_style: None,
        budget: budget_range(Some(100_000), Some(300_000)),
    };

    let recommendation = service.recommend(request)?;

    println!("\nSurvey analysis");
    render_analysis(&recommendation.analysis);
    println!(
        "  Search profile: age {} | {} | approach {} (weight {:.1})",
        recommendation.criteria.child_age,
        recommendation.criteria.child_gender.label(),
        recommendation.criteria.parenting_style,
        recommendation.criteria.parenting_style.weight()
    );

    println!();
    render_matches(&recommendation.matches, catalog_size);

    println!("  Criteria payload:");
    print_json(&recommendation.criteria)
}

fn render_analysis(result: &ParentingScoreResult) {
    println!("Parenting style scores:");
    for (style, score) in &result.scores {
        let marker = if result.dominant_styles.contains(style) {
            "*"
        } else {
            " "
        };
        println!("  {} {:<18} {:>5.2}", marker, style.label(), score);
    }

    let dominant: Vec<&str> = result
        .dominant_styles
        .iter()
        .map(|style| style.label())
        .collect();
    println!("- Dominant styles: {}", dominant.join(", "));
    println!(
        "- Suggested approach for matching: {}",
        result.suggested_approach()
    );
}

fn render_questionnaire(bank: &QuestionBank) {
    let parenting: BTreeMap<String, String> = bank
        .parenting
        .iter()
        .filter_map(|question| {
            let option = question.options.first()?;
            println!("  - [{}] {} -> {}", question.id, question.prompt, option.text);
            Some((question.id.to_string(), option.value.to_string()))
        })
        .collect();
    let personality: BTreeMap<String, String> = bank
        .personality
        .iter()
        .filter_map(|question| {
            let option = question.options.first()?;
            println!("  - [{}] {} -> {}", question.id, question.prompt, option.text);
            Some((question.id.to_string(), option.value.to_string()))
        })
        .collect();

    let outcome = bank.evaluate(&QuestionnaireAnswers {
        parenting,
        personality,
    });
    let traits: Vec<&str> = outcome
        .personality_traits
        .iter()
        .map(|trait_| trait_.label())
        .collect();
    println!("- Inferred approach: {}", outcome.parenting_approach);
    println!("- Personality traits: {}", traits.join(", "));
}

fn render_matches(matches: &[ProductMatch], catalog_size: usize) {
    println!(
        "Smart search: {} of {} products matched",
        matches.len(),
        catalog_size
    );
    for entry in matches {
        println!(
            "- {} [{}] score {:.1} | {} toman",
            entry.product.name, entry.product.id, entry.outcome.total_score, entry.product.price
        );
        for component in &entry.outcome.components {
            println!(
                "    - {:?}: {:.1} ({})",
                component.factor, component.points, component.notes
            );
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", json);
    Ok(())
}
