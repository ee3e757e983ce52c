//! Parenting-style survey analysis and smart toy matching against a product catalog.
//!
//! Both the analyzer and the match engine are pure functions over their inputs; the
//! service and router layers only add validation, catalog access, and HTTP plumbing.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod router;
pub mod service;
pub mod survey;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogProvider, ProductCatalog};
pub use domain::{
    AgeRange, ChildInterest, ChildPersonality, Gender, GrowthGoal, ParentingApproach,
    ParentingStyle, PriceRange, Product, SmartSearchCriteria, UnknownLabel,
};
pub use engine::{
    smart_search, MatchFactor, MatchOutcome, ProductMatch, ScoreComponent, SmartMatchEngine,
    MATCH_THRESHOLD,
};
pub use router::{matching_router, SearchResponse};
pub use service::{MatchServiceError, Recommendation, RecommendationRequest, SmartMatchService};
pub use survey::{
    analyze_parenting_styles, ParentingScoreResult, QuestionBank, QuestionnaireAnswers,
    QuestionnaireOutcome, SurveyAnswers, SurveyError, SurveyQuestion,
};
