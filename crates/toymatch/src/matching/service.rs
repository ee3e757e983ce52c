use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::{CatalogError, CatalogProvider};
use super::domain::{
    ChildInterest, Gender, GrowthGoal, ParentingApproach, PriceRange, SmartSearchCriteria,
};
use super::engine::{ProductMatch, SmartMatchEngine};
use super::survey::{
    analyze_parenting_styles, ParentingScoreResult, QuestionBank, QuestionnaireAnswers,
    QuestionnaireOutcome, SurveyAnswers, SurveyError,
};

/// Survey answers plus the child profile, for a one-shot analysis and search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub answers: SurveyAnswers,
    pub child_age: u32,
    pub child_gender: Gender,
    #[serde(default)]
    pub interests: BTreeSet<ChildInterest>,
    #[serde(default)]
    pub growth_goals: BTreeSet<GrowthGoal>,
    /// Overrides the approach suggested by the survey analysis.
    #[serde(default)]
    pub parenting_style: Option<ParentingApproach>,
    #[serde(default)]
    pub budget: Option<PriceRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub analysis: ParentingScoreResult,
    pub criteria: SmartSearchCriteria,
    pub matches: Vec<ProductMatch>,
}

/// Service composing the catalog, survey analyzer, and match engine.
pub struct SmartMatchService<C> {
    catalog: Arc<C>,
    engine: SmartMatchEngine,
    questions: QuestionBank,
}

impl<C> SmartMatchService<C>
where
    C: CatalogProvider + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            engine: SmartMatchEngine::new(),
            questions: QuestionBank::standard(),
        }
    }

    /// Validate the survey, then score every parenting style.
    pub fn analyze(
        &self,
        answers: &SurveyAnswers,
    ) -> Result<ParentingScoreResult, MatchServiceError> {
        answers.validate()?;
        let result = analyze_parenting_styles(answers);
        debug!(dominant = ?result.dominant_styles, "parenting survey analyzed");
        Ok(result)
    }

    /// Rank a fresh catalog snapshot against the criteria.
    pub fn search(
        &self,
        criteria: &SmartSearchCriteria,
    ) -> Result<Vec<ProductMatch>, MatchServiceError> {
        let products = self.catalog.products()?;
        let matches = self.engine.rank(criteria, &products);

        info!(
            child_age = criteria.child_age,
            parenting_style = criteria.parenting_style.label(),
            catalog_size = products.len(),
            matches = matches.len(),
            "smart search completed"
        );

        Ok(matches)
    }

    /// Analyze the survey, derive the criteria, and search in one call.
    pub fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Recommendation, MatchServiceError> {
        let analysis = self.analyze(&request.answers)?;
        let parenting_style = request
            .parenting_style
            .unwrap_or_else(|| analysis.suggested_approach());

        let criteria = SmartSearchCriteria {
            child_age: request.child_age,
            child_gender: request.child_gender,
            interests: request.interests,
            growth_goals: request.growth_goals,
            parenting_style,
            budget: request.budget,
        };
        let matches = self.search(&criteria)?;

        Ok(Recommendation {
            analysis,
            criteria,
            matches,
        })
    }

    pub fn questionnaire(&self) -> &QuestionBank {
        &self.questions
    }

    pub fn evaluate_questionnaire(&self, answers: &QuestionnaireAnswers) -> QuestionnaireOutcome {
        self.questions.evaluate(answers)
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Survey(#[from] SurveyError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
