mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Product, SmartSearchCriteria};

/// Minimum total a product needs to appear in search results (inclusive).
pub const MATCH_THRESHOLD: f64 = 50.0;

/// Criteria contributing to a product's match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    AgeFit,
    GenderFit,
    GrowthGoalFit,
    InterestFit,
    ParentingStyleFit,
    BudgetFit,
}

/// Discrete contribution to a match score, so rankings can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub notes: String,
}

/// Composite score for one product against one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub product_id: String,
    pub total_score: f64,
    pub components: Vec<ScoreComponent>,
}

impl MatchOutcome {
    pub fn points_for(&self, factor: MatchFactor) -> f64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}

/// A catalog product that cleared the threshold, with its score trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMatch {
    pub product: Product,
    pub outcome: MatchOutcome,
}

/// Stateless scorer ranking a catalog against search criteria.
///
/// Searching runs two passes: products are filtered on one score computation, then the
/// survivors are ordered by a fresh computation. Both passes go through
/// [`SmartMatchEngine::total`], and the sort is stable so equal scores keep catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartMatchEngine;

impl SmartMatchEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, product: &Product, criteria: &SmartSearchCriteria) -> MatchOutcome {
        let (components, total_score) = rules::score_product(product, criteria);

        MatchOutcome {
            product_id: product.id.clone(),
            total_score,
            components,
        }
    }

    pub fn total(&self, product: &Product, criteria: &SmartSearchCriteria) -> f64 {
        rules::score_product(product, criteria).1
    }

    pub fn is_match(&self, product: &Product, criteria: &SmartSearchCriteria) -> bool {
        self.total(product, criteria) >= MATCH_THRESHOLD
    }

    /// Products scoring at least [`MATCH_THRESHOLD`], best first.
    pub fn search(&self, criteria: &SmartSearchCriteria, catalog: &[Product]) -> Vec<Product> {
        let mut matches: Vec<&Product> = catalog
            .iter()
            .filter(|product| self.is_match(product, criteria))
            .collect();

        matches.sort_by(|a, b| self.total(b, criteria).total_cmp(&self.total(a, criteria)));

        debug!(
            candidates = catalog.len(),
            matched = matches.len(),
            "smart search filtered catalog"
        );

        matches.into_iter().cloned().collect()
    }

    /// Same selection and order as [`SmartMatchEngine::search`], keeping each score trail.
    pub fn rank(&self, criteria: &SmartSearchCriteria, catalog: &[Product]) -> Vec<ProductMatch> {
        let mut ranked: Vec<ProductMatch> = catalog
            .iter()
            .filter(|product| self.is_match(product, criteria))
            .map(|product| ProductMatch {
                product: product.clone(),
                outcome: self.score(product, criteria),
            })
            .collect();

        ranked.sort_by(|a, b| b.outcome.total_score.total_cmp(&a.outcome.total_score));

        debug!(
            candidates = catalog.len(),
            matched = ranked.len(),
            top_score = ranked.first().map_or(0.0, |entry| entry.outcome.total_score),
            "smart search ranked catalog"
        );

        ranked
    }
}

/// Convenience wrapper over [`SmartMatchEngine::search`].
pub fn smart_search(criteria: &SmartSearchCriteria, catalog: &[Product]) -> Vec<Product> {
    SmartMatchEngine::new().search(criteria, catalog)
}
