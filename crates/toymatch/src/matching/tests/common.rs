use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::matching::catalog::{CatalogError, CatalogProvider, ProductCatalog};
use crate::matching::domain::{
    AgeRange, ChildInterest, Gender, GrowthGoal, ParentingApproach, PriceRange, Product,
    SmartSearchCriteria,
};
use crate::matching::engine::SmartMatchEngine;
use crate::matching::router::matching_router;
use crate::matching::service::SmartMatchService;

pub(super) fn product(
    id: &str,
    age_range: (u32, u32),
    gender: Gender,
    skills: &[&str],
    tags: &[&str],
    price: u64,
) -> Product {
    Product {
        id: id.to_string(),
        name: format!("product {id}"),
        category: "test".to_string(),
        age_range: AgeRange {
            min: age_range.0,
            max: age_range.1,
        },
        gender,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        price,
    }
}

/// The doll from the storefront seed catalog.
pub(super) fn doll() -> Product {
    product(
        "doll",
        (3, 8),
        Gender::Female,
        &["تخیل", "اجتماعی"],
        &["عروسک", "دخترانه"],
        180_000,
    )
}

/// Five year old girl, social-skills goal, authoritative parent, 100k-200k budget.
pub(super) fn doll_criteria() -> SmartSearchCriteria {
    SmartSearchCriteria {
        child_age: 5,
        child_gender: Gender::Female,
        interests: BTreeSet::new(),
        growth_goals: BTreeSet::from([GrowthGoal::SocialSkills]),
        parenting_style: ParentingApproach::Authoritative,
        budget: Some(PriceRange {
            min: 100_000,
            max: 200_000,
        }),
    }
}

pub(super) fn broad_criteria() -> SmartSearchCriteria {
    SmartSearchCriteria {
        child_age: 6,
        child_gender: Gender::Female,
        interests: BTreeSet::from([
            ChildInterest::Music,
            ChildInterest::Puzzles,
            ChildInterest::Building,
        ]),
        growth_goals: BTreeSet::from([
            GrowthGoal::ProblemSolving,
            GrowthGoal::Creativity,
            GrowthGoal::SocialSkills,
        ]),
        parenting_style: ParentingApproach::Permissive,
        budget: Some(PriceRange {
            min: 50_000,
            max: 300_000,
        }),
    }
}

/// Mixed catalog exercising every criterion, including empty attribute lists.
pub(super) fn mixed_catalog() -> Vec<Product> {
    let mut catalog = ProductCatalog::sample().as_slice().to_vec();
    catalog.extend([
        doll(),
        product(
            "puzzle",
            (4, 9),
            Gender::Unisex,
            &["منطق", "خلاقیت"],
            &["پازل", "ساختن"],
            95_000,
        ),
        product("bare", (0, 99), Gender::Unisex, &[], &[], 10_000),
        product(
            "drum",
            (2, 6),
            Gender::Unisex,
            &["حرکتی", "زبانی", "اجتماعی"],
            &["موسیقی", "ریتم"],
            140_000,
        ),
        product("kite", (8, 14), Gender::Male, &["حرکتی"], &["بیرون از خانه"], 60_000),
    ]);
    catalog
}

pub(super) fn engine() -> SmartMatchEngine {
    SmartMatchEngine::new()
}

pub(super) fn sample_service() -> SmartMatchService<ProductCatalog> {
    SmartMatchService::new(Arc::new(ProductCatalog::sample()))
}

pub(super) struct UnavailableCatalog;

impl CatalogProvider for UnavailableCatalog {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Unavailable("catalog backend offline".to_string()))
    }
}

pub(super) fn sample_router() -> axum::Router {
    matching_router(Arc::new(sample_service()))
}

pub(super) fn unavailable_router() -> axum::Router {
    matching_router(Arc::new(SmartMatchService::new(Arc::new(UnavailableCatalog))))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
