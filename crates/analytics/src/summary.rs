//! Whole-catalog analytics snapshot.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};
use storefront_products::Product;

use crate::category::{
    CategoryDistribution, DEFAULT_TOP_CATEGORIES, TopCategory, category_distribution,
};
use crate::price::{PriceStats, price_stats};
use crate::rating::{
    PercentageBasis, RatingDistribution, rated_count, rated_share, rating_distribution_with,
};

/// Environment variable overriding [`AnalyticsConfig::top_categories_limit`].
pub const ENV_TOP_CATEGORIES: &str = "STOREFRONT_TOP_CATEGORIES";
/// Environment variable overriding [`AnalyticsConfig::rating_basis`].
pub const ENV_RATING_BASIS: &str = "STOREFRONT_RATING_BASIS";

/// Knobs for [`summarize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub top_categories_limit: usize,
    pub rating_basis: PercentageBasis,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_categories_limit: DEFAULT_TOP_CATEGORIES,
            rating_basis: PercentageBasis::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TOP_CATEGORIES) {
            config.top_categories_limit = raw.trim().parse().map_err(|_| {
                DomainError::validation(format!(
                    "{ENV_TOP_CATEGORIES} must be a non-negative integer, got {raw:?}"
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_RATING_BASIS) {
            config.rating_basis = raw.parse()?;
        }

        Ok(config)
    }
}

/// Everything the analytics panel shows, computed in one pass over the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub rated_products: usize,
    /// Rated products as a whole-number percentage of the catalog.
    pub rated_share: u32,
    pub price_stats: PriceStats,
    pub categories: Vec<CategoryDistribution>,
    pub ratings: Vec<RatingDistribution>,
    pub top_categories: Vec<TopCategory>,
}

impl Default for CatalogSummary {
    fn default() -> Self {
        summarize(&[])
    }
}

/// Number of products in the catalog.
pub fn total_count(products: &[Product]) -> usize {
    products.len()
}

/// Summary with default settings.
pub fn summarize(products: &[Product]) -> CatalogSummary {
    summarize_with(products, &AnalyticsConfig::default())
}

pub fn summarize_with(products: &[Product], config: &AnalyticsConfig) -> CatalogSummary {
    let categories = category_distribution(products);
    let top_categories = categories
        .iter()
        .take(config.top_categories_limit)
        .cloned()
        .collect();

    CatalogSummary {
        total_products: total_count(products),
        rated_products: rated_count(products),
        rated_share: rated_share(products),
        price_stats: price_stats(products),
        ratings: rating_distribution_with(products, config.rating_basis),
        categories,
        top_categories,
    }
}
