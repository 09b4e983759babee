//! Rating-band histogram.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;
use storefront_products::Product;

use crate::rounding::{round_to, share_percent};

/// A named rating band: `lower <= rate < upper`, or `<= upper` when
/// `upper_inclusive` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBucket {
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl RatingBucket {
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.lower
            && if self.upper_inclusive {
                rate <= self.upper
            } else {
                rate < self.upper
            }
    }
}

/// Canonical bands, highest first. Lookup scans in this order.
pub const RATING_BUCKETS: [RatingBucket; 6] = [
    RatingBucket { label: "4.5 - 5.0", lower: 4.5, upper: 5.0, upper_inclusive: true },
    RatingBucket { label: "4.0 - 4.5", lower: 4.0, upper: 4.5, upper_inclusive: false },
    RatingBucket { label: "3.5 - 4.0", lower: 3.5, upper: 4.0, upper_inclusive: false },
    RatingBucket { label: "3.0 - 3.5", lower: 3.0, upper: 3.5, upper_inclusive: false },
    RatingBucket { label: "2.5 - 3.0", lower: 2.5, upper: 3.0, upper_inclusive: false },
    RatingBucket { label: "Below 2.5", lower: 0.0, upper: 2.5, upper_inclusive: false },
];

/// Denominator used for rating-band percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageBasis {
    /// Share of the whole catalog, unrated products included. Percentages do
    /// not add up to 100 when some products are unrated.
    #[default]
    AllProducts,
    /// Share of rated products only.
    RatedProducts,
}

impl FromStr for PercentageBasis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all_products" => Ok(Self::AllProducts),
            "rated" | "rated_products" => Ok(Self::RatedProducts),
            other => Err(DomainError::validation(format!(
                "unknown rating percentage basis {other:?} (expected \"all\" or \"rated\")"
            ))),
        }
    }
}

/// How many products fall into one rating band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub range: String,
    pub count: usize,
    pub percentage: f64,
}

/// Non-empty rating bands, lowest band first, with percentages taken over the
/// whole catalog.
pub fn rating_distribution(products: &[Product]) -> Vec<RatingDistribution> {
    rating_distribution_with(products, PercentageBasis::AllProducts)
}

/// Non-empty rating bands, lowest band first.
///
/// Unrated products are never counted in a band. Rates outside `[0, 5]` match
/// no band and are dropped as well.
pub fn rating_distribution_with(
    products: &[Product],
    basis: PercentageBasis,
) -> Vec<RatingDistribution> {
    let mut counts = [0usize; RATING_BUCKETS.len()];
    for rating in products.iter().filter_map(|p| p.rating.as_ref()) {
        if let Some(slot) = RATING_BUCKETS.iter().position(|b| b.contains(rating.rate)) {
            counts[slot] += 1;
        }
    }

    let total = match basis {
        PercentageBasis::AllProducts => products.len(),
        PercentageBasis::RatedProducts => rated_count(products),
    };

    RATING_BUCKETS
        .iter()
        .zip(counts)
        .rev()
        .filter(|(_, count)| *count > 0)
        .map(|(bucket, count)| RatingDistribution {
            range: bucket.label.to_string(),
            count,
            percentage: share_percent(count, total),
        })
        .collect()
}

/// Number of products carrying a rating.
pub fn rated_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_rated()).count()
}

/// Rated products as a whole-number percentage of the catalog (`0` when empty).
pub fn rated_share(products: &[Product]) -> u32 {
    if products.is_empty() {
        return 0;
    }
    let share = rated_count(products) as f64 / products.len() as f64 * 100.0;
    round_to(share, 0) as u32
}
