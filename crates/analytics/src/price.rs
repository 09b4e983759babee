//! Price statistics.

use serde::{Deserialize, Serialize};

use storefront_products::Product;

use crate::rounding::round_to;

/// Average, minimum and maximum price, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Summary over every product's price. Empty input yields all zeros.
///
/// Prices are taken as stored; negative values are not rejected here.
pub fn price_stats(products: &[Product]) -> PriceStats {
    let Some(first) = products.first() else {
        return PriceStats::default();
    };

    let (sum, min, max) = products.iter().fold(
        (0.0, first.price, first.price),
        |(sum, min, max), p| (sum + p.price, min.min(p.price), max.max(p.price)),
    );
    let average = sum / products.len() as f64;

    PriceStats {
        average: round_to(average, 2),
        min: round_to(min, 2),
        max: round_to(max, 2),
    }
}
