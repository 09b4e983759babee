//! Category distribution and top-N ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storefront_products::Product;

use crate::rounding::{capitalize_first, share_percent};

/// Default number of entries in the "Top Categories" ranking.
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// How many products fall into one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    /// Display label (first character upper-cased).
    pub category: String,
    pub count: usize,
    /// Share of all products, one decimal place.
    pub percentage: f64,
}

/// Top-N ranking entries share the distribution shape.
pub type TopCategory = CategoryDistribution;

/// Insertion-ordered key -> count association.
///
/// Iteration yields keys in first-seen order, which is what ties fall back to
/// once the sort by count (stable) has run.
#[derive(Debug, Default)]
pub(crate) struct OrderedTally<'a> {
    index: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> OrderedTally<'a> {
    pub(crate) fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a str, usize)> {
        self.entries
    }
}

/// One entry per distinct category (exact, case-sensitive match), ordered by
/// descending count. Ties keep first-seen order.
pub fn category_distribution(products: &[Product]) -> Vec<CategoryDistribution> {
    let mut tally = OrderedTally::default();
    for product in products {
        tally.add(&product.category);
    }

    let total = products.len();
    let mut distribution: Vec<CategoryDistribution> = tally
        .into_entries()
        .into_iter()
        .map(|(category, count)| CategoryDistribution {
            category: capitalize_first(category),
            count,
            percentage: share_percent(count, total),
        })
        .collect();

    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

/// The first `limit` entries of [`category_distribution`].
pub fn top_categories(products: &[Product], limit: usize) -> Vec<TopCategory> {
    let mut distribution = category_distribution(products);
    distribution.truncate(limit);
    distribution
}
