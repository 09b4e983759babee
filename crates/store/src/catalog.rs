//! Authoritative catalog + derived view and analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_analytics::{AnalyticsConfig, CatalogSummary, capitalize_first, summarize_with};
use storefront_core::{DomainError, DomainResult};
use storefront_products::{Product, ProductId};

use crate::filter::ProductFilter;

/// A category as stored, paired with the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Session-scoped catalog state.
///
/// `products` is the authoritative list; `filtered` is the view produced by
/// the active filter. `summary` always reflects `products`.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: AnalyticsConfig,
    products: Vec<Product>,
    filtered: Vec<Product>,
    filter: ProductFilter,
    summary: CatalogSummary,
    refreshed_at: Option<DateTime<Utc>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl CatalogStore {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            products: Vec::new(),
            filtered: Vec::new(),
            filter: ProductFilter::default(),
            summary: summarize_with(&[], &config),
            refreshed_at: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn summary(&self) -> &CatalogSummary {
        &self.summary
    }

    /// When the catalog was last loaded from the remote service.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `(shown, total)` for the "Showing X of Y products" line.
    pub fn showing(&self) -> (usize, usize) {
        (self.filtered.len(), self.products.len())
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct raw category values in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in &self.products {
            if !seen.iter().any(|c| c == &product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Distinct categories with their display label, e.g. for a picker.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories()
            .into_iter()
            .map(|value| CategoryOption {
                label: capitalize_first(&value),
                value,
            })
            .collect()
    }

    /// Replace the whole catalog (after a fetch). The filter is reset.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
        self.filter = ProductFilter::default();
        self.filtered = self.products.clone();
        self.refreshed_at = Some(Utc::now());
        self.recompute();
    }

    /// Narrow the view. Analytics are untouched.
    pub fn apply_filter(&mut self, filter: ProductFilter) {
        self.filtered = filter.apply(&self.products);
        tracing::debug!(
            search = %filter.search,
            category = ?filter.category,
            shown = self.filtered.len(),
            total = self.products.len(),
            "catalog filter applied"
        );
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter(ProductFilter::default());
    }

    /// Add a newly created product to the front of the catalog and the view.
    ///
    /// The remote service may hand out an id that is already present; the
    /// product is kept either way, matching what the service reports.
    pub fn insert(&mut self, product: Product) {
        if self.find(product.id).is_some() {
            tracing::warn!(product_id = %product.id, "inserted product reuses an existing id");
        }
        self.filtered.insert(0, product.clone());
        self.products.insert(0, product);
        self.recompute();
    }

    /// Replace the product(s) with the same id and re-apply the active filter.
    pub fn update(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id;
        let mut replaced = 0usize;
        for slot in self.products.iter_mut().filter(|p| p.id == id) {
            *slot = product.clone();
            replaced += 1;
        }
        if replaced == 0 {
            return Err(DomainError::not_found(format!("product {id}")));
        }

        self.filtered = self.filter.apply(&self.products);
        self.recompute();
        Ok(())
    }

    /// Remove a product from the catalog and the view, returning it.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Product> {
        let position = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let removed = self.products.remove(position);

        self.products.retain(|p| p.id != id);
        self.filtered.retain(|p| p.id != id);
        self.recompute();
        Ok(removed)
    }

    fn recompute(&mut self) {
        self.summary = summarize_with(&self.products, &self.config);
        tracing::debug!(
            total = self.summary.total_products,
            rated = self.summary.rated_products,
            categories = self.summary.categories.len(),
            "catalog analytics recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_analytics::{PercentageBasis, summarize};

    fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price,
            description: "desc".to_string(),
            category: category.to_string(),
            image: "https://example.com/p.jpg".to_string(),
            rating: None,
        }
    }

    fn loaded() -> CatalogStore {
        let mut store = CatalogStore::default();
        store.replace_all(vec![
            product(1, "Backpack", "men's clothing", 109.95).with_rating(3.9, 120),
            product(2, "Slim Fit T-Shirt", "men's clothing", 22.3).with_rating(4.1, 259),
            product(3, "Gold Bracelet", "jewelery", 695.0).with_rating(4.6, 400),
            product(4, "SSD 1TB", "electronics", 109.0),
        ]);
        store
    }

    fn ids(list: &[Product]) -> Vec<u64> {
        list.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn new_store_is_empty_with_zeroed_summary() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert_eq!(store.showing(), (0, 0));
        assert_eq!(store.summary(), &summarize(&[]));
        assert!(store.refreshed_at().is_none());
    }

    #[test]
    fn replace_all_populates_view_and_summary() {
        let store = loaded();
        assert_eq!(store.showing(), (4, 4));
        assert_eq!(store.summary(), &summarize(store.products()));
        assert_eq!(store.summary().total_products, 4);
        assert!(store.refreshed_at().is_some());
    }

    #[test]
    fn filtering_does_not_change_analytics() {
        let mut store = loaded();
        let before = store.summary().clone();

        store.apply_filter(ProductFilter::category("jewelery"));
        assert_eq!(ids(store.filtered()), [3]);
        assert_eq!(store.showing(), (1, 4));
        assert_eq!(store.summary(), &before);

        store.clear_filter();
        assert_eq!(store.showing(), (4, 4));
    }

    #[test]
    fn insert_prepends_and_recomputes() {
        let mut store = loaded();
        store.apply_filter(ProductFilter::search("bracelet"));

        store.insert(product(21, "Desk Lamp", "home", 30.0));

        assert_eq!(ids(store.products()), [21, 1, 2, 3, 4]);
        assert_eq!(ids(store.filtered()), [21, 3]);
        assert_eq!(store.summary().total_products, 5);
        assert_eq!(store.summary().categories.len(), 4);
    }

    #[test]
    fn update_replaces_and_reapplies_filter() {
        let mut store = loaded();
        store.apply_filter(ProductFilter::category("electronics"));

        let moved = product(4, "SSD 1TB", "jewelery", 99.0);
        store.update(moved).unwrap();

        assert_eq!(store.find(ProductId(4)).map(|p| p.price), Some(99.0));
        assert!(store.filtered().is_empty());
        assert!(store.summary().categories.iter().all(|c| c.category != "Electronics"));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = loaded();
        let before = store.summary().clone();
        let err = store.update(product(99, "Ghost", "misc", 1.0)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(store.summary(), &before);
    }

    #[test]
    fn remove_drops_from_both_lists() {
        let mut store = loaded();
        store.apply_filter(ProductFilter::category("men's clothing"));

        let removed = store.remove(ProductId(2)).unwrap();
        assert_eq!(removed.title, "Slim Fit T-Shirt");
        assert_eq!(ids(store.products()), [1, 3, 4]);
        assert_eq!(ids(store.filtered()), [1]);
        assert_eq!(store.summary().rated_products, 2);

        assert!(matches!(store.remove(ProductId(2)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn categories_in_first_seen_order() {
        let store = loaded();
        assert_eq!(store.categories(), ["men's clothing", "jewelery", "electronics"]);
        let labels: Vec<_> = store.category_options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Men's clothing", "Jewelery", "Electronics"]);
    }

    #[test]
    fn category_options_serialize_value_and_label() {
        let store = loaded();
        let json = serde_json::to_value(&store.category_options()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "value": "men's clothing", "label": "Men's clothing" })
        );
    }

    #[test]
    fn replace_all_resets_filter() {
        let mut store = loaded();
        store.apply_filter(ProductFilter::search("gold"));
        store.replace_all(vec![product(7, "Gold Ring", "jewelery", 10.0)]);
        assert!(store.filter().is_empty());
        assert_eq!(store.showing(), (1, 1));
    }

    #[test]
    fn config_flows_into_summary() {
        let config = AnalyticsConfig {
            top_categories_limit: 1,
            rating_basis: PercentageBasis::RatedProducts,
        };
        let mut store = CatalogStore::new(config);
        store.replace_all(loaded().products().to_vec());

        assert_eq!(store.summary().top_categories.len(), 1);
        let sum: f64 = store.summary().ratings.iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 0.2, "sum={sum}");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: after any sequence of inserts/removes the cached
            /// summary equals a fresh summary of the authoritative list.
            #[test]
            fn summary_tracks_authoritative_list(
                ops in prop::collection::vec((any::<bool>(), 1u64..8, "[a-c]"), 0..40)
            ) {
                let mut store = CatalogStore::default();
                for (is_insert, id, category) in ops {
                    if is_insert {
                        store.insert(product(id, "Item", &category, id as f64));
                    } else {
                        let _ = store.remove(ProductId(id));
                    }
                    prop_assert_eq!(store.summary(), &summarize(store.products()));
                }
            }
        }
    }
}
