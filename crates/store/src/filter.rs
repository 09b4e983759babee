//! Search + category narrowing of the product list.

use serde::{Deserialize, Serialize};

use storefront_products::Product;

/// Active list filter. The default filter matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring of the title; empty matches all.
    pub search: String,
    /// Exact raw category; `None` means all categories.
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category: category.filter(|c| !c.is_empty()),
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self::new(term, None)
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self::new(String::new(), Some(category.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.title_matches(&self.search)
            && self
                .category
                .as_deref()
                .is_none_or(|category| product.category == category)
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::ProductId;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 1.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn products() -> Vec<Product> {
        vec![
            product(1, "Fjallraven Backpack", "men's clothing"),
            product(2, "WD 2TB Portable Drive", "electronics"),
            product(3, "Rain Jacket Women", "women's clothing"),
            product(4, "Mens Cotton Jacket", "men's clothing"),
        ]
    }

    fn ids(list: &[Product]) -> Vec<u64> {
        list.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&products())), [1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = ProductFilter::search("JACKET");
        assert_eq!(ids(&filter.apply(&products())), [3, 4]);
    }

    #[test]
    fn category_is_exact_match() {
        assert_eq!(ids(&ProductFilter::category("men's clothing").apply(&products())), [1, 4]);
        assert!(ProductFilter::category("Men's clothing").apply(&products()).is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let filter = ProductFilter::new("jacket", Some("men's clothing".to_string()));
        assert_eq!(ids(&filter.apply(&products())), [4]);
    }

    #[test]
    fn empty_category_means_all() {
        let filter = ProductFilter::new("", Some(String::new()));
        assert!(filter.is_empty());
    }
}
