use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, ValueObject};

use crate::draft::ProductDraft;

/// Product identifier assigned by the remote catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))
    }
}

/// Customer rating summary: average `rate` in `[0, 5]` over `count` reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

impl ValueObject for Rating {}

/// A catalog product.
///
/// `category` is a free-text label compared exactly as stored. `rating` is
/// absent for products nobody has reviewed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Build an unrated product from a draft and the id the service assigned.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            image: draft.image,
            rating: None,
        }
    }

    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Some(Rating::new(rate, count));
        self
    }

    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Case-insensitive substring match against the title.
    pub fn title_matches(&self, term: &str) -> bool {
        term.is_empty() || self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Editable fields of this product, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Mens Casual Slim Fit".to_string(),
            price: 15.99,
            description: "Lightweight cotton".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.com/shirt.jpg".to_string(),
        }
    }

    #[test]
    fn deserializes_catalog_payload() {
        let payload = json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://example.com/bag.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        });

        let product: Product = serde_json::from_value(payload).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating::new(3.9, 120)));
    }

    #[test]
    fn missing_rating_means_unrated() {
        let payload = json!({
            "id": 21,
            "title": "New Arrival",
            "price": 5.0,
            "description": "",
            "category": "jewelery",
            "image": ""
        });

        let product: Product = serde_json::from_value(payload).unwrap();
        assert!(!product.is_rated());

        let back = serde_json::to_value(&product).unwrap();
        assert!(back.get("rating").is_none());
    }

    #[test]
    fn from_draft_keeps_fields_and_is_unrated() {
        let product = Product::from_draft(ProductId(9), draft());
        assert_eq!(product.id(), ProductId(9));
        assert_eq!(product.title, "Mens Casual Slim Fit");
        assert_eq!(product.to_draft(), draft());
        assert!(!product.is_rated());
    }

    #[test]
    fn title_match_ignores_case() {
        let product = Product::from_draft(ProductId(1), draft());
        assert!(product.title_matches("slim"));
        assert!(product.title_matches("MENS"));
        assert!(product.title_matches(""));
        assert!(!product.title_matches("jacket"));
    }

    #[test]
    fn product_id_parses_from_str() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        match "abc".parse::<ProductId>() {
            Err(DomainError::InvalidId(msg)) => assert!(msg.contains("ProductId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }
}
