//! Create/update payload for catalog products.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Editable product fields, sent as the body of create and update calls.
///
/// The id is assigned by the remote service and ratings are never edited
/// from the catalog UI, so neither appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    /// Required-field checks only: no field may be blank and the price must
    /// be a finite, non-negative amount.
    pub fn validate(&self) -> DomainResult<()> {
        require("title", &self.title)?;

        if !self.price.is_finite() {
            return Err(DomainError::validation("price must be a number"));
        }
        if self.price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }

        require("description", &self.description)?;
        require("category", &self.category)?;
        require("image", &self.image)?;
        Ok(())
    }

    /// Parse a price typed into a form field.
    pub fn parse_price(raw: &str) -> DomainResult<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| DomainError::validation(format!("price is not a number: {raw:?}")))
    }
}

fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
