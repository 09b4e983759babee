//! Remote calls paired with local catalog updates.

use storefront_core::DomainError;
use storefront_products::{Product, ProductDraft, ProductId};
use storefront_store::CatalogStore;

use crate::client::CatalogClient;
use crate::error::ClientError;

/// Keeps a [`CatalogStore`] in step with the remote catalog.
///
/// The store is only touched after the remote call succeeds; a failed call
/// leaves local state as it was.
#[derive(Debug)]
pub struct CatalogService {
    client: CatalogClient,
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(client: CatalogClient, store: CatalogStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore {
        &mut self.store
    }

    /// Reload the whole catalog. Returns the number of products loaded.
    pub async fn refresh(&mut self) -> Result<usize, ClientError> {
        let products = self.client.list_products().await?;
        let count = products.len();
        self.store.replace_all(products);
        Ok(count)
    }

    pub async fn create(&mut self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let product = self.client.create_product(draft).await?;
        self.store.insert(product.clone());
        Ok(product)
    }

    /// Update a known product. The rating is not editable, so a response
    /// without one keeps the rating already held locally.
    ///
    /// Unknown ids fail with [`DomainError::NotFound`] before any request.
    pub async fn update(
        &mut self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ClientError> {
        let existing_rating = self
            .store
            .find(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?
            .rating;

        let mut product = self.client.update_product(id, draft).await?;
        product.id = id;
        if product.rating.is_none() {
            product.rating = existing_rating;
        }
        self.store.update(product.clone())?;
        Ok(product)
    }

    pub async fn delete(&mut self, id: ProductId) -> Result<Product, ClientError> {
        if self.store.find(id).is_none() {
            return Err(DomainError::not_found(format!("product {id}")).into());
        }
        self.client.delete_product(id).await?;
        Ok(self.store.remove(id)?)
    }
}
