//! HTTP bindings for the remote catalog.

use serde::de::DeserializeOwned;

use storefront_products::{Product, ProductDraft, ProductId};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Client for the `/products` resource of the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /products`
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.config.products_url();
        tracing::info!(%url, "fetching catalog");

        let resp = self.http.get(&url).send().await.map_err(network)?;
        let products: Vec<Product> = decode(resp).await?;

        tracing::info!(count = products.len(), "catalog fetched");
        Ok(products)
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        draft.validate()?;

        let url = self.config.products_url();
        tracing::info!(%url, title = %draft.title, "creating product");

        let resp = self.http.post(&url).json(draft).send().await.map_err(network)?;
        decode(resp).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ClientError> {
        draft.validate()?;

        let url = self.config.product_url(id);
        tracing::info!(%url, product_id = %id, "updating product");

        let resp = self.http.put(&url).json(draft).send().await.map_err(network)?;
        decode(resp).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        let url = self.config.product_url(id);
        tracing::info!(%url, product_id = %id, "deleting product");

        let resp = self.http.delete(&url).send().await.map_err(network)?;
        ensure_success(resp).await?;
        Ok(())
    }
}

fn network(err: reqwest::Error) -> ClientError {
    tracing::warn!(error = %err, "catalog request failed");
    ClientError::Network(err.to_string())
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %body, "catalog API returned an error");
    Err(ClientError::Api(status.as_u16(), body))
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let resp = ensure_success(resp).await?;
    let bytes = resp.bytes().await.map_err(network)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}
