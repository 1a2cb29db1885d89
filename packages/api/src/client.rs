use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{Action, ApiConfig, ApiError, NewProduct, Product, Result};

/// A handle to the product backend.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Arc<str>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: Arc::from(config.backend_url()),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.base
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base)
    }

    /// `GET /api/products?category=..`
    ///
    /// The category is passed through as given. A body without an `items`
    /// array yields an empty list, and entries that are not products are
    /// skipped.
    pub async fn list_products(&self, category: &str) -> Result<Vec<Product>> {
        debug!(category, "fetching products");

        let response = self
            .http
            .get(self.products_url())
            .query(&[("category", category)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                action: Action::Load,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let body: Value = serde_json::from_slice(&body)?;

        Ok(items_from_body(body))
    }

    /// `POST /api/products`. The response body is ignored.
    pub async fn create_product(&self, product: &NewProduct) -> Result<()> {
        debug!(title = %product.title, "creating product");

        let response = self
            .http
            .post(self.products_url())
            .json(product)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                action: Action::Create,
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Create every product in parallel and wait for all of them.
    ///
    /// Any single failure fails the whole batch. Creations that already
    /// succeeded are left on the server.
    pub async fn seed_products(&self, products: &[NewProduct]) -> Result<()> {
        let results = join_all(products.iter().map(|product| self.create_product(product))).await;

        let total = results.len();
        let mut failed = 0;
        let mut first = None;

        for (product, result) in products.iter().zip(results) {
            if let Err(err) = result {
                warn!(title = %product.title, "sample product rejected: {err}");
                failed += 1;
                if first.is_none() {
                    first = Some(err);
                }
            }
        }

        match first {
            None => {
                info!(total, "seeded sample products");
                Ok(())
            }
            Some(first) => Err(ApiError::Seed {
                failed,
                total,
                first: Box::new(first),
            }),
        }
    }
}

fn items_from_body(body: Value) -> Vec<Product> {
    let items = match body {
        Value::Object(mut map) => map.remove("items"),
        _ => None,
    };

    let Some(Value::Array(items)) = items else {
        debug!("response has no `items` array, treating it as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(err) => {
                warn!("skipping malformed product: {err}");
                None
            }
        })
        .collect()
}
