use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace the product stored under `id`.
    ///
    /// The id check runs before the store is touched. When the write matches
    /// no row, existence is re-checked once: a missing row is `NotFound`, a
    /// present one means a concurrent writer interfered and the conflict is
    /// returned as is. Nothing is retried.
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<()> {
        if input.id != id {
            return Err(ProductError::IdMismatch {
                path: id,
                body: input.id,
            });
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        match self.repository.update(Product::from(input)).await {
            Err(ProductError::ConcurrencyConflict(_)) => {
                if self.repository.exists(id).await? {
                    tracing::error!(product_id = id, "Unresolved concurrent update");
                    Err(ProductError::ConcurrencyConflict(id))
                } else {
                    Err(ProductError::NotFound(id))
                }
            }
            other => other,
        }
    }

    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
