use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};

/// Store interface for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Persist a new product; the store assigns its id.
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace every field of the row with `product.id`.
    ///
    /// Fails with [`ProductError::ConcurrencyConflict`] when no row was written.
    async fn update(&self, product: Product) -> ProductResult<()>;

    /// Returns `false` when no row had this id.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    async fn exists(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are assigned from 1 upwards and never reused, like a `SERIAL` column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.products.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id sequence exhausted".to_string()))?;

        let product = Product {
            id: store.last_id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut store = self.store.write().await;
        let id = product.id;

        match store.products.get_mut(&id) {
            Some(existing) => {
                *existing = product;
                tracing::info!(product_id = id, "Updated product");
                Ok(())
            }
            None => Err(ProductError::ConcurrencyConflict(id)),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: i32) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.products.contains_key(&id))
    }
}
