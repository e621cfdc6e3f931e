use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed product store
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all().await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Product::from))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let model = self.base.insert(entity::ActiveModel::from(input)).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let id = product.id;

        match self.base.update(entity::ActiveModel::from(product)).await {
            Ok(_) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => {
                tracing::warn!(product_id = id, "Update matched no row");
                Err(ProductError::ConcurrencyConflict(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: i32) -> ProductResult<bool> {
        Ok(self.base.find_by_id(id).await?.is_some())
    }
}
