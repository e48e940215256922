use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError> {
        let id = product
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        info!("💾 Saving product '{}' with ID: {id}", product.name);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let saved = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (id, name, description, color, price, stock_quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                color = EXCLUDED.color,
                price = EXCLUDED.price,
                stock_quantity = EXCLUDED.stock_quantity
            RETURNING id, name, description, color, price, stock_quantity
            "#,
        )
        .bind(&id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.color)
        .bind(product.price)
        .bind(product.stock_quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to save product '{}': {:?}", product.name, e);
            RepositoryError::from(e)
        })?;

        info!("✅ Product saved with ID: {id}");

        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        info!("💀 Deleting product with ID: {id}");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            error!("❌ No product deleted, ID {id} does not exist");
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product deleted: {id}");

        Ok(())
    }
}
