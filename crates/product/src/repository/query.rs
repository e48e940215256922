use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = "id, name, description, color, price, stock_quantity";

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name, id");

        let products = sqlx::query_as::<_, ProductModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(products)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        info!("🆔 Checking product existence: {id}");

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check product {id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching products by name: {name}");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE name = $1 ORDER BY id");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(name)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products by name: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_price_between(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("💰 Fetching products priced between {min_price} and {max_price}");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE price BETWEEN $1 AND $2 ORDER BY price, id"
        );

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(min_price)
            .bind(max_price)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products by price range: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🎨 Fetching products by color: {color}");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE color = $1 ORDER BY id");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(color)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products by color: {:?}", e);
                RepositoryError::from(e)
            })
    }
}
