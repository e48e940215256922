use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Read side of the product store. Lookups return an empty `Vec` when
/// nothing matches; an `Err` means the store could not answer.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_price_between(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_color(&self, color: &str) -> Result<Vec<ProductModel>, RepositoryError>;
}
