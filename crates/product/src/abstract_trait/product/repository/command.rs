use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Persists the product, assigning an id when it has none.
    async fn save(&self, product: &ProductModel) -> Result<ProductModel, RepositoryError>;

    /// Removes the record. A missing id yields `RepositoryError::NotFound`.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;
}
