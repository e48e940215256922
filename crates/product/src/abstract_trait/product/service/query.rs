use crate::{
    domain::{
        requests::product::FindProductsByPriceRange,
        response::{api::ApiResponse, product::ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_name(
        &self,
        name: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_price_range(
        &self,
        req: &FindProductsByPriceRange,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_color(
        &self,
        color: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}
