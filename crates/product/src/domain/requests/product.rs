use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Incoming product data before validation. Every field may be missing or
/// out of range; the service rejects such input before it reaches storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[schema(example = "6.1 inch display")]
    pub description: Option<String>,

    #[schema(example = "Black")]
    pub color: Option<String>,

    #[serde(default)]
    #[schema(example = 499.99)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = 100)]
    pub stock_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindProductsByPriceRange {
    pub min_price: f64,
    pub max_price: f64,
}
