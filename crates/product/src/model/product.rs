use crate::{
    domain::requests::product::CreateProductRequest,
    validation::{ValidationError, validate_create_request},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog record. `id` stays `None` until the repository persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
}

// request to unsaved model, field for field
impl TryFrom<&CreateProductRequest> for Product {
    type Error = ValidationError;

    fn try_from(req: &CreateProductRequest) -> Result<Self, Self::Error> {
        validate_create_request(req)?;

        Ok(Product {
            id: None,
            name: req.name.clone().unwrap_or_default(),
            description: req.description.clone(),
            color: req.color.clone(),
            price: req.price,
            stock_quantity: req.stock_quantity,
        })
    }
}
